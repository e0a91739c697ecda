//! # bip85 - Deterministic Entropy From BIP-32 Keychains
//!
//! Derives reproducible secret material for independent applications from a
//! single master key, following BIP-85: a BIP-32 private key plus a derivation
//! path yields 64 bytes of entropy, which application encoders turn into
//! BIP-39 mnemonics, WIF keys, extended private keys, hex blobs or Ripple seeds.
//!
//! ## Features
//!
//! - **Deterministic**: identical master key and path always give identical output
//! - **Isolated**: every application and index derives along its own hardened path
//! - **Secure by design**: secrets live in zeroizing buffers and are wiped on drop
//!
//! ## Usage
//!
//! ```
//! use bip85::{Deriver, Language};
//!
//! let deriver = Deriver::from_xprv(
//!     "xprv9s21ZrQH143K2LBWUUQRFXhucrQqBpKdRRxNVq2zBqsx8HVqFk2uYo8kmbaLLHRdqtQpUm98uKfu3vca1LqdGhUtyoFnCNkfmXRyPXLjbKb",
//! )?;
//!
//! let child = deriver.derive_mnemonic(Language::English, 12, 0)?;
//! assert_eq!(child.path.to_string(), "m/83696968'/39'/0'/12'/0'");
//! assert_eq!(
//!     child.value.as_str(),
//!     "girl mad pet galaxy egg matter matrix prison refuse sense ordinary nose"
//! );
//! # Ok::<(), bip85::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::uninlined_format_args,
    clippy::unreadable_literal,
    clippy::cast_possible_truncation
)]
#![forbid(unsafe_code)]

pub mod app;
mod deriver;
pub mod encoding;
mod entropy;
mod error;
pub mod hash;
pub mod hdpath;
mod language;
mod master;

pub use app::Application;
pub use deriver::{Derived, Deriver};
pub use entropy::{ENTROPY_HMAC_KEY, Entropy};
pub use error::Error;
pub use hdpath::{ChildIndex, DerivationPath};
pub use language::Language;
pub use master::MasterKey;

/// A convenient Result type alias for bip85 operations.
pub type Result<T> = core::result::Result<T, Error>;
