//! BIP-85 applications.
//!
//! Each application owns a path code and an encoder that turns 64 bytes of
//! [`Entropy`] into its output format. The submodules hold the encoders as
//! plain functions so they can be used without a master key.

pub mod hex;
pub mod mnemonic;
pub mod ripple;
pub mod wif;
pub mod xprv;

use core::fmt;

use zeroize::Zeroizing;

use crate::{DerivationPath, Entropy, Language, Result};

/// Path code of the BIP-39 mnemonic application.
pub const BIP39_CODE: u32 = 39;
/// Path code of the extended private key application.
pub const XPRV_CODE: u32 = 32;
/// Path code of the WIF private key application.
pub const WIF_CODE: u32 = 2;
/// Path code of the hex application.
pub const HEX_CODE: u32 = 128169;

/// A BIP-85 application together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Application {
    /// BIP-39 mnemonic of `words` words in `language`.
    Bip39 {
        /// Wordlist language.
        language: Language,
        /// Word count: 12, 15, 18, 21 or 24.
        words: usize,
    },
    /// BIP-32 extended private key.
    Xprv,
    /// Compressed mainnet WIF private key.
    Wif,
    /// `width` bytes of raw entropy as lowercase hex.
    Hex {
        /// Number of bytes, at most 64.
        width: usize,
    },
}

impl Application {
    /// Path code of this application.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::Bip39 { .. } => BIP39_CODE,
            Self::Xprv => XPRV_CODE,
            Self::Wif => WIF_CODE,
            Self::Hex { .. } => HEX_CODE,
        }
    }

    /// Derivation path for `index`.
    ///
    /// Parameters are validated here, before any key derivation happens.
    pub fn path(&self, index: u32) -> Result<DerivationPath> {
        match *self {
            Self::Bip39 { language, words } => {
                mnemonic::entropy_len(words)?;
                DerivationPath::bip85(self.code(), &[language.code(), words as u32, index])
            }
            Self::Xprv | Self::Wif => DerivationPath::bip85(self.code(), &[index]),
            Self::Hex { width } => {
                hex::check_width(width)?;
                DerivationPath::bip85(self.code(), &[width as u32, index])
            }
        }
    }

    /// Encode entropy into this application's output.
    pub fn encode(&self, entropy: &Entropy) -> Result<Zeroizing<String>> {
        match *self {
            Self::Bip39 { language, words } => mnemonic::encode(entropy, words, language),
            Self::Xprv => Ok(xprv::encode(entropy)),
            Self::Wif => Ok(wif::encode(entropy)),
            Self::Hex { width } => hex::encode(entropy, width),
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bip39 { language, words } => write!(f, "BIP39 ({words} words, {language})"),
            Self::Xprv => f.write_str("XPRV"),
            Self::Wif => f.write_str("WIF"),
            Self::Hex { width } => write!(f, "HEX ({width} bytes)"),
        }
    }
}
