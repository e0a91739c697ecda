//! Derivation subcommands, one per BIP-85 application.

use bip85::{Derived, DerivationPath, Deriver, Language};
use clap::Subcommand;
use colored::Colorize;

/// Ripple seed path used when none is given.
const DEFAULT_RIPPLE_PATH: &str = "m/574946'/0'";

/// Available derivations.
#[derive(Subcommand)]
pub enum DeriveCommand {
    /// Derive a child BIP39 mnemonic.
    #[command(alias = "bip39")]
    Mnemonic {
        /// Wordlist language (english, japanese, korean, spanish, chinese_simplified,
        /// chinese_traditional, french, italian, czech).
        #[arg(short, long, default_value = "english")]
        language: Language,

        /// Number of words (12, 15, 18, 21, or 24).
        #[arg(short, long, default_value = "12")]
        words: usize,

        /// Child index.
        #[arg(short, long, default_value = "0")]
        index: u32,
    },

    /// Derive a child root extended private key.
    Xprv {
        /// Child index.
        #[arg(short, long, default_value = "0")]
        index: u32,
    },

    /// Derive a WIF private key.
    Wif {
        /// Child index.
        #[arg(short, long, default_value = "0")]
        index: u32,
    },

    /// Derive hex-encoded entropy.
    Hex {
        /// Number of bytes (at most 64).
        #[arg(short, long, default_value = "32")]
        width: usize,

        /// Child index.
        #[arg(short, long, default_value = "0")]
        index: u32,
    },

    /// Derive a Ripple family seed at a custom path.
    Ripple {
        /// Derivation path.
        #[arg(long, default_value = DEFAULT_RIPPLE_PATH)]
        path: DerivationPath,
    },

    /// Print the raw 64-byte entropy at a custom path.
    Entropy {
        /// Derivation path.
        #[arg(long)]
        path: DerivationPath,
    },
}

impl DeriveCommand {
    /// Execute the derivation against `deriver`.
    pub fn execute(self, deriver: &Deriver) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Self::Mnemonic {
                language,
                words,
                index,
            } => {
                let derived = deriver.derive_mnemonic(language, words, index)?;
                print_derived("BIP39", &derived, Some(index));
            }
            Self::Xprv { index } => {
                print_derived("XPRV", &deriver.derive_xprv(index)?, Some(index));
            }
            Self::Wif { index } => {
                print_derived("WIF", &deriver.derive_wif(index)?, Some(index));
            }
            Self::Hex { width, index } => {
                print_derived("HEX", &deriver.derive_hex(index, width)?, Some(index));
            }
            Self::Ripple { path } => {
                print_derived("Ripple Seed", &deriver.derive_ripple_seed(&path)?, None);
            }
            Self::Entropy { path } => {
                let entropy = deriver.derive_entropy(&path)?;
                print_entropy(&path, &entropy.to_hex());
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_derived(application: &str, derived: &Derived, index: Option<u32>) {
    println!();
    println!("      {}  {}", "Application".cyan().bold(), application);
    if let Some(index) = index {
        println!("      {}        {}", "Index".cyan().bold(), index.to_string().dimmed());
    }
    println!("      {}         {}", "Path".cyan().bold(), derived.path);
    println!("      {}       {}", "Output".cyan().bold(), derived.value.as_str().green());
    println!();
}

#[rustfmt::skip]
fn print_entropy(path: &DerivationPath, entropy_hex: &str) {
    println!();
    println!("      {}         {}", "Path".cyan().bold(), path);
    println!("      {}      {}", "Entropy".cyan().bold(), entropy_hex.green());
    println!();
}
