//! Error types for BIP-85 derivation.

use core::fmt;

/// Errors that can occur while deriving or encoding BIP-85 entropy.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A key or payload had the wrong number of bytes.
    InvalidKeyLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// The extended private key string could not be parsed.
    InvalidExtendedKey(bitcoin::bip32::Error),
    /// The mnemonic phrase failed wordlist or checksum validation.
    InvalidMnemonic(bip39::Error),
    /// A path segment was invalid or child derivation failed.
    DerivationFailure(String),
    /// The language name is not one of the BIP-85 languages.
    UnknownLanguage(String),
    /// The word count has no BIP-39 mnemonic.
    UnsupportedWordCount(usize),
    /// The hex width exceeds the 64 bytes of available entropy.
    WidthOutOfRange(usize),
    /// A base58check checksum did not match its payload.
    ChecksumMismatch,
    /// Input was not valid base-58 or had an unexpected layout.
    InvalidEncoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { expected, actual } => {
                write!(f, "invalid key length: expected {expected} bytes, got {actual}")
            }
            Self::InvalidExtendedKey(e) => write!(f, "invalid extended private key: {e}"),
            Self::InvalidMnemonic(e) => write!(f, "invalid mnemonic: {e}"),
            Self::DerivationFailure(reason) => write!(f, "derivation failed: {reason}"),
            Self::UnknownLanguage(name) => write!(f, "unknown mnemonic language \"{name}\""),
            Self::UnsupportedWordCount(n) => {
                write!(f, "unsupported word count {n}, must be 12, 15, 18, 21, or 24")
            }
            Self::WidthOutOfRange(n) => {
                write!(f, "hex width {n} out of range, must be at most 64 bytes")
            }
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::InvalidEncoding(reason) => write!(f, "invalid encoding: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidExtendedKey(e) => Some(e),
            Self::InvalidMnemonic(e) => Some(e),
            Self::InvalidKeyLength { .. }
            | Self::DerivationFailure(_)
            | Self::UnknownLanguage(_)
            | Self::UnsupportedWordCount(_)
            | Self::WidthOutOfRange(_)
            | Self::ChecksumMismatch
            | Self::InvalidEncoding(_) => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::InvalidMnemonic(err)
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(err: bs58::decode::Error) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}
