//! BIP-32 derivation paths and the BIP-85 path layout.
//!
//! Paths are kept as a list of [`ChildIndex`] values; the string form
//! `m/83696968'/39'/0'/12'/0'` is only produced and parsed at the edges.

use core::fmt;
use core::str::FromStr;

use bitcoin::bip32;

use crate::{Error, Result};

/// BIP-85 purpose segment: the ASCII codes of "SEED" written in decimal.
pub const BIP85_PURPOSE: u32 = 83696968;

/// A child index in a derivation path.
///
/// Can be either normal (non-hardened) or hardened.
/// Hardened indices are >= 2^31 in raw form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: displayed as n', stored as n
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::DerivationFailure(format!(
                "index {index} is out of range for a path segment"
            )))
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::DerivationFailure(format!(
                "index {index}' is out of range for a hardened path segment"
            )))
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value (without hardened flag).
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Convert to the raw u32 value used in BIP-32 derivation.
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl From<u32> for ChildIndex {
    fn from(value: u32) -> Self {
        if value >= Self::HARDENED_OFFSET {
            Self::Hardened(value & !Self::HARDENED_OFFSET)
        } else {
            Self::Normal(value)
        }
    }
}

impl From<ChildIndex> for bip32::ChildNumber {
    fn from(index: ChildIndex) -> Self {
        Self::from(index.to_u32())
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{}", i),
            Self::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::DerivationFailure(format!("invalid path segment \"{s}\""));

        if let Some(index_str) = s
            .strip_suffix('\'')
            .or_else(|| s.strip_suffix('h'))
            .or_else(|| s.strip_suffix('H'))
        {
            let index: u32 = index_str.parse().map_err(|_| invalid())?;
            Self::hardened(index)
        } else {
            let index: u32 = s.parse().map_err(|_| invalid())?;
            Self::normal(index)
        }
    }
}

/// A BIP-32 derivation path.
///
/// Always rooted at the master key; `Display` renders the `m/` prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Create an empty derivation path (master key).
    pub fn master() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Create a derivation path from a vector of child indices.
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// Build the BIP-85 path `m/83696968'/<app>'/<params>'...`.
    ///
    /// Every segment is hardened.
    pub fn bip85(application: u32, params: &[u32]) -> Result<Self> {
        let mut indices = Vec::with_capacity(params.len() + 2);
        indices.push(ChildIndex::hardened(BIP85_PURPOSE)?);
        indices.push(ChildIndex::hardened(application)?);
        for &param in params {
            indices.push(ChildIndex::hardened(param)?);
        }
        Ok(Self { indices })
    }

    /// Parse a derivation path from a string.
    ///
    /// Supports formats like:
    /// - "m/83696968'/0'/0'"
    /// - "m/83696968h/0h/0h"
    /// - "83696968'/32'/0'" (rooted at the master key all the same)
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();

        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::master());
        }

        let path = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let indices = path
            .split('/')
            .map(str::parse)
            .collect::<Result<Vec<ChildIndex>>>()?;

        Ok(Self { indices })
    }

    /// Get the child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Get the number of levels in this path.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Check if this path is empty (master key).
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if every index in the path is hardened.
    pub fn is_fully_hardened(&self) -> bool {
        self.indices.iter().all(ChildIndex::is_hardened)
    }

    /// Append a child index to the path.
    pub fn child(&self, index: ChildIndex) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// Convert to the `bitcoin` crate's path for key derivation.
    pub(crate) fn to_bip32(&self) -> bip32::DerivationPath {
        self.indices
            .iter()
            .map(|&index| bip32::ChildNumber::from(index))
            .collect::<Vec<_>>()
            .into()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_index_hardened() {
        let index = ChildIndex::hardened(44).unwrap();
        assert!(index.is_hardened());
        assert_eq!(index.index(), 44);
        assert_eq!(index.to_u32(), 44 | 0x80000000);
        assert_eq!(index.to_string(), "44'");
    }

    #[test]
    fn test_child_index_out_of_range() {
        assert!(matches!(
            ChildIndex::hardened(0x8000_0000),
            Err(Error::DerivationFailure(_))
        ));
        assert!(ChildIndex::normal(u32::MAX).is_err());
        assert!(ChildIndex::hardened(0x7fff_ffff).is_ok());
    }

    #[test]
    fn test_child_index_from_u32() {
        assert_eq!(ChildIndex::from(44), ChildIndex::Normal(44));
        assert_eq!(ChildIndex::from(0x80000000 + 44), ChildIndex::Hardened(44));
    }

    #[test]
    fn test_child_index_parse() {
        assert_eq!("0".parse::<ChildIndex>().unwrap(), ChildIndex::Normal(0));
        assert_eq!("44'".parse::<ChildIndex>().unwrap(), ChildIndex::Hardened(44));
        assert_eq!("44h".parse::<ChildIndex>().unwrap(), ChildIndex::Hardened(44));
        assert_eq!("44H".parse::<ChildIndex>().unwrap(), ChildIndex::Hardened(44));
        assert!("".parse::<ChildIndex>().is_err());
        assert!("x'".parse::<ChildIndex>().is_err());
        assert!("2147483648'".parse::<ChildIndex>().is_err());
    }

    #[test]
    fn test_bip85_path_all_hardened() {
        let path = DerivationPath::bip85(39, &[0, 12, 0]).unwrap();
        assert_eq!(path.to_string(), "m/83696968'/39'/0'/12'/0'");
        assert_eq!(path.depth(), 5);
        assert!(path.is_fully_hardened());
    }

    #[test]
    fn test_bip85_path_rejects_oversized_param() {
        assert!(matches!(
            DerivationPath::bip85(2, &[0x8000_0000]),
            Err(Error::DerivationFailure(_))
        ));
    }

    #[test]
    fn test_parse_with_and_without_root() {
        let rooted: DerivationPath = "m/83696968'/32'/0'".parse().unwrap();
        let bare: DerivationPath = "83696968'/32'/0'".parse().unwrap();
        assert_eq!(rooted, bare);
        assert_eq!(bare.to_string(), "m/83696968'/32'/0'");
    }

    #[test]
    fn test_parse_master() {
        assert!(DerivationPath::parse("m").unwrap().is_master());
        assert!(DerivationPath::parse("").unwrap().is_master());
        assert_eq!(DerivationPath::master().to_string(), "m");
    }

    #[test]
    fn test_parse_rejects_empty_component() {
        assert!(DerivationPath::parse("m/0'//1'").is_err());
        assert!(DerivationPath::parse("m/0'/").is_err());
    }

    #[test]
    fn test_parse_mixed_hardening() {
        let path: DerivationPath = "m/0'/1".parse().unwrap();
        assert_eq!(path.indices(), &[ChildIndex::Hardened(0), ChildIndex::Normal(1)]);
        assert!(!path.is_fully_hardened());
    }

    #[test]
    fn test_child_appends() {
        let path = DerivationPath::master().child(ChildIndex::Hardened(574946));
        assert_eq!(path.to_string(), "m/574946'");
    }

    #[test]
    fn test_to_bip32_matches_string_form() {
        let path = DerivationPath::bip85(2, &[0]).unwrap();
        let expected: bip32::DerivationPath = "m/83696968'/2'/0'".parse().unwrap();
        assert_eq!(path.to_bip32(), expected);
    }
}
