//! BIP-39 wordlist languages and their BIP-85 path codes.

use core::fmt;
use core::str::FromStr;

use crate::Error;

/// Mnemonic language, in BIP-85 path-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English wordlist, code 0.
    #[default]
    English,
    /// Japanese wordlist, code 1.
    Japanese,
    /// Korean wordlist, code 2.
    Korean,
    /// Spanish wordlist, code 3.
    Spanish,
    /// Simplified Chinese wordlist, code 4.
    ChineseSimplified,
    /// Traditional Chinese wordlist, code 5.
    ChineseTraditional,
    /// French wordlist, code 6.
    French,
    /// Italian wordlist, code 7.
    Italian,
    /// Czech wordlist, code 8.
    Czech,
}

impl Language {
    /// All languages, indexed by their path code.
    pub const ALL: [Self; 9] = [
        Self::English,
        Self::Japanese,
        Self::Korean,
        Self::Spanish,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::French,
        Self::Italian,
        Self::Czech,
    ];

    /// Path segment identifying this language.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Spanish => "spanish",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Czech => "czech",
        }
    }

    /// Look up a language by path code.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub(crate) const fn to_bip39(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::Japanese => bip39::Language::Japanese,
            Self::Korean => bip39::Language::Korean,
            Self::Spanish => bip39::Language::Spanish,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Czech => bip39::Language::Czech,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == normalized)
            .ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_table_order() {
        for (i, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.code() as usize, i);
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::Czech.code(), 8);
        assert_eq!(Language::from_code(9), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Japanese".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!(
            "chinese-traditional".parse::<Language>().unwrap(),
            Language::ChineseTraditional
        );
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_unknown_language_rejected() {
        let err = "portuguese".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(ref name) if name == "portuguese"));
    }
}
