//! BIP-39 application: entropy to mnemonic phrase.

use bip39::Mnemonic;
use zeroize::Zeroizing;

use crate::{Entropy, Error, Language, Result};

/// Number of entropy bytes consumed for a `words`-word mnemonic.
///
/// `((words - 1) * 11) / 8 + 1`, defined for 12, 15, 18, 21 and 24 words.
pub fn entropy_len(words: usize) -> Result<usize> {
    match words {
        12 | 15 | 18 | 21 | 24 => Ok(((words - 1) * 11) / 8 + 1),
        _ => Err(Error::UnsupportedWordCount(words)),
    }
}

/// Encode the leading bytes of `entropy` as a `words`-word mnemonic.
pub fn encode(entropy: &Entropy, words: usize, language: Language) -> Result<Zeroizing<String>> {
    let width = entropy_len(words)?;
    let mnemonic = Mnemonic::from_entropy_in(language.to_bip39(), &entropy.as_bytes()[..width])?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}
