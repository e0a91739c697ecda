//! Base58check encoding over the Bitcoin and Ripple alphabets.

use zeroize::Zeroizing;

use crate::hash::checksum;
use crate::{Error, Result};

/// Base-58 alphabet used by an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Bitcoin alphabet (`123456789ABC...`).
    #[default]
    Bitcoin,
    /// Ripple alphabet (`rpshnaf39wBU...`).
    Ripple,
}

impl Alphabet {
    const fn bs58(self) -> &'static bs58::Alphabet {
        match self {
            Self::Bitcoin => bs58::Alphabet::BITCOIN,
            Self::Ripple => bs58::Alphabet::RIPPLE,
        }
    }
}

/// Append the 4-byte checksum to `payload` and base-58 encode it.
pub fn base58check_encode(payload: &[u8], alphabet: Alphabet) -> Zeroizing<String> {
    let mut data = Zeroizing::new(Vec::with_capacity(payload.len() + 4));
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));

    Zeroizing::new(
        bs58::encode(data.as_slice())
            .with_alphabet(alphabet.bs58())
            .into_string(),
    )
}

/// Decode a base58check string and verify its checksum.
///
/// Returns the payload without the checksum.
pub fn base58check_decode(encoded: &str, alphabet: Alphabet) -> Result<Zeroizing<Vec<u8>>> {
    let data = Zeroizing::new(
        bs58::decode(encoded)
            .with_alphabet(alphabet.bs58())
            .into_vec()?,
    );

    if data.len() < 5 {
        return Err(Error::InvalidEncoding(format!(
            "base58check data is {} bytes, need at least 5",
            data.len()
        )));
    }

    let (payload, check) = data.split_at(data.len() - 4);
    if check != checksum(payload).as_slice() {
        return Err(Error::ChecksumMismatch);
    }

    Ok(Zeroizing::new(payload.to_vec()))
}
