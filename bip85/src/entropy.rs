//! BIP-85 entropy from a derived child key.

use core::fmt;

use zeroize::Zeroizing;

use crate::hash::hmac_sha512;
use crate::{Error, Result};

/// HMAC key fixed by BIP-85.
pub const ENTROPY_HMAC_KEY: &[u8] = b"bip-entropy-from-k";

/// 64 bytes of derived entropy.
///
/// Always the full HMAC-SHA512 output; application encoders truncate it.
#[derive(Clone)]
pub struct Entropy(Zeroizing<[u8; 64]>);

impl Entropy {
    /// Entropy length in bytes.
    pub const LEN: usize = 64;

    /// Compute entropy from a 32-byte child private key `k`.
    pub fn from_k(child_private_key: &[u8]) -> Result<Self> {
        if child_private_key.len() != 32 {
            return Err(Error::InvalidKeyLength {
                expected: 32,
                actual: child_private_key.len(),
            });
        }
        Ok(Self(Zeroizing::new(hmac_sha512(
            ENTROPY_HMAC_KEY,
            child_private_key,
        ))))
    }

    /// Wrap 64 bytes of entropy obtained elsewhere.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Borrow the raw entropy bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex of all 64 bytes.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.0[..]))
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl PartialEq for Entropy {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}

impl Eq for Entropy {}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Entropy([REDACTED])")
    }
}
