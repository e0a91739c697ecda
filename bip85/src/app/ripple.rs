//! Ripple seed: entropy to a base-58 ledger secret (`s...`).
//!
//! Not one of the numbered BIP-85 applications; the caller picks the path.

use zeroize::Zeroizing;

use crate::encoding::{Alphabet, base58check_decode, base58check_encode};
use crate::{Entropy, Error, Result};

/// Type marker prefixed to a family seed.
pub const SEED_PREFIX: u8 = 0x21;

/// Seed length in bytes.
pub const SEED_LEN: usize = 16;

/// Encode `entropy[..16]` as a Ripple family seed.
pub fn encode(entropy: &Entropy) -> Zeroizing<String> {
    let mut payload = Zeroizing::new([0u8; SEED_LEN + 1]);
    payload[0] = SEED_PREFIX;
    payload[1..].copy_from_slice(&entropy.as_bytes()[..SEED_LEN]);

    base58check_encode(&payload[..], Alphabet::Ripple)
}

/// Decode a Ripple family seed back to its 16 seed bytes.
pub fn decode(seed: &str) -> Result<Zeroizing<[u8; SEED_LEN]>> {
    let payload = base58check_decode(seed.trim(), Alphabet::Ripple)?;

    if payload.len() != SEED_LEN + 1 {
        return Err(Error::InvalidKeyLength {
            expected: SEED_LEN + 1,
            actual: payload.len(),
        });
    }
    if payload[0] != SEED_PREFIX {
        return Err(Error::InvalidEncoding(format!(
            "unexpected seed type 0x{:02x}",
            payload[0]
        )));
    }

    let mut out = Zeroizing::new([0u8; SEED_LEN]);
    out.copy_from_slice(&payload[1..]);
    Ok(out)
}
