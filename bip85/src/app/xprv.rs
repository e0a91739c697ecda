//! XPRV application: entropy to a fresh BIP-32 root key.
//!
//! The result is not a child of the master tree: depth, parent fingerprint
//! and child number are all zero, the chain code is `entropy[..32]` and the
//! private key is `entropy[32..]`.

use zeroize::Zeroizing;

use crate::Entropy;
use crate::encoding::{Alphabet, base58check_encode};

/// Mainnet extended private key version bytes (`xprv`).
pub const XPRV_VERSION: [u8; 4] = [0x04, 0x88, 0xAD, 0xE4];

/// Serialized length before the checksum.
pub const PAYLOAD_LEN: usize = 78;

/// Serialize `entropy` as an `xprv` string.
pub fn encode(entropy: &Entropy) -> Zeroizing<String> {
    let bytes = entropy.as_bytes();
    let mut data = Zeroizing::new([0u8; PAYLOAD_LEN]);

    // version (4) | depth (1) | parent fingerprint (4) | child number (4)
    data[..4].copy_from_slice(&XPRV_VERSION);
    // chain code (32)
    data[13..45].copy_from_slice(&bytes[..32]);
    // private key (33): 0x00 || key
    data[46..78].copy_from_slice(&bytes[32..]);

    base58check_encode(&data[..], Alphabet::Bitcoin)
}
