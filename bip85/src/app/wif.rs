//! WIF application: entropy to a Wallet Import Format private key.

use zeroize::Zeroizing;

use crate::encoding::{Alphabet, base58check_decode, base58check_encode};
use crate::{Entropy, Error, Result};

/// Mainnet WIF version byte.
pub const MAINNET_VERSION: u8 = 0x80;

/// Suffix marking a key whose public key is serialized compressed.
const COMPRESSED_FLAG: u8 = 0x01;

/// A private key decoded from WIF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifKey {
    /// Network version byte.
    pub version: u8,
    /// Raw 32-byte secret.
    pub key: Zeroizing<[u8; 32]>,
    /// Whether the compressed marker was present.
    pub compressed: bool,
}

/// Encode the first 32 bytes of `entropy` as a compressed mainnet WIF key.
pub fn encode(entropy: &Entropy) -> Zeroizing<String> {
    let mut key = [0u8; 32];
    key.copy_from_slice(&entropy.as_bytes()[..32]);
    let key = Zeroizing::new(key);
    encode_key(MAINNET_VERSION, &key, true)
}

/// Encode a raw 32-byte key as WIF.
pub fn encode_key(version: u8, key: &[u8; 32], compressed: bool) -> Zeroizing<String> {
    let mut data = Zeroizing::new([0u8; 34]);
    data[0] = version;
    data[1..33].copy_from_slice(key);

    let payload_len = if compressed {
        data[33] = COMPRESSED_FLAG;
        34
    } else {
        33
    };

    base58check_encode(&data[..payload_len], Alphabet::Bitcoin)
}

/// Decode a WIF string back to its key, version and compression flag.
pub fn decode(wif: &str) -> Result<WifKey> {
    let payload = base58check_decode(wif.trim(), Alphabet::Bitcoin)?;

    // 1 (version) + 32 (key), plus 1 with the compression flag
    let compressed = match payload.len() {
        33 => false,
        34 if payload[33] == COMPRESSED_FLAG => true,
        34 => {
            return Err(Error::InvalidEncoding(format!(
                "invalid WIF compression flag 0x{:02x}",
                payload[33]
            )));
        }
        actual => {
            return Err(Error::InvalidKeyLength {
                expected: 34,
                actual,
            });
        }
    };

    let mut key = Zeroizing::new([0u8; 32]);
    key.copy_from_slice(&payload[1..33]);

    Ok(WifKey {
        version: payload[0],
        key,
        compressed,
    })
}
