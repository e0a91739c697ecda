//! BIP-32 master key: the root every BIP-85 derivation walks from.

use core::fmt;
use core::str::FromStr;

use bip39::Mnemonic;
use bitcoin::bip32::Xpriv;
use bitcoin::secp256k1::{All, Secp256k1};
use zeroize::Zeroizing;

use crate::{DerivationPath, Entropy, Error, Result};

/// A BIP-32 master private key.
///
/// Built from a serialized extended private key or from a BIP-39 mnemonic
/// and passphrase. The secret key is erased when the value is dropped.
pub struct MasterKey {
    xpriv: Xpriv,
    secp: Secp256k1<All>,
}

impl MasterKey {
    /// Parse an extended private key string (`xprv...` or `tprv...`).
    pub fn from_xprv(xprv: &str) -> Result<Self> {
        let xpriv = Xpriv::from_str(xprv.trim()).map_err(Error::InvalidExtendedKey)?;
        Ok(Self::from_xpriv(xpriv))
    }

    /// Derive the master key from a BIP-39 mnemonic and passphrase.
    ///
    /// The wordlist language is detected from the phrase. When its words
    /// appear in several wordlists, each candidate is tried in BIP-39 list
    /// order and the first whose checksum verifies is used.
    pub fn from_mnemonic(phrase: &str, passphrase: &str) -> Result<Self> {
        let mnemonic = match Mnemonic::parse(phrase) {
            Err(bip39::Error::AmbiguousLanguages(candidates)) => candidates
                .iter()
                .find_map(|language| Mnemonic::parse_in(language, phrase).ok())
                .ok_or(Error::InvalidMnemonic(bip39::Error::AmbiguousLanguages(candidates)))?,
            parsed => parsed?,
        };
        let seed = Zeroizing::new(mnemonic.to_seed(passphrase));

        let xpriv = Xpriv::new_master(bitcoin::Network::Bitcoin, &seed[..])
            .map_err(|e| Error::DerivationFailure(format!("master key from seed: {e}")))?;

        tracing::debug!(words = mnemonic.word_count(), "master key derived from mnemonic");
        Ok(Self::from_xpriv(xpriv))
    }

    fn from_xpriv(xpriv: Xpriv) -> Self {
        Self {
            xpriv,
            secp: Secp256k1::new(),
        }
    }

    /// Walk `path` from the master key and return the child's 32-byte private key.
    pub fn derive_child_key(&self, path: &DerivationPath) -> Result<Zeroizing<[u8; 32]>> {
        tracing::debug!(%path, "deriving child key");

        let mut child = self
            .xpriv
            .derive_priv(&self.secp, &path.to_bip32())
            .map_err(|e| Error::DerivationFailure(format!("{path}: {e}")))?;

        let key = Zeroizing::new(child.private_key.secret_bytes());
        child.private_key.non_secure_erase();
        Ok(key)
    }

    /// Derive BIP-85 entropy at `path`.
    pub fn derive_entropy(&self, path: &DerivationPath) -> Result<Entropy> {
        let key = self.derive_child_key(path)?;
        Entropy::from_k(&key[..])
    }

    /// Serialize the master key as an extended private key string.
    pub fn to_xprv(&self) -> Zeroizing<String> {
        Zeroizing::new(self.xpriv.to_string())
    }
}

impl FromStr for MasterKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xprv(s)
    }
}

impl Drop for MasterKey {
    fn drop(&mut self) {
        self.xpriv.private_key.non_secure_erase();
    }
}

impl fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MasterKey")
            .field("depth", &self.xpriv.depth)
            .field("network", &self.xpriv.network)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
