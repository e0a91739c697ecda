//! Application facade: master key in, application output out.

use zeroize::Zeroizing;

use crate::app::{self, Application};
use crate::{DerivationPath, Entropy, Language, MasterKey, Result};

/// BIP-85 deriver over a single master key.
///
/// Every operation is a pure function of the master key and its arguments,
/// so a shared `&Deriver` can be used from any number of threads.
#[derive(Debug)]
pub struct Deriver {
    master: MasterKey,
}

/// Output of a derivation together with the path it came from.
#[derive(Debug)]
pub struct Derived {
    /// Derivation path used.
    pub path: DerivationPath,
    /// Encoded application output.
    pub value: Zeroizing<String>,
}

impl Deriver {
    /// Create a deriver over an existing master key.
    pub fn new(master: MasterKey) -> Self {
        Self { master }
    }

    /// Create a deriver from an extended private key string.
    pub fn from_xprv(xprv: &str) -> Result<Self> {
        MasterKey::from_xprv(xprv).map(Self::new)
    }

    /// Create a deriver from a BIP-39 mnemonic and passphrase.
    pub fn from_mnemonic(phrase: &str, passphrase: &str) -> Result<Self> {
        MasterKey::from_mnemonic(phrase, passphrase).map(Self::new)
    }

    /// Derive a child BIP-39 mnemonic.
    ///
    /// Path: `m/83696968'/39'/{language}'/{words}'/{index}'`
    pub fn derive_mnemonic(&self, language: Language, words: usize, index: u32) -> Result<Derived> {
        self.derive(&Application::Bip39 { language, words }, index)
    }

    /// Derive a child root extended private key.
    ///
    /// Path: `m/83696968'/32'/{index}'`
    pub fn derive_xprv(&self, index: u32) -> Result<Derived> {
        self.derive(&Application::Xprv, index)
    }

    /// Derive a compressed mainnet WIF private key.
    ///
    /// Path: `m/83696968'/2'/{index}'`
    pub fn derive_wif(&self, index: u32) -> Result<Derived> {
        self.derive(&Application::Wif, index)
    }

    /// Derive `width` bytes of hex entropy.
    ///
    /// Path: `m/83696968'/128169'/{width}'/{index}'`
    pub fn derive_hex(&self, index: u32, width: usize) -> Result<Derived> {
        self.derive(&Application::Hex { width }, index)
    }

    /// Derive a Ripple family seed at a caller-chosen path.
    pub fn derive_ripple_seed(&self, path: &DerivationPath) -> Result<Derived> {
        let entropy = self.master.derive_entropy(path)?;
        Ok(Derived {
            path: path.clone(),
            value: app::ripple::encode(&entropy),
        })
    }

    /// Derive any BIP-85 application at `index`.
    pub fn derive(&self, application: &Application, index: u32) -> Result<Derived> {
        let path = application.path(index)?;
        tracing::debug!(app = application.code(), index, "deriving application entropy");

        let entropy = self.master.derive_entropy(&path)?;
        let value = application.encode(&entropy)?;
        Ok(Derived { path, value })
    }

    /// Derive raw entropy at an arbitrary path.
    pub fn derive_entropy(&self, path: &DerivationPath) -> Result<Entropy> {
        self.master.derive_entropy(path)
    }

    /// The underlying master key.
    #[must_use]
    pub const fn master(&self) -> &MasterKey {
        &self.master
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const XPRV: &str = "xprv9s21ZrQH143K2LBWUUQRFXhucrQqBpKdRRxNVq2zBqsx8HVqFk2uYo8kmbaLLHRdqtQpUm98uKfu3vca1LqdGhUtyoFnCNkfmXRyPXLjbKb";

    fn deriver() -> Deriver {
        Deriver::from_xprv(XPRV).unwrap()
    }

    #[test]
    fn test_mnemonic_12_words() {
        let derived = deriver().derive_mnemonic(Language::English, 12, 0).unwrap();
        assert_eq!(derived.path.to_string(), "m/83696968'/39'/0'/12'/0'");
        assert_eq!(
            derived.value.as_str(),
            "girl mad pet galaxy egg matter matrix prison refuse sense ordinary nose"
        );

        let entropy = deriver().derive_entropy(&derived.path).unwrap();
        assert_eq!(
            hex::encode(&entropy.as_bytes()[..16]),
            "6250b68daf746d12a24d58b4787a714b"
        );
    }

    #[test]
    fn test_mnemonic_18_words() {
        let derived = deriver().derive_mnemonic(Language::English, 18, 0).unwrap();
        assert_eq!(
            derived.value.as_str(),
            "near account window bike charge season chef number sketch tomorrow excuse sniff \
             circle vital hockey outdoor supply token"
        );
    }

    #[test]
    fn test_mnemonic_24_words() {
        let derived = deriver().derive_mnemonic(Language::English, 24, 0).unwrap();
        assert_eq!(
            derived.value.as_str(),
            "puppy ocean match cereal symbol another shed magic wrap hammer bulb intact gadget \
             divorce twin tonight reason outdoor destroy simple truth cigar social volcano"
        );
    }

    #[test]
    fn test_xprv() {
        let derived = deriver().derive_xprv(0).unwrap();
        assert_eq!(derived.path.to_string(), "m/83696968'/32'/0'");
        assert_eq!(
            derived.value.as_str(),
            "xprv9s21ZrQH143K2srSbCSg4m4kLvPMzcWydgmKEnMmoZUurYuBuYG46c6P71UGXMzmriLzCCBvKQWBUv3vPB3m1SATMhp3uEjXHJ42jFg7myX"
        );
    }

    #[test]
    fn test_xprv_bare_path_matches() {
        let bare: DerivationPath = "83696968'/32'/0'".parse().unwrap();
        let entropy = deriver().derive_entropy(&bare).unwrap();
        assert_eq!(
            app::xprv::encode(&entropy).as_str(),
            deriver().derive_xprv(0).unwrap().value.as_str()
        );
    }

    #[test]
    fn test_wif() {
        let derived = deriver().derive_wif(0).unwrap();
        assert_eq!(derived.path.to_string(), "m/83696968'/2'/0'");
        assert_eq!(
            derived.value.as_str(),
            "Kzyv4uF39d4Jrw2W7UryTHwZr1zQVNk4dAFyqE6BuMrMh1Za7uhp"
        );

        let entropy = deriver().derive_entropy(&derived.path).unwrap();
        let decoded = app::wif::decode(&derived.value).unwrap();
        assert_eq!(decoded.key[..], entropy.as_bytes()[..32]);
    }

    #[test]
    fn test_hex() {
        let d = deriver();
        assert_eq!(
            d.derive_hex(0, 32).unwrap().value.as_str(),
            "ea3ceb0b02ee8e587779c63f4b7b3a21e950a213f1ec53cab608d13e8796e6dc"
        );
        assert_eq!(
            d.derive_hex(0, 64).unwrap().value.as_str(),
            "492db4698cf3b73a5a24998aa3e9d7fa96275d85724a91e71aa2d645442f8785\
             55d078fd1f1f67e368976f04137b1f7a0d19232136ca50c44614af72b5582a5c"
        );
        assert_eq!(
            d.derive_hex(1234, 64).unwrap().value.as_str(),
            "61d3c182f7388268463ef327c454a10bc01b3992fa9d2ee1b3891a6b487a5248\
             793e61271066be53660d24e8cb76ff0cfdd0e84e478845d797324c195df9ab8e"
        );
    }

    #[test]
    fn test_ripple_seed() {
        let path: DerivationPath = "m/574946'/0'".parse().unwrap();
        let derived = deriver().derive_ripple_seed(&path).unwrap();
        assert_eq!(derived.value.as_str(), "ssyKPX1uyL4mTpba6hHDRTX2Cj6gT");
        assert_eq!(derived.path, path);
    }

    #[test]
    fn test_from_mnemonic_matches_xprv() {
        let from_mnemonic = Deriver::from_mnemonic(
            "install scatter logic circle pencil average fall shoe quantum disease suspect usage",
            "",
        )
        .unwrap();
        assert_eq!(
            from_mnemonic.derive_wif(0).unwrap().value,
            deriver().derive_wif(0).unwrap().value
        );
    }

    #[test]
    fn test_deterministic() {
        let d = deriver();
        let first = d.derive_hex(5, 64).unwrap();
        let second = d.derive_hex(5, 64).unwrap();
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn test_indices_independent() {
        let d = deriver();
        assert_ne!(d.derive_wif(0).unwrap().value, d.derive_wif(1).unwrap().value);
        assert_ne!(
            d.derive_mnemonic(Language::English, 12, 0).unwrap().value,
            d.derive_mnemonic(Language::English, 12, 1).unwrap().value
        );
        assert_ne!(
            d.derive_hex(0, 32).unwrap().value,
            d.derive_hex(1, 32).unwrap().value
        );
    }

    #[test]
    fn test_errors_propagate() {
        let d = deriver();
        assert!(matches!(
            d.derive_mnemonic(Language::English, 16, 0),
            Err(Error::UnsupportedWordCount(16))
        ));
        assert!(matches!(d.derive_hex(0, 65), Err(Error::WidthOutOfRange(65))));
        assert!(matches!(
            d.derive_xprv(u32::MAX),
            Err(Error::DerivationFailure(_))
        ));
        assert!(matches!(
            Deriver::from_xprv("not an xprv"),
            Err(Error::InvalidExtendedKey(_))
        ));
    }

    #[test]
    fn test_concurrent_derivations_agree() {
        let d = deriver();
        let expected = d.derive_wif(3).unwrap().value;

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| d.derive_wif(3).unwrap().value)).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
