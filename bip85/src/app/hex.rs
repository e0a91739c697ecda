//! HEX application: the leading bytes of entropy as lowercase hex.

use zeroize::Zeroizing;

use crate::{Entropy, Error, Result};

/// Reject widths beyond the available entropy.
pub fn check_width(width: usize) -> Result<()> {
    if width > Entropy::LEN {
        return Err(Error::WidthOutOfRange(width));
    }
    Ok(())
}

/// Hex-encode the first `width` bytes of `entropy`.
pub fn encode(entropy: &Entropy, width: usize) -> Result<Zeroizing<String>> {
    check_width(width)?;
    Ok(Zeroizing::new(::hex::encode(&entropy.as_bytes()[..width])))
}
