//! Single-call ChaCha20-Poly1305
//!
//! [`encrypt`], [`decrypt`] and [`auth`] work in place on caller buffers.
//! The `safe_` variants copy their input first and never touch the
//! caller's data; they need the `alloc` feature.

use super::ChaCha20Poly1305;
use crate::error::{validate, Result};
use chapoly_params::utils::symmetric::AEAD_TAG_SIZE;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use tracing::debug;
#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

#[cfg(feature = "alloc")]
const ALGORITHM: &str = "ChaCha20Poly1305";

fn start(key: &[u8], nonce: &[u8], aad: Option<&[u8]>) -> Result<ChaCha20Poly1305> {
    let mut ctx = ChaCha20Poly1305::with_key(key, nonce)?;
    if let Some(aad) = aad {
        ctx.aad(aad)?;
    }
    Ok(ctx)
}

/// Encrypt `msg` in place and return the tag
pub fn encrypt(
    key: &[u8],
    nonce: &[u8],
    msg: &mut [u8],
    aad: Option<&[u8]>,
) -> Result<[u8; AEAD_TAG_SIZE]> {
    let mut ctx = start(key, nonce, aad)?;
    ctx.encrypt(msg)?;
    ctx.finalize()
}

/// Decrypt `msg` in place and check `tag`
///
/// `msg` holds the decrypted bytes whatever the outcome; callers must
/// discard them when `Ok(false)` is returned. A tag of the wrong length is
/// rejected before `msg` is modified.
pub fn decrypt(
    key: &[u8],
    nonce: &[u8],
    msg: &mut [u8],
    tag: &[u8],
    aad: Option<&[u8]>,
) -> Result<bool> {
    validate::tag_size(tag.len())?;
    let mut ctx = start(key, nonce, aad)?;
    ctx.decrypt(msg)?;
    ctx.verify(tag)
}

/// Check `tag` over ciphertext `msg` without decrypting it
pub fn auth(
    key: &[u8],
    nonce: &[u8],
    msg: &[u8],
    tag: &[u8],
    aad: Option<&[u8]>,
) -> Result<bool> {
    validate::tag_size(tag.len())?;
    let mut ctx = start(key, nonce, aad)?;
    ctx.auth(msg)?;
    ctx.verify(tag)
}

/// Ciphertext and tag produced by [`safe_encrypt`]
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sealed {
    /// Encrypted message, same length as the plaintext
    pub ciphertext: Vec<u8>,
    /// Authentication tag
    pub tag: [u8; AEAD_TAG_SIZE],
}

/// Encrypt a copy of `msg`
#[cfg(feature = "alloc")]
pub fn safe_encrypt(key: &[u8], nonce: &[u8], msg: &[u8], aad: Option<&[u8]>) -> Result<Sealed> {
    let mut ciphertext = msg.to_vec();
    let tag = encrypt(key, nonce, &mut ciphertext, aad)?;
    Ok(Sealed { ciphertext, tag })
}

/// Decrypt a copy of `ciphertext`, returning the plaintext only if `tag`
/// matches
///
/// A mismatch yields [`crate::Error::AuthenticationFailed`]; the recovered
/// bytes are wiped before the error is returned.
#[cfg(feature = "alloc")]
pub fn safe_decrypt(
    key: &[u8],
    nonce: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>> {
    validate::tag_size(tag.len())?;

    let mut plaintext = Zeroizing::new(ciphertext.to_vec());
    let valid = decrypt(key, nonce, &mut plaintext, tag, aad)?;
    if !valid {
        debug!(
            cipher_len = ciphertext.len(),
            "authentication failed, plaintext discarded"
        );
    }
    validate::authentication(valid, ALGORITHM)?;

    Ok(core::mem::take(&mut *plaintext))
}
