//! Validation utilities for cryptographic primitives

use super::{Error, Result};
use chapoly_params::utils::symmetric::{
    AEAD_TAG_SIZE, CHACHA20_KEY_SIZE, CHACHA20_SHORT_KEY_SIZE, HCHACHA20_NONCE_SIZE,
};

/// Validate a ChaCha key length (128 or 256 bits)
#[inline(always)]
pub fn key_size(actual: usize) -> Result<()> {
    if actual != CHACHA20_KEY_SIZE && actual != CHACHA20_SHORT_KEY_SIZE {
        return Err(Error::InvalidKeySize { actual });
    }
    Ok(())
}

/// Validate an exact key length
#[inline(always)]
pub fn exact_key_size(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeySize { actual });
    }
    Ok(())
}

/// Validate the HChaCha20 nonce length
#[inline(always)]
pub fn derive_nonce_size(actual: usize) -> Result<()> {
    if actual != HCHACHA20_NONCE_SIZE {
        return Err(Error::InvalidNonceSize { actual });
    }
    Ok(())
}

/// Validate an authentication tag length
#[inline(always)]
pub fn tag_size(actual: usize) -> Result<()> {
    if actual != AEAD_TAG_SIZE {
        return Err(Error::InvalidTagSize { actual });
    }
    Ok(())
}

/// Validate that a context has been initialized
#[inline(always)]
pub fn initialized(is_initialized: bool, context: &'static str) -> Result<()> {
    if !is_initialized {
        return Err(Error::NotInitialized { context });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::AuthenticationFailed { context });
    }
    Ok(())
}
