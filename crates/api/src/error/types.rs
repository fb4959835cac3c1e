//! Error type definitions for cryptographic operations

use thiserror::Error;

/// Primary error type for cipher, MAC and AEAD operations
///
/// Every variant is local and synchronous: the failing call leaves no
/// partial result behind, and the caller has to re-initialize the context
/// to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Key is neither 16 nor 32 bytes long
    #[error("Invalid key size: expected 16 or 32 bytes, got {actual}")]
    InvalidKeySize {
        /// Length of the rejected key
        actual: usize,
    },

    /// Nonce length does not select any supported state layout
    #[error("Invalid nonce size: got {actual} bytes")]
    InvalidNonceSize {
        /// Length of the rejected nonce
        actual: usize,
    },

    /// Operation on a never-initialized, destroyed or finalized context
    #[error("{context}: context is not initialized")]
    NotInitialized {
        /// Component that rejected the call
        context: &'static str,
    },

    /// Operation forbidden at the current state-machine position
    #[error("Invalid state for {operation}: context is in {state} state")]
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// State the context was in
        state: &'static str,
    },

    /// Authentication tag is not 16 bytes long
    #[error("Invalid tag size: expected 16 bytes, got {actual}")]
    InvalidTagSize {
        /// Length of the rejected tag
        actual: usize,
    },

    /// Tag mismatch surfaced by the checked decryption helpers
    #[error("Authentication failed for {context}: cipher could not be decrypted")]
    AuthenticationFailed {
        /// Algorithm that failed authentication
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Whether the error reports a tag mismatch rather than misuse
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::AuthenticationFailed { .. })
    }
}
