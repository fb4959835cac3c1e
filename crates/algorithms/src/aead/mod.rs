//! Authenticated Encryption with Associated Data (AEAD)
//!
//! ChaCha20-Poly1305 and, through 24-byte and longer nonces,
//! XChaCha20-Poly1305. Contexts are incremental and check every call
//! against an explicit [`AeadState`].

pub mod chacha20poly1305;

// Re-exports
pub use chacha20poly1305::{
    Aead, AeadState, ChaCha20Poly1305, CHACHA20POLY1305_KEY_SIZE, CHACHA20POLY1305_NONCE_SIZE,
    CHACHA20POLY1305_TAG_SIZE, XCHACHA20POLY1305_NONCE_SIZE,
};
