//! Common implementations and shared functionality for the chapoly library
//!
//! Secret containers that guarantee zeroization of key material, cipher
//! state and derived sub-keys once they go out of scope.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
