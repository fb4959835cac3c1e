//! ChaCha20, XChaCha20, Poly1305 and ChaCha20-Poly1305
//!
//! This crate provides the cipher, MAC and AEAD implementations of chapoly.
//! Everything is pure Rust, constant-time with respect to key and message
//! material, and usable in both `std` and `no_std` environments. The
//! copying one-shot helpers require the `alloc` feature.
//!
//! # Security Features
//!
//! - Key material, keystream blocks and MAC state are zeroized on destroy
//!   and on drop
//! - Tag comparison is constant-time
//! - Incremental contexts reject out-of-order calls with an error instead
//!   of producing a tag over a malformed MAC input

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Stream cipher implementations
pub mod stream;
pub use stream::{hchacha20, ChaCha20, ChaChaCore, Portable, StreamCipher};

// MAC implementations
pub mod mac;
pub use mac::{OneTimeMac, Poly1305};

// AEAD implementations
pub mod aead;
pub use aead::{Aead, AeadState, ChaCha20Poly1305};
