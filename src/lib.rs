//! # chapoly
//!
//! ChaCha20 and XChaCha20 stream encryption, the Poly1305 one-time
//! authenticator and the ChaCha20-Poly1305 AEAD, in pure Rust.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! chapoly = "0.3"
//! ```
//!
//! ```
//! use chapoly::prelude::*;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 12];
//! let mut msg = *b"attack at dawn";
//!
//! let tag = chapoly::oneshot::encrypt(&key, &nonce, &mut msg, Some(&b"header"[..])).unwrap();
//!
//! let mut ctx = ChaCha20Poly1305::with_key(&key, &nonce).unwrap();
//! ctx.aad(b"header").unwrap();
//! ctx.decrypt(&mut msg).unwrap();
//! assert!(ctx.verify(&tag).unwrap());
//! assert_eq!(&msg, b"attack at dawn");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, implies `alloc`
//! - `alloc`: the copying `safe_encrypt` / `safe_decrypt` helpers
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`chapoly-api`]: error type and the `StreamCipher` / `OneTimeMac` traits
//! - [`chapoly-common`]: zeroizing secret containers
//! - [`chapoly-internal`]: little-endian and constant-time helpers
//! - [`chapoly-params`]: sizes and constants
//! - [`chapoly-algorithms`]: ChaCha20, Poly1305 and the AEAD

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use chapoly_algorithms as algorithms;
pub use chapoly_api as api;
pub use chapoly_common as common;
pub use chapoly_internal as internal;
pub use chapoly_params as params;

// Callers comparing tags or wiping their own key copies use these directly
pub use subtle;
pub use zeroize;

/// Single-call ChaCha20-Poly1305 helpers
pub use chapoly_algorithms::aead::chacha20poly1305::oneshot;

/// Common imports for chapoly users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Traits
    pub use crate::api::{OneTimeMac, StreamCipher};

    // Primitives
    pub use crate::algorithms::{
        hchacha20, Aead, AeadState, ChaCha20, ChaCha20Poly1305, ChaChaCore, Poly1305, Portable,
    };

    // Security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};
}
