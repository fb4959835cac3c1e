//! Public API traits and types for the chapoly library
//!
//! This crate provides the public API surface for the chapoly ecosystem:
//! the shared error type and the trait seams between the stream cipher,
//! the one-time MAC and the AEAD composition built on top of them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{OneTimeMac, StreamCipher};
