//! ChaCha family of stream ciphers
//!
//! The cipher state setup, keystream generation and HChaCha20 sub-key
//! derivation live in [`chacha20`]; the 20-round permutation itself is
//! supplied by a [`ChaChaCore`](self::core::ChaChaCore) strategy chosen at the type level.

pub mod chacha20;
pub mod core;
