//! Constant values for chapoly cryptographic operations
//!
//! This library provides the sizes and magic words shared by the stream
//! cipher, the one-time MAC and the AEAD construction.

#![no_std]

pub mod utils;
