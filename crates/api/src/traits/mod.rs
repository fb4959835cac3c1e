//! Trait definitions for the cipher and MAC seams
//!
//! The AEAD composition only talks to its two collaborators through these
//! traits: a [`StreamCipher`] producing keystream in place and a
//! [`OneTimeMac`] absorbing the authenticated stream.

pub mod mac;
pub mod stream;

pub use mac::OneTimeMac;
pub use stream::StreamCipher;
