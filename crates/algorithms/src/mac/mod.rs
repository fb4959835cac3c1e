//! Message Authentication Code (MAC) implementations
//!
//! Only the one-time authenticator needed by the AEAD construction lives
//! here. Its contract is the [`OneTimeMac`] trait from `chapoly-api`.

pub mod poly1305;

pub use chapoly_api::traits::OneTimeMac;
pub use poly1305::Poly1305;
