//! Security primitives and memory safety utilities
//!
//! Foundational types used throughout chapoly to ensure key material never
//! outlives the operation that needs it.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer};
