//! Error handling for cryptographic primitives
//!
//! The algorithms share the single [`chapoly_api::Error`] type; this module
//! re-exports it next to the validation helpers every entry point uses.

pub use chapoly_api::error::{CipherResult, MacResult};
pub use chapoly_api::{Error, Result};

// Include the validation submodule
pub mod validate;
