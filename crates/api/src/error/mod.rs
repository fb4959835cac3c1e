//! Error handling for the chapoly ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Specialized result types for different operations
/// Result type for stream cipher operations
pub type CipherResult<T> = Result<T>;
/// Result type for MAC operations
pub type MacResult<T> = Result<T>;
