//! One-time message authentication code trait

use crate::error::MacResult;

/// A MAC whose key must never authenticate more than one message
///
/// Implementations must be constant-time internally: the AEAD layer relies
/// on them not to leak key or message material through timing.
pub trait OneTimeMac {
    /// One-time key size in bytes
    const KEY_SIZE: usize;

    /// Tag size in bytes
    const TAG_SIZE: usize;

    /// Start a new message under `key`, which must be `KEY_SIZE` bytes
    fn init(&mut self, key: &[u8]) -> MacResult<()>;

    /// Absorb more message bytes; may be called any number of times
    fn update(&mut self, data: &[u8]) -> MacResult<()>;

    /// Produce the tag and reset the MAC to its uninitialized state
    fn finalize(&mut self) -> MacResult<[u8; 16]>;

    /// Zero all key material and buffered input
    fn destroy(&mut self);
}
