//! Stream cipher implementations
//!
//! ChaCha20 and its extended-nonce variant XChaCha20 encrypt by XORing the
//! data with a pseudorandom keystream.
//!
//! # Security Considerations
//!
//! Stream ciphers require unique nonces for each encryption operation with the
//! same key. Reusing a nonce with the same key completely breaks the security
//! of the cipher. Extended (24-byte and longer) nonces are large enough to be
//! drawn at random.

/// ChaCha family of stream cipher implementations
pub mod chacha;

// Re-export commonly used types
pub use chacha::chacha20::{hchacha20, ChaCha20};
pub use chacha::core::{ChaChaCore, Portable};
pub use chapoly_api::traits::StreamCipher;

use crate::error::Result;
use chapoly_params::utils::symmetric::CHACHA20_BLOCK_SIZE;

impl<C: ChaChaCore> StreamCipher for ChaCha20<C> {
    const BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

    fn init(&mut self, key: &[u8], nonce: &[u8], counter: u64) -> Result<()> {
        ChaCha20::init(self, key, nonce, counter)
    }

    fn process(&mut self, data: &mut [u8]) -> Result<()> {
        self.encrypt(data)
    }

    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        ChaCha20::keystream(self, output)
    }

    fn destroy(&mut self) {
        ChaCha20::destroy(self)
    }
}
