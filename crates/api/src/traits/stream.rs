//! Stream cipher trait

use crate::error::CipherResult;

/// A keystream generator that transforms buffers in place
///
/// Encryption and decryption are the same XOR operation; both default to
/// [`StreamCipher::process`].
pub trait StreamCipher {
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// (Re)initialize with a key, a nonce and an initial block counter
    fn init(&mut self, key: &[u8], nonce: &[u8], counter: u64) -> CipherResult<()>;

    /// XOR `data` in place with the next keystream bytes
    fn process(&mut self, data: &mut [u8]) -> CipherResult<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> CipherResult<()> {
        self.process(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> CipherResult<()> {
        self.process(data)
    }

    /// Write the next keystream bytes into `output`
    fn keystream(&mut self, output: &mut [u8]) -> CipherResult<()>;

    /// Zero all key material; the cipher must be re-initialized before use
    fn destroy(&mut self);
}
