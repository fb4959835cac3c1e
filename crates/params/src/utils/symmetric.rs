//! Constants for the ChaCha20 family, Poly1305 and their AEAD composition

/// ChaCha20 256-bit key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 128-bit key size in bytes
pub const CHACHA20_SHORT_KEY_SIZE: usize = 16;

/// Nonce size of Bernstein's ChaCha layout (64-bit counter) in bytes
pub const CHACHA20_LEGACY_NONCE_SIZE: usize = 8;

/// RFC 8439 nonce size (32-bit counter) in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// Nonce size that fills every counter/nonce word in bytes
pub const CHACHA20_FULL_NONCE_SIZE: usize = 16;

/// Minimum nonce size that switches to extended-nonce (XChaCha20) mode
pub const XCHACHA20_NONCE_SIZE: usize = 24;

/// Nonce prefix consumed by the HChaCha20 sub-key derivation
pub const HCHACHA20_NONCE_SIZE: usize = 16;

/// HChaCha20 output (derived key) size in bytes
pub const HCHACHA20_OUTPUT_SIZE: usize = 32;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the ChaCha state
pub const CHACHA20_STATE_WORDS: usize = 16;

/// Number of double rounds (column + diagonal) in ChaCha20
pub const CHACHA20_DOUBLE_ROUNDS: usize = 10;

/// "expand 32-byte k" as little-endian words
pub const CHACHA_SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// "expand 16-byte k" as little-endian words
pub const CHACHA_TAU: [u32; 4] = [0x6170_7865, 0x3120_646e, 0x7962_2d36, 0x6b20_6574];

/// Poly1305 key size in bytes
pub const POLY1305_KEY_SIZE: usize = 32;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;

/// Poly1305 block size in bytes
pub const POLY1305_BLOCK_SIZE: usize = 16;

/// Scratch size of the AEAD one-time key buffer (one full keystream block)
pub const AEAD_MAC_KEY_BLOCK_SIZE: usize = CHACHA20_BLOCK_SIZE;

/// AEAD tag size in bytes
pub const AEAD_TAG_SIZE: usize = POLY1305_TAG_SIZE;

/// AEAD padding boundary for the AAD and ciphertext MAC streams
pub const AEAD_PAD_ALIGN: usize = 16;
