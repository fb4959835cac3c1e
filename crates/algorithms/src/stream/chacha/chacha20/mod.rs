//! ChaCha20 stream cipher with XChaCha20 extended nonces
//!
//! The state layout follows the nonce length passed to [`ChaCha20::init`]:
//!
//! | nonce | words 12-15 |
//! |---|---|
//! | 8 bytes | 64-bit counter, 64-bit nonce |
//! | 12 bytes | 32-bit counter, 96-bit nonce (RFC 8439) |
//! | 16 bytes | 128-bit nonce, no separate counter |
//! | 24, 28 or 32 bytes | HChaCha20 sub-key from the first 16 bytes, then the rest as above |
//!
//! Keys may be 256 bits (`"expand 32-byte k"`) or 128 bits
//! (`"expand 16-byte k"`, key repeated into words 8-11).

use core::fmt;
use core::marker::PhantomData;

use tracing::trace;
use zeroize::Zeroize;

use super::core::{ChaChaCore, Portable};
use crate::error::{validate, Error, Result};
use chapoly_common::security::{EphemeralSecret, SecretBuffer};
use chapoly_internal::endian::{read_u32_le, words_to_le_bytes};
use chapoly_params::utils::symmetric::{
    CHACHA20_BLOCK_SIZE, CHACHA20_FULL_NONCE_SIZE, CHACHA20_KEY_SIZE,
    CHACHA20_LEGACY_NONCE_SIZE, CHACHA20_NONCE_SIZE, CHACHA20_STATE_WORDS, CHACHA_SIGMA,
    CHACHA_TAU, HCHACHA20_NONCE_SIZE, HCHACHA20_OUTPUT_SIZE, XCHACHA20_NONCE_SIZE,
};

const ALGORITHM: &str = "ChaCha20";

type State = [u32; CHACHA20_STATE_WORDS];

/// ChaCha20 stream cipher
///
/// A freshly constructed cipher is uninitialized: every keystream operation
/// fails with [`Error::NotInitialized`] until [`ChaCha20::init`] succeeds.
/// Key material is wiped by [`ChaCha20::destroy`] and on drop.
pub struct ChaCha20<C: ChaChaCore = Portable> {
    /// The 16-word cipher state
    state: State,
    /// Current keystream block
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Next unused byte of `buffer`; `None` until initialized
    position: Option<usize>,
    _core: PhantomData<fn() -> C>,
}

impl ChaCha20 {
    /// Create an uninitialized cipher using the portable permutation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cipher initialized with `key`, `nonce` and `counter`
    pub fn with_key(key: &[u8], nonce: &[u8], counter: u64) -> Result<Self> {
        let mut cipher = Self::new();
        cipher.init(key, nonce, counter)?;
        Ok(cipher)
    }

    /// HChaCha20 sub-key derivation, see [`hchacha20`]
    pub fn derive(key: &[u8], nonce: &[u8]) -> Result<SecretBuffer<HCHACHA20_OUTPUT_SIZE>> {
        hchacha20::<Portable>(key, nonce)
    }
}

impl<C: ChaChaCore> ChaCha20<C> {
    /// (Re)initialize the cipher
    ///
    /// Nonces of 24 bytes or more select XChaCha20: the first 16 bytes feed
    /// [`hchacha20`] and the remaining 8, 12 or 16 bytes are used as
    /// the nonce under the derived key. `counter` is ignored for 16-byte
    /// nonces and truncated to 32 bits for 12-byte nonces.
    ///
    /// On error the cipher is left exactly as it was.
    pub fn init(&mut self, key: &[u8], nonce: &[u8], counter: u64) -> Result<()> {
        validate::key_size(key.len())?;

        let extended = nonce.len() >= XCHACHA20_NONCE_SIZE;
        let state = if extended {
            let (prefix, rest) = nonce.split_at(HCHACHA20_NONCE_SIZE);
            let subkey = hchacha20::<C>(key, prefix)?;
            Self::setup(subkey.as_slice(), rest, counter).map_err(|err| match err {
                Error::InvalidNonceSize { .. } => Error::InvalidNonceSize {
                    actual: nonce.len(),
                },
                other => other,
            })?
        } else {
            Self::setup(key, nonce, counter)?
        };

        self.state.copy_from_slice(&state[..]);
        self.buffer.zeroize();
        self.position = Some(CHACHA20_BLOCK_SIZE);

        trace!(
            core = C::NAME,
            key_len = key.len(),
            nonce_len = nonce.len(),
            extended,
            "chacha20 initialized"
        );
        Ok(())
    }

    /// Encrypt `data` in place
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        let mut pos = self
            .position
            .ok_or(Error::NotInitialized { context: ALGORITHM })?;

        for byte in data.iter_mut() {
            if pos == CHACHA20_BLOCK_SIZE {
                self.block();
                pos = 0;
            }
            *byte ^= self.buffer[pos];
            pos += 1;
        }

        self.position = Some(pos);
        Ok(())
    }

    /// Decrypt `data` in place
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.encrypt(data)
    }

    /// Write the next `output.len()` keystream bytes into `output`
    pub fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        validate::initialized(self.position.is_some(), ALGORITHM)?;
        output.zeroize();
        self.encrypt(output)
    }

    /// Whether the cipher holds a key
    pub fn is_initialized(&self) -> bool {
        self.position.is_some()
    }

    /// Wipe all key material; the cipher must be re-initialized before use
    pub fn destroy(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.position = None;
    }

    /// Full initial state for a non-extended nonce
    fn setup(key: &[u8], nonce: &[u8], counter: u64) -> Result<EphemeralSecret<State>> {
        let mut state = expand_key(key);

        match nonce.len() {
            CHACHA20_LEGACY_NONCE_SIZE => {
                state[12] = counter as u32;
                state[13] = (counter >> 32) as u32;
                state[14] = read_u32_le(nonce, 0);
                state[15] = read_u32_le(nonce, 4);
            }
            CHACHA20_NONCE_SIZE => {
                state[12] = counter as u32;
                state[13] = read_u32_le(nonce, 0);
                state[14] = read_u32_le(nonce, 4);
                state[15] = read_u32_le(nonce, 8);
            }
            CHACHA20_FULL_NONCE_SIZE => {
                for (i, word) in state[12..].iter_mut().enumerate() {
                    *word = read_u32_le(nonce, i * 4);
                }
            }
            actual => return Err(Error::InvalidNonceSize { actual }),
        }

        Ok(state)
    }

    /// Generate the next keystream block and advance the counter
    fn block(&mut self) {
        let mut working = EphemeralSecret::new(self.state);
        C::permute(&mut working);

        for (w, s) in working.iter_mut().zip(self.state.iter()) {
            *w = w.wrapping_add(*s);
        }
        words_to_le_bytes(&working[..], &mut self.buffer);

        // Word 12 carries into word 13
        self.state[12] = self.state[12].wrapping_add(1);
        if self.state[12] == 0 {
            self.state[13] = self.state[13].wrapping_add(1);
        }
    }
}

/// HChaCha20: derive a 256-bit sub-key from `key` and a 16-byte nonce
///
/// Returns words 0-3 and 12-15 of the permuted state, without adding the
/// input state back in.
pub fn hchacha20<C: ChaChaCore>(
    key: &[u8],
    nonce: &[u8],
) -> Result<SecretBuffer<HCHACHA20_OUTPUT_SIZE>> {
    validate::key_size(key.len())?;
    validate::derive_nonce_size(nonce.len())?;

    let mut state = expand_key(key);
    for (i, word) in state[12..].iter_mut().enumerate() {
        *word = read_u32_le(nonce, i * 4);
    }

    C::permute(&mut state);

    let mut subkey = SecretBuffer::<HCHACHA20_OUTPUT_SIZE>::zeroed();
    let out = subkey.as_mut_slice();
    words_to_le_bytes(&state[..4], &mut out[..16]);
    words_to_le_bytes(&state[12..], &mut out[16..]);
    Ok(subkey)
}

/// Constants and key words; words 12-15 are left zero
fn expand_key(key: &[u8]) -> EphemeralSecret<State> {
    let mut state = EphemeralSecret::new([0u32; CHACHA20_STATE_WORDS]);

    let constants = if key.len() == CHACHA20_KEY_SIZE {
        CHACHA_SIGMA
    } else {
        CHACHA_TAU
    };
    state[..4].copy_from_slice(&constants);

    // A 128-bit key wraps around and fills words 8-11 a second time
    for (i, word) in state[4..12].iter_mut().enumerate() {
        *word = read_u32_le(key, (i * 4) % key.len());
    }
    state
}

impl<C: ChaChaCore> Default for ChaCha20<C> {
    fn default() -> Self {
        Self {
            state: [0u32; CHACHA20_STATE_WORDS],
            buffer: [0u8; CHACHA20_BLOCK_SIZE],
            position: None,
            _core: PhantomData,
        }
    }
}

impl<C: ChaChaCore> Clone for ChaCha20<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            buffer: self.buffer,
            position: self.position,
            _core: PhantomData,
        }
    }
}

impl<C: ChaChaCore> fmt::Debug for ChaCha20<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaCha20")
            .field("core", &C::NAME)
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

impl<C: ChaChaCore> Drop for ChaCha20<C> {
    fn drop(&mut self) {
        self.destroy();
    }
}
