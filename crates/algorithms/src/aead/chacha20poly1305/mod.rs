//! ChaCha20-Poly1305 authenticated encryption
//!
//! This module implements the ChaCha20-Poly1305 AEAD construction of
//! RFC 8439 §2.8 as an incremental state machine. Nonces of 24 bytes or
//! more select XChaCha20-Poly1305.
//!
//! A message goes through [`Aead::init`], any number of [`Aead::aad`]
//! calls, then any number of calls to exactly one of [`Aead::encrypt`],
//! [`Aead::decrypt`] or [`Aead::auth`], and ends with [`Aead::finalize`] or
//! [`Aead::verify`]. The MAC input is
//!
//! ```text
//! aad || pad16 || ciphertext || pad16 || le64(aad_len) || le64(cipher_len)
//! ```
//!
//! ## Constant-Time Guarantees
//!
//! * Tag comparison accumulates the XOR of all 16 byte pairs and folds it
//!   branchlessly; the same loop runs whatever the tag's validity.
//! * Decryption feeds the ciphertext to the MAC before the buffer is
//!   overwritten, so in-place decryption authenticates what was received.

use core::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::mac::poly1305::Poly1305;
use crate::stream::chacha::chacha20::ChaCha20;
use crate::stream::chacha::core::{ChaChaCore, Portable};
use chapoly_api::traits::OneTimeMac;
use chapoly_common::security::{EphemeralSecret, SecretBuffer};
use chapoly_internal::constant_time::ct_eq_fixed;
use chapoly_internal::endian::write_u64_le;
use chapoly_params::utils::symmetric::{
    AEAD_MAC_KEY_BLOCK_SIZE, AEAD_PAD_ALIGN, AEAD_TAG_SIZE, CHACHA20_KEY_SIZE,
    CHACHA20_NONCE_SIZE, XCHACHA20_NONCE_SIZE,
};

pub mod oneshot;

pub use oneshot::{auth, decrypt, encrypt};
#[cfg(feature = "alloc")]
pub use oneshot::{safe_decrypt, safe_encrypt, Sealed};

/// Size of the 256-bit key in bytes (128-bit keys are accepted as well)
pub const CHACHA20POLY1305_KEY_SIZE: usize = CHACHA20_KEY_SIZE;
/// Size of the RFC 8439 nonce in bytes
pub const CHACHA20POLY1305_NONCE_SIZE: usize = CHACHA20_NONCE_SIZE;
/// Size of the XChaCha20-Poly1305 nonce in bytes
pub const XCHACHA20POLY1305_NONCE_SIZE: usize = XCHACHA20_NONCE_SIZE;
/// Size of the authentication tag in bytes
pub const CHACHA20POLY1305_TAG_SIZE: usize = AEAD_TAG_SIZE;

const ALGORITHM: &str = "ChaCha20Poly1305";

const ZERO_PAD: [u8; AEAD_PAD_ALIGN] = [0u8; AEAD_PAD_ALIGN];

/// Position of an [`Aead`] context in its per-message state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AeadState {
    /// Never initialized, or destroyed
    Uninitialized,
    /// Initialized, accepting associated data
    Aad,
    /// Locked into encryption
    Encrypt,
    /// Locked into decryption
    Decrypt,
    /// Locked into authentication only
    Auth,
    /// Tag produced; the context must be re-initialized
    Finalized,
}

impl AeadState {
    /// Lowercase name used in errors and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            AeadState::Uninitialized => "uninitialized",
            AeadState::Aad => "aad",
            AeadState::Encrypt => "encrypt",
            AeadState::Decrypt => "decrypt",
            AeadState::Auth => "auth",
            AeadState::Finalized => "finalized",
        }
    }

    /// Whether a key is loaded and a message is in progress
    pub fn is_initialized(&self) -> bool {
        match self {
            AeadState::Uninitialized | AeadState::Finalized => false,
            AeadState::Aad | AeadState::Encrypt | AeadState::Decrypt | AeadState::Auth => true,
        }
    }
}

impl fmt::Display for AeadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Incremental AEAD over a ChaCha permutation `C` and a one-time MAC `M`
///
/// All buffers are transformed in place. A rejected call leaves the
/// context as it was, except a failed [`Aead::init`], which leaves it
/// uninitialized.
pub struct Aead<C: ChaChaCore = Portable, M: OneTimeMac = Poly1305> {
    cipher: ChaCha20<C>,
    mac: M,
    /// Keystream block zero; the first `M::KEY_SIZE` bytes key the MAC
    mac_key: SecretBuffer<AEAD_MAC_KEY_BLOCK_SIZE>,
    state: AeadState,
    aad_len: u64,
    cipher_len: u64,
}

/// ChaCha20-Poly1305 with the portable permutation
pub type ChaCha20Poly1305 = Aead<Portable, Poly1305>;

impl ChaCha20Poly1305 {
    /// Create an uninitialized context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context ready for a message under `key` and `nonce`
    pub fn with_key(key: &[u8], nonce: &[u8]) -> Result<Self> {
        let mut ctx = Self::new();
        ctx.init(key, nonce)?;
        Ok(ctx)
    }
}

impl<C: ChaChaCore, M: OneTimeMac + Default> Default for Aead<C, M> {
    fn default() -> Self {
        Self {
            cipher: ChaCha20::default(),
            mac: M::default(),
            mac_key: SecretBuffer::zeroed(),
            state: AeadState::Uninitialized,
            aad_len: 0,
            cipher_len: 0,
        }
    }
}

impl<C: ChaChaCore, M: OneTimeMac> Aead<C, M> {
    /// Start a new message
    ///
    /// Any message in progress is discarded. On error the context is left
    /// uninitialized.
    pub fn init(&mut self, key: &[u8], nonce: &[u8]) -> Result<()> {
        self.destroy();

        self.cipher.init(key, nonce, 0)?;
        self.cipher.encrypt(self.mac_key.as_mut_slice())?;
        let keyed = match self.mac_key.as_slice().get(..M::KEY_SIZE) {
            Some(one_time_key) => self.mac.init(one_time_key),
            None => Err(Error::InvalidKeySize {
                actual: AEAD_MAC_KEY_BLOCK_SIZE,
            }),
        };
        if let Err(err) = keyed {
            self.destroy();
            return Err(err);
        }

        self.state = AeadState::Aad;
        trace!(key_len = key.len(), nonce_len = nonce.len(), "aead initialized");
        Ok(())
    }

    /// Absorb associated data; only allowed before any message bytes
    pub fn aad(&mut self, data: &[u8]) -> Result<()> {
        match self.state {
            AeadState::Uninitialized | AeadState::Finalized => {
                Err(Error::NotInitialized { context: ALGORITHM })
            }
            AeadState::Aad => {
                self.mac.update(data)?;
                self.aad_len += data.len() as u64;
                Ok(())
            }
            AeadState::Encrypt | AeadState::Decrypt | AeadState::Auth => {
                Err(self.rejected("aad"))
            }
        }
    }

    /// Encrypt `data` in place and authenticate the ciphertext
    pub fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.enter(AeadState::Encrypt)?;
        self.cipher.encrypt(data)?;
        self.mac.update(data)?;
        self.cipher_len += data.len() as u64;
        Ok(())
    }

    /// Authenticate the ciphertext in `data`, then decrypt it in place
    ///
    /// The plaintext must not be trusted until [`Aead::verify`] succeeds.
    pub fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.enter(AeadState::Decrypt)?;
        self.mac.update(data)?;
        self.cipher.decrypt(data)?;
        self.cipher_len += data.len() as u64;
        Ok(())
    }

    /// Authenticate ciphertext without decrypting it
    pub fn auth(&mut self, data: &[u8]) -> Result<()> {
        self.enter(AeadState::Auth)?;
        self.mac.update(data)?;
        self.cipher_len += data.len() as u64;
        Ok(())
    }

    /// Finish the message and return its tag
    ///
    /// The context is destroyed afterwards and reports
    /// [`AeadState::Finalized`].
    pub fn finalize(&mut self) -> Result<[u8; AEAD_TAG_SIZE]> {
        match self.state {
            AeadState::Uninitialized | AeadState::Finalized => {
                return Err(Error::NotInitialized { context: ALGORITHM })
            }
            AeadState::Aad => self.pad16(self.aad_len)?,
            AeadState::Encrypt | AeadState::Decrypt | AeadState::Auth => {}
        }
        self.pad16(self.cipher_len)?;

        let mut lengths = [0u8; 16];
        write_u64_le(&mut lengths, 0, self.aad_len);
        write_u64_le(&mut lengths, 8, self.cipher_len);
        self.mac.update(&lengths)?;

        let tag = self.mac.finalize()?;
        trace!(
            aad_len = self.aad_len,
            cipher_len = self.cipher_len,
            mode = self.state.name(),
            "aead finalized"
        );

        self.destroy();
        self.state = AeadState::Finalized;
        Ok(tag)
    }

    /// Finish the message and compare its tag with `tag` in constant time
    ///
    /// A tag of the wrong length is rejected before the context is touched.
    pub fn verify(&mut self, tag: &[u8]) -> Result<bool> {
        let expected: &[u8; AEAD_TAG_SIZE] = tag
            .try_into()
            .map_err(|_| Error::InvalidTagSize { actual: tag.len() })?;

        let computed = EphemeralSecret::new(self.finalize()?);
        let valid = bool::from(ct_eq_fixed(&*computed, expected));
        if !valid {
            debug!("aead tag mismatch");
        }
        Ok(valid)
    }

    /// Wipe the key, MAC state and counters
    pub fn destroy(&mut self) {
        self.cipher.destroy();
        self.mac.destroy();
        self.mac_key.wipe();
        self.aad_len = 0;
        self.cipher_len = 0;
        self.state = AeadState::Uninitialized;
    }

    /// Current state-machine position
    pub fn state(&self) -> AeadState {
        self.state
    }

    /// Associated data absorbed so far
    pub fn aad_len(&self) -> u64 {
        self.aad_len
    }

    /// Message bytes processed so far
    pub fn cipher_len(&self) -> u64 {
        self.cipher_len
    }

    /// Move into `mode`, closing the AAD stream on the first call
    fn enter(&mut self, mode: AeadState) -> Result<()> {
        match self.state {
            AeadState::Uninitialized | AeadState::Finalized => {
                Err(Error::NotInitialized { context: ALGORITHM })
            }
            AeadState::Aad => {
                self.pad16(self.aad_len)?;
                self.state = mode;
                Ok(())
            }
            AeadState::Encrypt | AeadState::Decrypt | AeadState::Auth => {
                if self.state == mode {
                    Ok(())
                } else {
                    Err(self.rejected(mode.name()))
                }
            }
        }
    }

    /// Zero bytes up to the next 16-byte boundary of a stream of `len` bytes
    fn pad16(&mut self, len: u64) -> Result<()> {
        let rem = (len % AEAD_PAD_ALIGN as u64) as usize;
        if rem != 0 {
            self.mac.update(&ZERO_PAD[..AEAD_PAD_ALIGN - rem])?;
        }
        Ok(())
    }

    fn rejected(&self, operation: &'static str) -> Error {
        debug!(operation, state = self.state.name(), "aead call rejected");
        Error::InvalidState {
            operation,
            state: self.state.name(),
        }
    }
}

impl<C: ChaChaCore, M: OneTimeMac> fmt::Debug for Aead<C, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aead")
            .field("core", &C::NAME)
            .field("state", &self.state)
            .field("aad_len", &self.aad_len)
            .field("cipher_len", &self.cipher_len)
            .finish_non_exhaustive()
    }
}
