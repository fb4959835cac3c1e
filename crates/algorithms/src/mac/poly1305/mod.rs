//! Poly1305 one-time authenticator (RFC 8439 §2.5)
//!
//! Arithmetic modulo 2^130 - 5 on five 26-bit limbs, so every product fits
//! a `u64` and no step branches on secret data. The final `h mod p`
//! selection is done with a mask.

use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};
use chapoly_api::traits::OneTimeMac;
use chapoly_internal::endian::{read_u32_le, write_u32_le};
use chapoly_params::utils::symmetric::{POLY1305_BLOCK_SIZE, POLY1305_KEY_SIZE, POLY1305_TAG_SIZE};

const ALGORITHM: &str = "Poly1305";

const LIMB_MASK: u32 = 0x3ff_ffff;

/// 2^128, added to every full block
const HIBIT: u32 = 1 << 24;

/// Incremental Poly1305
///
/// Each key must authenticate exactly one message. `finalize` wipes the
/// key, so the instance has to be re-initialized before it can be used
/// again.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    /// Clamped multiplier
    r: [u32; 5],
    /// Accumulator
    h: [u32; 5],
    /// Second key half, added after reduction
    pad: [u32; 4],
    /// Partial block carried between updates
    buffer: [u8; POLY1305_BLOCK_SIZE],
    leftover: usize,
    initialized: bool,
}

impl Poly1305 {
    /// Create an uninitialized instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an instance keyed with `key`
    pub fn with_key(key: &[u8; POLY1305_KEY_SIZE]) -> Self {
        let mut mac = Self::new();
        mac.set_key(key);
        mac
    }

    /// Authenticate `data` under `key` in one call
    pub fn mac(key: &[u8; POLY1305_KEY_SIZE], data: &[u8]) -> [u8; POLY1305_TAG_SIZE] {
        let mut mac = Self::with_key(key);
        mac.absorb(data);
        mac.finish()
    }

    /// Whether a key is loaded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn set_key(&mut self, key: &[u8]) {
        // r &= 0xffffffc0ffffffc0ffffffc0fffffff
        self.r = [
            read_u32_le(key, 0) & 0x3ff_ffff,
            (read_u32_le(key, 3) >> 2) & 0x3ff_ff03,
            (read_u32_le(key, 6) >> 4) & 0x3ff_c0ff,
            (read_u32_le(key, 9) >> 6) & 0x3f0_3fff,
            (read_u32_le(key, 12) >> 8) & 0x00f_ffff,
        ];
        self.pad = [
            read_u32_le(key, 16),
            read_u32_le(key, 20),
            read_u32_le(key, 24),
            read_u32_le(key, 28),
        ];
        self.h = [0; 5];
        self.buffer = [0; POLY1305_BLOCK_SIZE];
        self.leftover = 0;
        self.initialized = true;
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if self.leftover > 0 {
            let want = usize::min(POLY1305_BLOCK_SIZE - self.leftover, data.len());
            self.buffer[self.leftover..self.leftover + want].copy_from_slice(&data[..want]);
            data = &data[want..];
            self.leftover += want;
            if self.leftover < POLY1305_BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.blocks(&block, HIBIT);
            self.leftover = 0;
        }

        let full = data.len() - data.len() % POLY1305_BLOCK_SIZE;
        if full > 0 {
            self.blocks(&data[..full], HIBIT);
            data = &data[full..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.leftover = data.len();
        }
    }

    /// Multiply-accumulate whole 16-byte blocks
    fn blocks(&mut self, data: &[u8], hibit: u32) {
        let [r0, r1, r2, r3, r4] = self.r;
        let (s1, s2, s3, s4) = (r1 * 5, r2 * 5, r3 * 5, r4 * 5);
        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h;

        for block in data.chunks_exact(POLY1305_BLOCK_SIZE) {
            // h += m
            h0 += read_u32_le(block, 0) & LIMB_MASK;
            h1 += (read_u32_le(block, 3) >> 2) & LIMB_MASK;
            h2 += (read_u32_le(block, 6) >> 4) & LIMB_MASK;
            h3 += (read_u32_le(block, 9) >> 6) & LIMB_MASK;
            h4 += (read_u32_le(block, 12) >> 8) | hibit;

            // h *= r
            let d0 = mul(h0, r0) + mul(h1, s4) + mul(h2, s3) + mul(h3, s2) + mul(h4, s1);
            let d1 = mul(h0, r1) + mul(h1, r0) + mul(h2, s4) + mul(h3, s3) + mul(h4, s2);
            let d2 = mul(h0, r2) + mul(h1, r1) + mul(h2, r0) + mul(h3, s4) + mul(h4, s3);
            let d3 = mul(h0, r3) + mul(h1, r2) + mul(h2, r1) + mul(h3, r0) + mul(h4, s4);
            let d4 = mul(h0, r4) + mul(h1, r3) + mul(h2, r2) + mul(h3, r1) + mul(h4, r0);

            // partial reduction mod 2^130 - 5
            let d1 = d1 + (d0 >> 26);
            h0 = d0 as u32 & LIMB_MASK;
            let d2 = d2 + (d1 >> 26);
            h1 = d1 as u32 & LIMB_MASK;
            let d3 = d3 + (d2 >> 26);
            h2 = d2 as u32 & LIMB_MASK;
            let d4 = d4 + (d3 >> 26);
            h3 = d3 as u32 & LIMB_MASK;
            let t = u64::from(h0) + (d4 >> 26) * 5;
            h4 = d4 as u32 & LIMB_MASK;
            h0 = t as u32 & LIMB_MASK;
            h1 += (t >> 26) as u32;
        }

        self.h = [h0, h1, h2, h3, h4];
    }

    /// Pad the trailing partial block, reduce and add the pad
    fn finish(&mut self) -> [u8; POLY1305_TAG_SIZE] {
        if self.leftover > 0 {
            let mut block = [0u8; POLY1305_BLOCK_SIZE];
            block[..self.leftover].copy_from_slice(&self.buffer[..self.leftover]);
            block[self.leftover] = 1;
            self.blocks(&block, 0);
            block.zeroize();
        }

        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h;

        // full carry
        let mut c = h1 >> 26;
        h1 &= LIMB_MASK;
        h2 += c;
        c = h2 >> 26;
        h2 &= LIMB_MASK;
        h3 += c;
        c = h3 >> 26;
        h3 &= LIMB_MASK;
        h4 += c;
        c = h4 >> 26;
        h4 &= LIMB_MASK;
        h0 += c * 5;
        c = h0 >> 26;
        h0 &= LIMB_MASK;
        h1 += c;

        // g = h + 5 - 2^130
        let mut g0 = h0 + 5;
        c = g0 >> 26;
        g0 &= LIMB_MASK;
        let mut g1 = h1 + c;
        c = g1 >> 26;
        g1 &= LIMB_MASK;
        let mut g2 = h2 + c;
        c = g2 >> 26;
        g2 &= LIMB_MASK;
        let mut g3 = h3 + c;
        c = g3 >> 26;
        g3 &= LIMB_MASK;
        let g4 = (h4 + c).wrapping_sub(1 << 26);

        // Keep h when g went negative, otherwise take g
        let mask = (g4 >> 31).wrapping_sub(1);
        h0 = (h0 & !mask) | (g0 & mask);
        h1 = (h1 & !mask) | (g1 & mask);
        h2 = (h2 & !mask) | (g2 & mask);
        h3 = (h3 & !mask) | (g3 & mask);
        h4 = (h4 & !mask) | (g4 & mask);

        // h mod 2^128, then + pad
        let words = [
            h0 | (h1 << 26),
            (h1 >> 6) | (h2 << 20),
            (h2 >> 12) | (h3 << 14),
            (h3 >> 18) | (h4 << 8),
        ];

        let mut tag = [0u8; POLY1305_TAG_SIZE];
        let mut carry = 0u64;
        for (i, (word, pad)) in words.iter().zip(self.pad.iter()).enumerate() {
            let f = u64::from(*word) + u64::from(*pad) + carry;
            write_u32_le(&mut tag, i * 4, f as u32);
            carry = f >> 32;
        }

        self.zeroize();
        tag
    }
}

#[inline(always)]
fn mul(a: u32, b: u32) -> u64 {
    u64::from(a) * u64::from(b)
}

impl OneTimeMac for Poly1305 {
    const KEY_SIZE: usize = POLY1305_KEY_SIZE;
    const TAG_SIZE: usize = POLY1305_TAG_SIZE;

    fn init(&mut self, key: &[u8]) -> Result<()> {
        validate::exact_key_size(key.len(), POLY1305_KEY_SIZE)?;
        self.set_key(key);
        trace!("poly1305 keyed");
        Ok(())
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        validate::initialized(self.initialized, ALGORITHM)?;
        self.absorb(data);
        Ok(())
    }

    fn finalize(&mut self) -> Result<[u8; POLY1305_TAG_SIZE]> {
        if !self.initialized {
            return Err(Error::NotInitialized { context: ALGORITHM });
        }
        Ok(self.finish())
    }

    fn destroy(&mut self) {
        self.zeroize();
    }
}
