//! The ChaCha20 permutation
//!
//! [`ChaChaCore`] is the seam for alternative permutation implementations.
//! The choice is made by type parameter when a cipher is constructed, so a
//! running program never consults global state to pick one.

use chapoly_internal::endian::rotl32;
use chapoly_params::utils::symmetric::{CHACHA20_DOUBLE_ROUNDS, CHACHA20_STATE_WORDS};

/// A 20-round ChaCha permutation over the 16-word state
///
/// Implementations apply the rounds in place and must not add the input
/// state back in: feed-forward is the caller's job, since HChaCha20 skips it.
pub trait ChaChaCore {
    /// Short name reported in diagnostics
    const NAME: &'static str;

    /// Apply 10 double rounds to `state`
    fn permute(state: &mut [u32; CHACHA20_STATE_WORDS]);
}

/// Straight-line portable implementation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Portable;

impl ChaChaCore for Portable {
    const NAME: &'static str = "portable";

    #[inline]
    fn permute(state: &mut [u32; CHACHA20_STATE_WORDS]) {
        for _ in 0..CHACHA20_DOUBLE_ROUNDS {
            // Column rounds
            quarter_round(state, 0, 4, 8, 12);
            quarter_round(state, 1, 5, 9, 13);
            quarter_round(state, 2, 6, 10, 14);
            quarter_round(state, 3, 7, 11, 15);

            // Diagonal rounds
            quarter_round(state, 0, 5, 10, 15);
            quarter_round(state, 1, 6, 11, 12);
            quarter_round(state, 2, 7, 8, 13);
            quarter_round(state, 3, 4, 9, 14);
        }
    }
}

/// The ChaCha20 quarter round function
#[inline(always)]
pub fn quarter_round(
    state: &mut [u32; CHACHA20_STATE_WORDS],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = rotl32(state[d] ^ state[a], 16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = rotl32(state[b] ^ state[c], 12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = rotl32(state[d] ^ state[a], 8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = rotl32(state[b] ^ state[c], 7);
}
