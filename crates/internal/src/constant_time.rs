//! Constant-time operations to prevent timing attacks

use subtle::Choice;

/// Fold an accumulated difference byte into a [`Choice`]
///
/// Returns `Choice(1)` iff `diff == 0`: widened to 32 bits, `diff - 1` only
/// sets the top bit when it wraps.
#[inline(always)]
pub fn fold_zero(diff: u8) -> Choice {
    let wide = diff as u32;
    Choice::from((wide.wrapping_sub(1) >> 31) as u8)
}

/// Constant-time equality of two fixed-size arrays
///
/// Accumulates the XOR of every byte pair and folds once at the end, so
/// neither timing nor memory access depends on where the first mismatch
/// is.
pub fn ct_eq_fixed<const N: usize>(a: &[u8; N], b: &[u8; N]) -> Choice {
    let mut acc = 0u8;
    for i in 0..N {
        acc |= a[i] ^ b[i];
    }
    fold_zero(acc)
}
