//! Sign masks.
//!
//! A sign mask is a word that is either all ones (`-1`) or all zeros, built by
//! arithmetic-shifting a sign bit across the whole word. Selecting through it
//! with `&`, `|` and `!` replaces a conditional branch.

use crate::word::SignedWord;

/// All ones when `a < b`, all zeros otherwise.
///
/// Exact for every pair, including those whose difference overflows. When the
/// operands share a sign, `a - b` cannot overflow and its sign decides. When
/// they differ, the negative operand is the smaller one, which is read off
/// `a & !b` directly.
#[must_use]
#[inline]
pub fn lt_mask<T: SignedWord>(a: T, b: T) -> T {
    let diff = a.wrapping_sub(b);
    ((a & !b) | (!(a ^ b) & diff)) >> (T::BITS - 1)
}

/// `(a - b) >> (W - 1)` with the subtraction wrapping modulo 2^W.
///
/// Agrees with [`lt_mask`] unless `a - b` overflows, in which case the
/// wrapped difference has the opposite sign and so does the mask.
#[must_use]
#[inline]
pub fn wrapping_diff_mask<T: SignedWord>(a: T, b: T) -> T {
    a.wrapping_sub(b) >> (T::BITS - 1)
}

/// `if_set` where `mask` is all ones, `if_clear` where it is all zeros.
#[must_use]
#[inline]
pub fn select<T: SignedWord>(mask: T, if_set: T, if_clear: T) -> T {
    (if_set & mask) | (if_clear & !mask)
}
