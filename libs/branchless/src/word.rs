//! Fixed-width two's-complement words the selection functions operate on.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shr};

use crate::error::Error;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width signed integer with two's-complement wraparound.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`. The trait is
/// sealed: the selection algorithms depend on `>>` being an arithmetic shift,
/// which only the primitive signed types guarantee.
pub trait SignedWord:
    sealed::Sealed
    + Copy
    + Ord
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width W of the word in bits.
    const BITS: u32;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;
    const MINUS_ONE: Self;

    /// `self - rhs` modulo 2^W.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self - rhs` modulo 2^W, plus whether the exact difference was out of range.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);

    /// Lossless widening, used for diagnostics.
    fn widen(self) -> i128;

    /// Method form of [`crate::min`].
    #[must_use]
    #[inline]
    fn branchless_min(self, other: Self) -> Self {
        crate::select::min(self, other)
    }

    /// Method form of [`crate::max`].
    #[must_use]
    #[inline]
    fn branchless_max(self, other: Self) -> Self {
        crate::select::max(self, other)
    }

    /// Method form of [`crate::clamp`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidBounds`] if `lo > hi`.
    #[inline]
    fn branchless_clamp(self, lo: Self, hi: Self) -> Result<Self, Error> {
        crate::select::clamp(self, lo, hi)
    }
}

macro_rules! impl_signed_word {
    ($($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl SignedWord for $t {
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MINUS_ONE: Self = -1;

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }

            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn widen(self) -> i128 {
                self as i128
            }
        }
    )+};
}

impl_signed_word!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn width_of<T: SignedWord>() -> u32 {
        T::BITS
    }

    #[test]
    fn widths_match_primitives() {
        assert_eq!(width_of::<i8>(), 8);
        assert_eq!(width_of::<i16>(), 16);
        assert_eq!(width_of::<i32>(), 32);
        assert_eq!(width_of::<i64>(), 64);
        assert_eq!(width_of::<i128>(), 128);
        assert_eq!(width_of::<isize>(), usize::BITS);
    }

    #[test]
    fn minus_one_is_all_ones() {
        assert_eq!(<i32 as SignedWord>::MINUS_ONE, !<i32 as SignedWord>::ZERO);
        assert_eq!(<i8 as SignedWord>::MINUS_ONE >> 7, -1);
    }

    #[test]
    fn widen_is_lossless() {
        assert_eq!(i8::MIN.widen(), -128);
        assert_eq!(i64::MAX.widen(), i128::from(i64::MAX));
        assert_eq!(i128::MIN.widen(), i128::MIN);
        assert_eq!((-1isize).widen(), -1);
    }

    #[test]
    fn subtraction_wraps_instead_of_panicking() {
        assert_eq!(SignedWord::wrapping_sub(i32::MIN, 1), i32::MAX);
        assert_eq!(SignedWord::overflowing_sub(i32::MIN, 1), (i32::MAX, true));
        assert_eq!(SignedWord::overflowing_sub(7i16, 3), (4, false));
    }

    #[test]
    fn method_sugar_matches_free_functions() {
        assert_eq!(3i64.branchless_min(7), 3);
        assert_eq!(3i64.branchless_max(7), 7);
        assert_eq!(42i16.branchless_clamp(0, 10), Ok(10));
        assert!(5i8.branchless_clamp(9, 1).is_err());
    }
}
