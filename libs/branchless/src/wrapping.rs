//! Selection through the raw wrapped difference.
//!
//! These functions use `(a - b) >> (W - 1)` as the mask with the subtraction
//! wrapping modulo 2^W. They never panic and have no undefined behavior, but
//! when `a - b` overflows (operands of opposite sign far enough apart) the
//! mask comes out inverted and the result is the wrong operand:
//!
//! ```
//! use branchless::wrapping;
//!
//! assert_eq!(wrapping::min(-5, 2), -5);
//! assert_eq!(wrapping::min(i32::MIN, i32::MAX), i32::MAX);
//! assert_eq!(wrapping::max(i32::MIN, i32::MAX), i32::MIN);
//! ```
//!
//! Use [`crate::min`] / [`crate::max`] for results that are exact on the
//! whole domain, or the `checked_*` forms here to detect the overflowing pairs.

use crate::error::Error;
use crate::mask::{select, wrapping_diff_mask};
use crate::word::SignedWord;

/// The smaller of `a` and `b` unless `a - b` overflows, in which case the larger.
#[must_use]
#[inline]
pub fn min<T: SignedWord>(a: T, b: T) -> T {
    select(wrapping_diff_mask(a, b), a, b)
}

/// The larger of `a` and `b` unless `a - b` overflows, in which case the smaller.
#[must_use]
#[inline]
pub fn max<T: SignedWord>(a: T, b: T) -> T {
    a ^ b ^ min(a, b)
}

/// [`min`], refusing pairs whose difference overflows.
///
/// # Errors
/// Returns [`Error::DifferenceOverflow`] if `a - b` is not representable in `T`.
#[inline]
pub fn checked_min<T: SignedWord>(a: T, b: T) -> Result<T, Error> {
    ensure_difference_fits(a, b)?;
    Ok(min(a, b))
}

/// [`max`], refusing pairs whose difference overflows.
///
/// # Errors
/// Returns [`Error::DifferenceOverflow`] if `a - b` is not representable in `T`.
#[inline]
pub fn checked_max<T: SignedWord>(a: T, b: T) -> Result<T, Error> {
    ensure_difference_fits(a, b)?;
    Ok(max(a, b))
}

fn ensure_difference_fits<T: SignedWord>(a: T, b: T) -> Result<(), Error> {
    let (_, overflowed) = a.overflowing_sub(b);
    if overflowed {
        return Err(Error::DifferenceOverflow {
            width: T::BITS,
            lhs: a.widen(),
            rhs: b.widen(),
        });
    }
    Ok(())
}
