use crate::error::Error;
use crate::mask::{lt_mask, select};
use crate::word::SignedWord;

/// The smaller of `a` and `b`, selected without a conditional branch.
///
/// On a tie the mask is zero and `b` is returned, which is the common value.
#[must_use]
#[inline]
pub fn min<T: SignedWord>(a: T, b: T) -> T {
    select(lt_mask(a, b), a, b)
}

/// The larger of `a` and `b`.
///
/// `min` picks one of the two operands; XOR-ing it back out of `a ^ b` leaves
/// the other one.
#[must_use]
#[inline]
pub fn max<T: SignedWord>(a: T, b: T) -> T {
    a ^ b ^ min(a, b)
}

/// `x` restricted to `lo..=hi`.
///
/// # Errors
/// Returns [`Error::InvalidBounds`] if `lo > hi`.
#[inline]
pub fn clamp<T: SignedWord>(x: T, lo: T, hi: T) -> Result<T, Error> {
    if lo > hi {
        return Err(Error::InvalidBounds {
            lo: lo.widen(),
            hi: hi.widen(),
        });
    }
    Ok(max(lo, min(x, hi)))
}
