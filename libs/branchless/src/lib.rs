#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Branchless Selection Library
//!
//! Minimum, maximum and clamp over fixed-width two's-complement integers,
//! computed with bitwise arithmetic on a sign mask instead of a
//! compare-and-branch:
//! - [`min`] selects through the mask of `a < b`
//! - [`max`] is recovered as `a ^ b ^ min(a, b)`
//! - [`clamp`] composes the two and validates its bounds
//!
//! The functions are pure and total over every `i8`..`i128`/`isize` pair.
//! The literal `(a - b) >> (W - 1)` variant, which misorders pairs whose
//! difference overflows, lives in [`wrapping`].
//!
//! ```
//! assert_eq!(branchless::min(-5, 2), -5);
//! assert_eq!(branchless::max(-5, 2), 2);
//! assert_eq!(branchless::min(i32::MIN, i32::MAX), i32::MIN);
//! ```

mod error;
mod select;

pub mod mask;
pub mod verify;
pub mod word;
pub mod wrapping;

pub use error::Error;
pub use select::{clamp, max, min};
pub use verify::{SweepConfig, SweepReport, verify_identities};
pub use word::SignedWord;
