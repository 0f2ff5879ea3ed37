/// Errors raised by the validating and self-checking entry points.
///
/// Operand values are carried widened to `i128` so one error type serves
/// every word width.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid clamp bounds: lower bound {lo} exceeds upper bound {hi}")]
    InvalidBounds { lo: i128, hi: i128 },

    #[error("Difference {lhs} - {rhs} overflows a {width}-bit word")]
    DifferenceOverflow { width: u32, lhs: i128, rhs: i128 },

    #[error("Identity '{property}' violated for {width}-bit pair ({lhs}, {rhs})")]
    IdentityViolation {
        property: &'static str,
        width: u32,
        lhs: i128,
        rhs: i128,
    },
}
