//! Self-check of the min/max algebra.
//!
//! [`verify_identities`] replays the defining properties of [`min`] and
//! [`max`] over every `i8` pair, the boundary values of each wider width and
//! a seeded sample of `i32`/`i64` pairs. Hosts can run it once at startup to
//! confirm the target's shift and wraparound behave as the mask arithmetic
//! assumes.

use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::Error;
use crate::select::{max, min};
use crate::word::SignedWord;

/// Configuration for [`verify_identities`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Pseudo-random pairs drawn for each sampled width (`i32`, `i64`).
    /// Default: `10_000`
    pub samples: u64,

    /// Seed of the sampling generator. Equal seeds replay equal pairs.
    /// Default: `0x5EED`
    pub seed: u64,

    /// Check all 65 536 `i8` pairs.
    /// Default: `true`
    pub exhaustive_i8: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            seed: 0x5EED,
            exhaustive_i8: true,
        }
    }
}

/// Number of pairs checked by a successful sweep, by input class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub exhaustive_pairs: u64,
    pub boundary_pairs: u64,
    pub sampled_pairs: u64,
}

impl SweepReport {
    #[must_use]
    pub fn total(self) -> u64 {
        self.exhaustive_pairs + self.boundary_pairs + self.sampled_pairs
    }
}

/// Check the min/max identities over the inputs selected by `config`.
///
/// # Errors
/// Returns [`Error::IdentityViolation`] for the first pair and property that
/// does not hold.
pub fn verify_identities(config: &SweepConfig) -> Result<SweepReport, Error> {
    let mut report = SweepReport::default();

    if config.exhaustive_i8 {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                check_pair(a, b)?;
            }
        }
        report.exhaustive_pairs = 1 << 16;
        tracing::debug!(pairs = report.exhaustive_pairs, "Exhaustive i8 sweep passed");
    }

    report.boundary_pairs += check_boundaries::<i8>()?;
    report.boundary_pairs += check_boundaries::<i16>()?;
    report.boundary_pairs += check_boundaries::<i32>()?;
    report.boundary_pairs += check_boundaries::<i64>()?;
    report.boundary_pairs += check_boundaries::<i128>()?;
    report.boundary_pairs += check_boundaries::<isize>()?;
    tracing::debug!(pairs = report.boundary_pairs, "Boundary sweep passed");

    let mut rng = StdRng::seed_from_u64(config.seed);
    report.sampled_pairs += check_sample::<i32>(&mut rng, config.samples)?;
    report.sampled_pairs += check_sample::<i64>(&mut rng, config.samples)?;
    tracing::debug!(
        pairs = report.sampled_pairs,
        seed = config.seed,
        "Sampled sweep passed"
    );

    tracing::info!(total = report.total(), "Branchless min/max identities verified");
    Ok(report)
}

/// `MIN`, `MIN + 1`, `-1`, `0`, `1`, `MAX - 1`, `MAX`.
fn boundary_values<T: SignedWord>() -> [T; 7] {
    [
        T::MIN,
        T::MIN | T::ONE,
        T::MINUS_ONE,
        T::ZERO,
        T::ONE,
        T::MAX ^ T::ONE,
        T::MAX,
    ]
}

fn check_boundaries<T: SignedWord>() -> Result<u64, Error> {
    let values = boundary_values::<T>();
    let mut pairs = 0;
    for &a in &values {
        for &b in &values {
            check_pair(a, b)?;
            pairs += 1;
        }
    }
    tracing::debug!(width = T::BITS, pairs, "Boundary pairs passed");
    Ok(pairs)
}

fn check_sample<T>(rng: &mut StdRng, samples: u64) -> Result<u64, Error>
where
    T: SignedWord,
    StandardUniform: Distribution<T>,
{
    for _ in 0..samples {
        let a: T = rng.random();
        let b: T = rng.random();
        check_pair(a, b)?;
    }
    tracing::debug!(width = T::BITS, pairs = samples, "Sampled pairs passed");
    Ok(samples)
}

fn check_pair<T: SignedWord>(a: T, b: T) -> Result<(), Error> {
    let lo = min(a, b);
    let hi = max(a, b);

    // Exact below 128 bits; i128 sums compare modulo 2^128.
    let sum_matches = lo.widen().wrapping_add(hi.widen()) == a.widen().wrapping_add(b.widen());

    let properties = [
        ("min is a lower bound", lo <= a && lo <= b),
        ("min selects an operand", lo == a || lo == b),
        ("max is an upper bound", hi >= a && hi >= b),
        ("max selects an operand", hi == a || hi == b),
        ("min commutes", lo == min(b, a)),
        ("max commutes", hi == max(b, a)),
        ("min is idempotent", min(a, a) == a),
        ("max is idempotent", max(a, a) == a),
        ("min + max == a + b", sum_matches),
        ("a ^ b ^ min == max", a ^ b ^ lo == hi),
    ];

    match properties.iter().find(|(_, holds)| !holds) {
        Some(&(property, _)) => {
            tracing::warn!(
                property,
                width = T::BITS,
                lhs = %a.widen(),
                rhs = %b.widen(),
                "Branchless identity violated"
            );
            Err(Error::IdentityViolation {
                property,
                width: T::BITS,
                lhs: a.widen(),
                rhs: b.widen(),
            })
        }
        None => Ok(()),
    }
}
