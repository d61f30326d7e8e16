//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!
//!  - `a` indicates the minimum value.
//!  - `b` indicates the maximum value.
//!  - `a < b` must be fulfilled and both must be finite values (no `+-inf` or NaNs).
//!

use crate::{
    domain::{ContinuousDomain, FINITE, PROBABILITY},
    errors::DistributionError,
};

/// Checks that `a` and `b` are finite and `a < b`.
fn check_bounds(a: f64, b: f64) -> Result<(), DistributionError> {
    FINITE.check("a", a)?;
    FINITE.check("b", b)?;
    ContinuousDomain::Above(a).check("b", b)?;
    return Ok(());
}

/// `(hi - lo) / (b - a)` for `hi` and `lo` inside `[a, b]`.
///
/// If `b - a` overflows, both differences are halved first. Halving is not done
/// always because it loses the subnormal widths.
fn ratio_to_width(hi: f64, lo: f64, a: f64, b: f64) -> f64 {
    let width: f64 = b - a;
    if width.is_finite() {
        return (hi - lo) / width;
    }

    return (0.5 * hi - 0.5 * lo) / (0.5 * b - 0.5 * a);
}

/// The probability that a uniform random variable in `[a, b]` falls
/// inside `[x1, x2]`: `(x2 - x1) / (b - a)`.
///
/// Both `x1` and `x2` must be inside `[a, b]`, otherwise a
/// [DistributionError::DomainErr] is returned.
///
/// The bounds are **not** reordered: if `x2 < x1` the result is negative.
///
/// A builder with named arguments is also avaliable, wich avoids mixing
/// up the 4 values:
///
/// ```
/// use ContinuousDistributions::distributions::uniform_interval_builder;
///
/// let p: f64 = uniform_interval_builder()
///     .a(0.0)
///     .b(10.0)
///     .x1(2.0)
///     .x2(6.0)
///     .call()
///     .unwrap();
/// assert!((p - 0.4).abs() < 1e-12);
/// ```
#[bon::builder(start_fn = uniform_interval_builder)]
pub fn uniform_interval(a: f64, b: f64, x1: f64, x2: f64) -> Result<f64, DistributionError> {
    check_bounds(a, b)?;

    let support: ContinuousDomain = ContinuousDomain::Range(a, b);
    support.check("x1", x1)?;
    support.check("x2", x2)?;

    return Ok(ratio_to_width(x2, x1, a, b));
}

/// The pdf of the uniform distribution: `1 / (b - a)` inside `[a, b]` and `0` outside.
pub fn uniform_pdf(a: f64, b: f64, x: f64) -> Result<f64, DistributionError> {
    check_bounds(a, b)?;
    ContinuousDomain::Reals.check("x", x)?;

    if x < a || b < x {
        return Ok(0.0);
    }

    let width: f64 = b - a;
    if width.is_finite() {
        return Ok(1.0 / width);
    }

    return Ok(0.5 / (0.5 * b - 0.5 * a));
}

/// The cdf of the uniform distribution.
pub fn uniform_cdf(a: f64, b: f64, x: f64) -> Result<f64, DistributionError> {
    check_bounds(a, b)?;
    ContinuousDomain::Reals.check("x", x)?;

    if x < a {
        return Ok(0.0);
    }

    if b < x {
        return Ok(1.0);
    }

    return Ok(ratio_to_width(x, a, a, b));
}

/// The quantile function of the uniform distribution. `p` must be in `[0, 1]`.
pub fn uniform_quantile(a: f64, b: f64, p: f64) -> Result<f64, DistributionError> {
    check_bounds(a, b)?;
    PROBABILITY.check("p", p)?;

    // a convex combination of a and b, `b - a` may overflow
    return Ok((1.0 - p) * a + p * b);
}
