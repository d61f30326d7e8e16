//! # Pareto distribution
//!
//! The [Pareto distribution](https://en.wikipedia.org/wiki/Pareto_distribution)
//! is a continuous, heavy tailed distribution. It has 2 parameters:
//!  - `a`: the shape (also called tail index). Must be stricly positive.
//!  - `b`: the scale, wich is also the minimum value. Must be stricly positive.
//!
//! The pdf and cdf are `0` for every `x < b`.
//!

use crate::{
    domain::{ContinuousDomain, POSITIVE_PARAMETER, PROBABILITY},
    errors::DistributionError,
};

fn check_parameters(a: f64, b: f64) -> Result<(), DistributionError> {
    POSITIVE_PARAMETER.check("a", a)?;
    POSITIVE_PARAMETER.check("b", b)?;
    return Ok(());
}

/// The pdf of the Pareto distribution with shape `a` and scale `b`.
///
/// `pdf(x | a, b) = a * b^a / x^(a + 1)` for `b <= x` and `0` otherwise.
pub fn pareto_pdf(a: f64, b: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(a, b)?;
    ContinuousDomain::Reals.check("x", x)?;

    if x < b {
        return Ok(0.0);
    }

    // a * b^a / x^(a + 1) = (a / x) * (b / x)^a
    // In log space so a huge `a / x` can't meet an underflowed `(b / x)^a`.
    // `b / x` is in [0, 1], then the last term is never positive.
    let ln_pdf: f64 = a.ln() - x.ln() + a * (b / x).ln();

    return Ok(ln_pdf.exp());
}

/// The cdf of the Pareto distribution with shape `a` and scale `b`.
///
/// `cdf(x | a, b) = 1 - (b / x)^a` for `b <= x` and `0` otherwise.
pub fn pareto_cdf(a: f64, b: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(a, b)?;
    ContinuousDomain::Reals.check("x", x)?;

    if x < b {
        return Ok(0.0);
    }

    return Ok(1.0 - (b / x).powf(a));
}

/// The quantile function of the Pareto distribution: `b * (1 - p)^(-1/a)`.
///
/// `p` must be in `[0, 1]`. The quantile of `1.0` is `+inf`.
pub fn pareto_quantile(a: f64, b: f64, p: f64) -> Result<f64, DistributionError> {
    check_parameters(a, b)?;
    PROBABILITY.check("p", p)?;

    return Ok(b * (1.0 - p).powf(-1.0 / a));
}
