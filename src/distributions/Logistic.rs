//! # Logistic distribution
//!
//! The [Logistic distribution](https://en.wikipedia.org/wiki/Logistic_distribution)
//! is a continuous distribution whose cdf is the
//! [logistic function](https://en.wikipedia.org/wiki/Logistic_function).
//! It has 2 parameters:
//!  - `mu`: the location. Any real number.
//!  - `s`: the scale. Must be stricly positive.
//!

use crate::{
    domain::{ContinuousDomain, LOCATION_PARAMETER, POSITIVE_PARAMETER, PROBABILITY},
    errors::DistributionError,
};

fn check_parameters(mu: f64, s: f64) -> Result<(), DistributionError> {
    LOCATION_PARAMETER.check("mu", mu)?;
    POSITIVE_PARAMETER.check("s", s)?;
    return Ok(());
}

/// The pdf of the Logistic distribution with location `mu` and scale `s`.
///
/// `pdf(x | mu, s) = e / (s * (1 + e)^2)` where `e = exp(-(x - mu) / s)`
pub fn logistic_pdf(mu: f64, s: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(mu, s)?;
    ContinuousDomain::Reals.check("x", x)?;

    // The pdf is symmetric around mu, so `e` is computed with `|x - mu|`.
    // Same value, but it can't overflow to `inf / inf`.
    let exp_term: f64 = (-(x - mu).abs() / s).exp();
    let denominator: f64 = 1.0 + exp_term;

    return Ok(exp_term / (s * denominator * denominator));
}

/// The cdf of the Logistic distribution with location `mu` and scale `s`.
///
/// `cdf(x | mu, s) = 1 / (1 + e)` where `e = exp(-(x - mu) / s)`
pub fn logistic_cdf(mu: f64, s: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(mu, s)?;
    ContinuousDomain::Reals.check("x", x)?;

    let exp_term: f64 = (-(x - mu) / s).exp();

    return Ok(1.0 / (1.0 + exp_term));
}

/// The quantile function of the Logistic distribution: `mu + s * ln(p / (1 - p))`.
///
/// `p` must be in `[0, 1]`. The quantiles of `0.0` and `1.0` are `-inf` and `+inf`.
pub fn logistic_quantile(mu: f64, s: f64, p: f64) -> Result<f64, DistributionError> {
    check_parameters(mu, s)?;
    PROBABILITY.check("p", p)?;

    return Ok(mu + s * (p / (1.0 - p)).ln());
}
