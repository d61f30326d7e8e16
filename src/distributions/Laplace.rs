//! # Laplace distribution
//!
//! The [Laplace distribution](https://en.wikipedia.org/wiki/Laplace_distribution)
//! (also called double exponential) is a continuous distribution formed by
//! 2 exponential distributions glued back to back. It has 2 parameters:
//!  - `mu`: the location. Any real number.
//!  - `b`: the scale. Must be stricly positive.
//!

use crate::{
    domain::{ContinuousDomain, LOCATION_PARAMETER, POSITIVE_PARAMETER, PROBABILITY},
    errors::DistributionError,
};

fn check_parameters(mu: f64, b: f64) -> Result<(), DistributionError> {
    LOCATION_PARAMETER.check("mu", mu)?;
    POSITIVE_PARAMETER.check("b", b)?;
    return Ok(());
}

/// The pdf of the Laplace distribution with location `mu` and scale `b`.
///
/// `pdf(x | mu, b) = 1/(2*b) * exp(-|x - mu| / b)`
pub fn laplace_pdf(mu: f64, b: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(mu, b)?;
    ContinuousDomain::Reals.check("x", x)?;

    return Ok((-(x - mu).abs() / b).exp() / (2.0 * b));
}

/// The cdf of the Laplace distribution with location `mu` and scale `b`.
///
///  - `x < mu`: `cdf(x | mu, b) = 0.5 * exp((x - mu) / b)`
///  - `mu <= x`: `cdf(x | mu, b) = 1 - 0.5 * exp(-(x - mu) / b)`
pub fn laplace_cdf(mu: f64, b: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(mu, b)?;
    ContinuousDomain::Reals.check("x", x)?;

    // the exponent is never positive in either branch
    let standarized: f64 = (x - mu) / b;
    if x < mu {
        return Ok(0.5 * standarized.exp());
    }

    return Ok(1.0 - 0.5 * (-standarized).exp());
}

/// The quantile function of the Laplace distribution.
///
///  - `p < 0.5`: `mu + b * ln(2p)`
///  - `0.5 <= p`: `mu - b * ln(2 - 2p)`
///
/// `p` must be in `[0, 1]`. The quantiles of `0.0` and `1.0` are `-inf` and `+inf`.
pub fn laplace_quantile(mu: f64, b: f64, p: f64) -> Result<f64, DistributionError> {
    check_parameters(mu, b)?;
    PROBABILITY.check("p", p)?;

    if p < 0.5 {
        return Ok(mu + b * (2.0 * p).ln());
    }

    return Ok(mu - b * (2.0 - 2.0 * p).ln());
}
