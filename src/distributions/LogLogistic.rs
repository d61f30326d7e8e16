//! # Log-logistic distribution
//!
//! The [Log-logistic distribution](https://en.wikipedia.org/wiki/Log-logistic_distribution)
//! (also called Fisk distribution) is the distribution of a random variable
//! whose logarithm follows a [Logistic](crate::distributions::Logistic) distribution.
//! It has 2 parameters:
//!  - `alpha`: the scale (and also the median). Must be stricly positive.
//!  - `beta`: the shape. Must be stricly positive.
//!
//! It is only defined for `0 < x`.
//!

use crate::{
    domain::{ContinuousDomain, POSITIVE_PARAMETER, PROBABILITY},
    errors::DistributionError,
};

pub const LOG_LOGISTIC_DOMAIN: ContinuousDomain = ContinuousDomain::Positive(false);

fn check_arguments(alpha: f64, beta: f64, x: f64) -> Result<(), DistributionError> {
    POSITIVE_PARAMETER.check("alpha", alpha)?;
    POSITIVE_PARAMETER.check("beta", beta)?;
    LOG_LOGISTIC_DOMAIN.check("x", x)?;
    return Ok(());
}

/// The pdf of the Log-logistic distribution with scale `alpha` and shape `beta`.
///
/// `pdf(x | alpha, beta) = (beta/alpha) * (x/alpha)^(beta-1) / (1 + (x/alpha)^beta)^2`
///
/// Returns a [DistributionError::DomainErr] if `x <= 0`. The pdf at `x = +inf` is `0`.
pub fn log_logistic_pdf(alpha: f64, beta: f64, x: f64) -> Result<f64, DistributionError> {
    check_arguments(alpha, beta, x)?;

    /*
        Let t = (x/alpha)^beta, then:
        pdf = (beta/x) * t / (1 + t)^2 = (beta/x) / (1/t + 2 + t)

        The second factor only depends on |ln(t)|, so in log space:
        ln(pdf) = ln(beta) - ln(x) - |ln(t)| - 2 * ln(1 + exp(-|ln(t)|))

        None of the terms can overflow for finite `x` and for `x = +inf`
        all of them go to `-inf` together.
    */
    let abs_ln_t: f64 = (beta * (x.ln() - alpha.ln())).abs();
    let ln_pdf: f64 = beta.ln() - x.ln() - abs_ln_t - 2.0 * (-abs_ln_t).exp().ln_1p();

    return Ok(ln_pdf.exp());
}

/// The cdf of the Log-logistic distribution with scale `alpha` and shape `beta`.
///
/// `cdf(x | alpha, beta) = 1 / (1 + (x/alpha)^(-beta))`
///
/// Returns a [DistributionError::DomainErr] if `x <= 0`.
pub fn log_logistic_cdf(alpha: f64, beta: f64, x: f64) -> Result<f64, DistributionError> {
    check_arguments(alpha, beta, x)?;

    return Ok(1.0 / (1.0 + (x / alpha).powf(-beta)));
}

/// The quantile function of the Log-logistic distribution:
/// `alpha * (p / (1 - p))^(1/beta)`.
///
/// `p` must be in `[0, 1]`. The quantile of `1.0` is `+inf`.
pub fn log_logistic_quantile(alpha: f64, beta: f64, p: f64) -> Result<f64, DistributionError> {
    POSITIVE_PARAMETER.check("alpha", alpha)?;
    POSITIVE_PARAMETER.check("beta", beta)?;
    PROBABILITY.check("p", p)?;

    return Ok(alpha * (p / (1.0 - p)).powf(1.0 / beta));
}
