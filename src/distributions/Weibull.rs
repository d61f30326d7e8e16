//! # Weibull distribution
//!
//! The [Weibull distribution](https://en.wikipedia.org/wiki/Weibull_distribution)
//! is a continuous distribution used to model failure times. It has 2 parameters:
//!  - `k`: the shape. Must be stricly positive.
//!  - `lambda`: the scale. Must be stricly positive.
//!
//! It's support is `[0, inf)`, the pdf and cdf are `0` for every `x < 0`.
//!

use crate::{
    domain::{ContinuousDomain, POSITIVE_PARAMETER, PROBABILITY},
    errors::DistributionError,
};

fn check_parameters(k: f64, lambda: f64) -> Result<(), DistributionError> {
    POSITIVE_PARAMETER.check("k", k)?;
    POSITIVE_PARAMETER.check("lambda", lambda)?;
    return Ok(());
}

/// The pdf of the Weibull distribution with shape `k` and scale `lambda`.
///
/// `pdf(x | k, lambda) = (k/lambda) * (x/lambda)^(k-1) * exp(-(x/lambda)^k)`
/// for `0 <= x` and `0` otherwise.
///
/// If `k < 1` the pdf at `x = 0` is `+inf`.
pub fn weibull_pdf(k: f64, lambda: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(k, lambda)?;
    ContinuousDomain::Reals.check("x", x)?;

    if x < 0.0 {
        return Ok(0.0);
    }

    let scaled_x: f64 = x / lambda;

    if scaled_x == 0.0 {
        // (x/lambda)^(k-1) at 0
        if k < 1.0 {
            return Ok(f64::INFINITY);
        }
        if 1.0 < k {
            return Ok(0.0);
        }
        return Ok(1.0 / lambda);
    }

    let powered: f64 = scaled_x.powf(k);
    if powered.is_infinite() {
        // the exponential decays faster than any power
        return Ok(0.0);
    }

    // in log space, so (x/lambda)^(k-1) and k/lambda can't overflow
    // while the exponential underflows
    let ln_pdf: f64 = k.ln() - lambda.ln() + (k - 1.0) * scaled_x.ln() - powered;

    return Ok(ln_pdf.exp());
}

/// The cdf of the Weibull distribution with shape `k` and scale `lambda`.
///
/// `cdf(x | k, lambda) = 1 - exp(-(x/lambda)^k)` for `0 <= x` and `0` otherwise.
pub fn weibull_cdf(k: f64, lambda: f64, x: f64) -> Result<f64, DistributionError> {
    check_parameters(k, lambda)?;
    ContinuousDomain::Reals.check("x", x)?;

    if x < 0.0 {
        return Ok(0.0);
    }

    let powered: f64 = (x / lambda).powf(k);

    // 1 - exp(-t) = -(exp(-t) - 1), precise for small t
    return Ok(-(-powered).exp_m1());
}

/// The quantile function of the Weibull distribution: `lambda * (-ln(1 - p))^(1/k)`.
///
/// `p` must be in `[0, 1]`. The quantile of `1.0` is `+inf`.
pub fn weibull_quantile(k: f64, lambda: f64, p: f64) -> Result<f64, DistributionError> {
    check_parameters(k, lambda)?;
    PROBABILITY.check("p", p)?;

    // -ln(1 - p) = -ln_1p(-p)
    let neg_log: f64 = -(-p).ln_1p();

    return Ok(lambda * neg_log.powf(1.0 / k));
}
