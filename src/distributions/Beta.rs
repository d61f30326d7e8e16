//! # Beta distribution
//!
//! The [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution)
//! is a continuous probability distribution. It's domain is just `[0.0, 1.0]`
//! (wich can be uscefull to model probabilities). It has 2 parameters:
//! alpha and beta. Both must be stricly positive.
//!
//! Only the pdf is provided. The cdf (the regularized incomplete beta
//! function) has no closed form.
//!

use crate::{
    configuration::special::STIRLING_THRESHOLD,
    domain::{ContinuousDomain, POSITIVE_PARAMETER},
    errors::DistributionError,
    euclid::{self, LN_SQRT_2PI},
};

pub const BETA_DOMAIN: ContinuousDomain = ContinuousDomain::Range(0.0, 1.0);

/// The pdf of the Beta distribution with shapes `alpha` and `beta`.
///
/// `pdf(x | alpha, beta) = x^(alpha-1) * (1 - x)^(beta-1) / B(alpha, beta)`
///
/// where `B` is the [beta function](euclid::beta).
///
/// At the borders of the domain the pdf can be `+inf` (`x = 0` with `alpha < 1`
/// or `x = 1` with `beta < 1`).
///
/// Returns a [DistributionError::DomainErr] if `alpha` or `beta` are not
/// stricly positive and finite or if `x` is outside `[0, 1]`.
pub fn beta_pdf(alpha: f64, beta: f64, x: f64) -> Result<f64, DistributionError> {
    POSITIVE_PARAMETER.check("alpha", alpha)?;
    POSITIVE_PARAMETER.check("beta", beta)?;
    BETA_DOMAIN.check("x", x)?;

    if x == 0.0 {
        return Ok(border_density(alpha, beta, alpha));
    }

    if x == 1.0 {
        return Ok(border_density(alpha, beta, beta));
    }

    if STIRLING_THRESHOLD <= alpha && STIRLING_THRESHOLD <= beta {
        return Ok(ln_pdf_large_shapes(alpha, beta, x).exp());
    }

    /*
        ln(pdf(x | a, b)) = (a - 1) * ln(x) + (b - 1) * ln(1 - x) - ln(B(a, b))

        Working in log space avoids `0 / 0` when both the powers and
        B(a, b) underflow.
    */
    let ln_pdf: f64 =
        (alpha - 1.0) * x.ln() + (beta - 1.0) * (-x).ln_1p() - euclid::ln_beta(alpha, beta);

    return Ok(ln_pdf.exp());
}

/// The pdf at `x = 0` (`shape = alpha`) or `x = 1` (`shape = beta`).
fn border_density(alpha: f64, beta: f64, shape: f64) -> f64 {
    if shape < 1.0 {
        return f64::INFINITY;
    }

    if 1.0 < shape {
        return 0.0;
    }

    // shape == 1: the power is 1 and only 1/B(alpha, beta) is left
    return (-euclid::ln_beta(alpha, beta)).exp();
}

/// `ln(pdf(x | a, b))` for `STIRLING_THRESHOLD <= a, b` and `0 < x < 1`.
fn ln_pdf_large_shapes(alpha: f64, beta: f64, x: f64) -> f64 {
    /*
        Let n = a + b, m_a = a/n and m_b = b/n. Expanding the 3 gamma functions
        of B(a, b) with the Stirling series, the terms of size `a * ln(a)` cancel
        out and we are left with:

        ln(pdf) = (a-1) * ln(x / m_a) + (b-1) * ln((1-x) / m_b)
                    - 0.5 * ln(m_a * m_b) + 0.5 * ln(n) - ln(sqrt(2 pi)) - corr

        The first 2 terms never have opposite infinite signs: (a-1) * ln(x / m_a)
        is positive only if m_a < x, and then (1-x) < m_b.

        n is never computed, only the ratio between the small and big shape.
    */
    let (ln_m_alpha, ln_m_beta, ln_n): (f64, f64, f64) = if beta <= alpha {
        let ratio: f64 = beta / alpha;
        let ln_1p_ratio: f64 = ratio.ln_1p();
        (-ln_1p_ratio, ratio.ln() - ln_1p_ratio, alpha.ln() + ln_1p_ratio)
    } else {
        let ratio: f64 = alpha / beta;
        let ln_1p_ratio: f64 = ratio.ln_1p();
        (ratio.ln() - ln_1p_ratio, -ln_1p_ratio, beta.ln() + ln_1p_ratio)
    };

    let correction: f64 = euclid::stirling_correction(alpha) + euclid::stirling_correction(beta)
        - euclid::stirling_correction(alpha + beta);

    return (alpha - 1.0) * (x.ln() - ln_m_alpha) + (beta - 1.0) * ((-x).ln_1p() - ln_m_beta)
        - 0.5 * (ln_m_alpha + ln_m_beta)
        + 0.5 * ln_n
        - LN_SQRT_2PI
        - correction;
}
