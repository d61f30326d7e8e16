//! Euclid contains uscefull math functions.
//!
//! Here live the special functions that the distributions need but that are not
//! part of the standard library: the [gamma](https://en.wikipedia.org/wiki/Gamma_function)
//! and the [beta](https://en.wikipedia.org/wiki/Beta_function) functions.
//!
//! The functions in this module **assume** that their arguments are valid (see
//! the documentation of each one). The validation is done by the callers in
//! [crate::distributions].

use std::f64::consts::PI;

use crate::configuration::special::{LANCZOS_COEFFICIENTS, LANCZOS_G, STIRLING_THRESHOLD};

/// `ln(sqrt(2 * pi))`
pub const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_741_780_329_736_4;

/// Computes the natural logarithm of the absolute value of the
/// [gamma function](https://en.wikipedia.org/wiki/Gamma_function):
/// `ln(|Gamma(x)|)`.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// with the constants in [crate::configuration::special]. For `x < 0.5` the
/// [reflection formula](https://en.wikipedia.org/wiki/Reflection_formula) is used.
///
/// Returns `+inf` at the poles (`0, -1, -2, ...`).
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x <= 0.0 && x.fract() == 0.0 {
        // pole
        return f64::INFINITY;
    }

    if x < 0.5 {
        // Gamma(x) * Gamma(1 - x) = pi / sin(pi * x)
        let sin: f64 = (PI * x).sin().abs();
        return (PI / sin).ln() - ln_gamma(1.0 - x);
    }

    let z: f64 = x - 1.0;
    let mut series: f64 = LANCZOS_COEFFICIENTS[0];
    for (i, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        series += coefficient / (z + i as f64);
    }

    let t: f64 = z + LANCZOS_G + 0.5;

    return LN_SQRT_2PI + (z + 0.5) * t.ln() - t + series.ln();
}

/// The [gamma function](https://en.wikipedia.org/wiki/Gamma_function) for
/// positive arguments.
///
/// Assumes `0.0 < x`. For large `x` the result overflows to `+inf`.
#[must_use]
pub fn gamma(x: f64) -> f64 {
    return ln_gamma(x).exp();
}

/// The error of the [Stirling series](https://en.wikipedia.org/wiki/Stirling%27s_approximation)
/// for the logarithm of the gamma function:
///
/// `ln(Gamma(x)) = (x - 0.5) * ln(x) - x + ln(sqrt(2 * pi)) + stirling_correction(x)`
///
/// Computed with the first 4 terms of the asymptotic series
/// `1/(12x) - 1/(360x^3) + 1/(1260x^5) - 1/(1680x^7)`, wich is accurate to
/// `1e-12` for [STIRLING_THRESHOLD] `<= x`. Returns `0.0` for `x = +inf`.
#[must_use]
pub fn stirling_correction(x: f64) -> f64 {
    if x.is_infinite() {
        return 0.0;
    }

    let inv_x2: f64 = 1.0 / (x * x);
    let series: f64 =
        1.0 / 12.0 - inv_x2 * (1.0 / 360.0 - inv_x2 * (1.0 / 1260.0 - inv_x2 / 1680.0));
    return series / x;
}

/// Natural logarithm of the [beta function](https://en.wikipedia.org/wiki/Beta_function).
///
/// `ln(B(a, b)) = ln(Gamma(a)) + ln(Gamma(b)) - ln(Gamma(a + b))`
///
/// When the arguments are large (see [STIRLING_THRESHOLD]) the 3 gamma
/// functions are expanded with the Stirling series and the big terms are
/// cancelled analytically. Only the ratio `min(a, b) / max(a, b)` is used,
/// so `a + b` is never computed directly and no `inf - inf` can appear.
/// (For shapes close to `f64::MAX` the true value is below `-f64::MAX` and
/// `-inf` is returned.)
///
/// Assumes `0.0 < a` and `0.0 < b`.
#[must_use]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    let (p, q): (f64, f64) = if a <= b { (a, b) } else { (b, a) };

    if q < STIRLING_THRESHOLD {
        return ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b);
    }

    // r = p / q, then:
    // ln(p + q) = ln(q) + ln(1 + r)
    // ln(p / (p + q)) = ln(r) - ln(1 + r)
    // ln(q / (p + q)) = -ln(1 + r)
    let ratio: f64 = p / q;
    let ln_1p_ratio: f64 = ratio.ln_1p();

    if p < STIRLING_THRESHOLD {
        // only q and p + q are large
        let correction: f64 = stirling_correction(q) - stirling_correction(p + q);
        return ln_gamma(p) + correction + p
            - p * (q.ln() + ln_1p_ratio)
            - (q - 0.5) * ln_1p_ratio;
    }

    let correction: f64 =
        stirling_correction(p) + stirling_correction(q) - stirling_correction(p + q);
    return LN_SQRT_2PI - 0.5 * q.ln() + correction + (p - 0.5) * (ratio.ln() - ln_1p_ratio)
        - q * ln_1p_ratio;
}

/// The [beta function](https://en.wikipedia.org/wiki/Beta_function) `B(a, b)`.
///
/// Computed trough [ln_beta] and then exponentiated, since the raw quotient of
/// gamma functions overflows very quickly.
///
/// Assumes `0.0 < a` and `0.0 < b`.
#[must_use]
pub fn beta(a: f64, b: f64) -> f64 {
    return ln_beta(a, b).exp();
}
