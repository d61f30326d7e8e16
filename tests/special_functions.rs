use ContinuousDistributions::euclid::*;
use assert_approx_eq::assert_approx_eq;

#[test]
fn ln_gamma_test() {
    struct Round {
        x: f64,
        ln_gamma: f64,
    }

    // values given by python's math.lgamma
    let rounds = [
        Round { x: 1.0, ln_gamma: 0.0 },
        Round { x: 2.0, ln_gamma: 0.0 },
        Round { x: 10.0, ln_gamma: 12.801827480081467 },
        Round { x: 100.0, ln_gamma: 359.1342053695754 },
        Round { x: 0.1, ln_gamma: 2.2527126517342055 },
        Round { x: -0.5, ln_gamma: 1.265512123484645 },
    ];

    for r in rounds {
        assert_approx_eq!(ln_gamma(r.x), r.ln_gamma, 1.0e-10);
    }
}

#[test]
fn ln_gamma_poles() {
    assert_eq!(ln_gamma(0.0), f64::INFINITY);
    assert_eq!(ln_gamma(-3.0), f64::INFINITY);
}

#[test]
fn gamma_test() {
    // Gamma(n) = (n-1)!
    assert_approx_eq!(gamma(5.0), 24.0, 1.0e-10);
    assert_approx_eq!(gamma(7.0), 720.0, 1.0e-8);
    assert_approx_eq!(gamma(0.5), std::f64::consts::PI.sqrt(), 1.0e-12);
}

#[test]
fn beta_test() {
    assert_approx_eq!(beta(1.0, 1.0), 1.0, 1.0e-12);
    assert_approx_eq!(beta(2.0, 2.0), 1.0 / 6.0, 1.0e-12);
    assert_approx_eq!(beta(2.0, 3.0), 1.0 / 12.0, 1.0e-12);
    assert_approx_eq!(beta(0.5, 0.5), std::f64::consts::PI, 1.0e-10);
    assert_approx_eq!(beta(3.5, 1.5), 0.12271846303085128, 1.0e-12);
}

#[test]
fn beta_is_symmetric() {
    for (a, b) in [(0.3, 4.0), (2.5, 7.5), (10.0, 0.1)] {
        assert_approx_eq!(beta(a, b), beta(b, a), 1.0e-12);
    }
}

#[test]
fn ln_beta_does_not_overflow() {
    // B(500, 500) underflows, but it's logarithm is perfectly representable
    let ln_b: f64 = ln_beta(500.0, 500.0);
    assert!(ln_b.is_finite());
    assert_approx_eq!(ln_b, -694.9887224857134, 1.0e-9);
}

#[test]
fn ln_beta_large_arguments() {
    struct Round {
        a: f64,
        b: f64,
        ln_beta: f64,
    }

    // values given by mpmath with 40 digits
    let rounds = [
        Round { a: 10.0, b: 10.0, ln_beta: -13.736229227036555 },
        Round { a: 3.0, b: 40.0, ln_beta: -10.446973958541667 },
        Round { a: 0.5, b: 12.0, ln_beta: -0.6596747231378598 },
        Round { a: 1000.0, b: 3.0, ln_beta: -20.033116159382222 },
        Round { a: 1.0e6, b: 2.5, ln_beta: -34.254095399436516 },
        Round { a: 1.0e5, b: 1.0e5, ln_beta: -138633.92706134806 },
    ];

    for r in rounds {
        let tolerance: f64 = 1.0e-12 * r.ln_beta.abs().max(1.0);
        assert_approx_eq!(ln_beta(r.a, r.b), r.ln_beta, tolerance);
        assert_approx_eq!(ln_beta(r.b, r.a), r.ln_beta, tolerance);
    }
}

#[test]
fn ln_beta_huge_arguments() {
    // the true values are far below -f64::MAX
    assert_eq!(ln_beta(f64::MAX, f64::MAX), f64::NEG_INFINITY);

    let ln_b: f64 = ln_beta(f64::MAX, 2.0);
    assert!(ln_b.is_finite());
    // B(x, 2) = 1 / (x * (x + 1))
    assert_approx_eq!(ln_b, -2.0 * f64::MAX.ln(), 1.0e-9);

    assert!(!ln_beta(1.0e300, 0.5).is_nan());
    assert!(!ln_beta(1.0e300, 1.0e-300).is_nan());
}

#[test]
fn stirling_correction_test() {
    // ln(Gamma(x)) - (x - 0.5) * ln(x) + x - ln(sqrt(2 * pi)), given by mpmath
    assert_approx_eq!(stirling_correction(10.0), 0.008330563433362871, 1.0e-12);
    assert_approx_eq!(stirling_correction(50.0), 0.0016666444469833655, 1.0e-14);
    assert_eq!(stirling_correction(f64::INFINITY), 0.0);

    // agrees with the Lanczos approximation at the threshold
    let x: f64 = 10.0;
    let lanczos: f64 = ln_gamma(x) - (x - 0.5) * x.ln() + x - LN_SQRT_2PI;
    assert_approx_eq!(stirling_correction(x), lanczos, 1.0e-11);
}
