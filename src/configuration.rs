//! This file contains the deafult values and other value choices used trough the library.
//!

/// Constants for the special functions in [crate::euclid].
///
/// The gamma function (and everything built on top of it, like the beta function)
/// is computed with the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation).
/// The approximation depends on a free parameter `g` and a list of coefficients
/// that are precomputed for that `g`. The values here are the usual choice
/// `g = 7` with `9` coefficients, wich gives around 15 correct digits for
/// positive arguments.
///
/// If you change [LANCZOS_G](special::LANCZOS_G) you **must** also change
/// [LANCZOS_COEFFICIENTS](special::LANCZOS_COEFFICIENTS), since they are
/// computed for a specific `g`.
pub mod special {

    /// The `g` parameter of the Lanczos approximation.
    pub static LANCZOS_G: f64 = 7.0;

    /// The coefficients of the Lanczos approximation for `g = 7`.
    pub static LANCZOS_COEFFICIENTS: [f64; 9] = [
        0.999_999_999_999_809_93,
        676.520_368_121_885_1,
        -1_259.139_216_722_402_8,
        771.323_428_777_653_13,
        -176.615_029_162_140_59,
        12.507_343_278_686_905,
        -0.138_571_095_265_720_12,
        9.984_369_578_019_571_6e-6,
        1.505_632_735_149_311_6e-7,
    ];

    /// From this value onwards the logarithm of the gamma function is split
    /// into the [Stirling series](https://en.wikipedia.org/wiki/Stirling%27s_approximation)
    /// and a small correction term ([crate::euclid::stirling_correction]).
    ///
    /// This is what allows [crate::euclid::ln_beta] and the Beta pdf to
    /// work with very large shapes without cancelling huge logarithms.
    pub static STIRLING_THRESHOLD: f64 = 10.0;
}
