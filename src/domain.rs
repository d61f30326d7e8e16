//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it to validate the parameters of the distributions
//! and the points where the pdf or cdf are evaluated. Every function of
//! [crate::distributions] checks it's arguments against a [ContinuousDomain]
//! with [ContinuousDomain::check] before doing any computation.
//!

use std::fmt;

use crate::errors::DistributionError;

/// Domain of the scale and shape parameters: `(0, f64::MAX]`.
pub const POSITIVE_PARAMETER: ContinuousDomain = ContinuousDomain::PositiveFinite;

/// Domain of the bounds of an interval: any finite real.
pub const FINITE: ContinuousDomain = ContinuousDomain::Range(f64::MIN, f64::MAX);

/// Domain of the location parameters: any finite real.
pub const LOCATION_PARAMETER: ContinuousDomain = FINITE;

/// Domain of a probability given to a quantile function: `[0, 1]`.
pub const PROBABILITY: ContinuousDomain = ContinuousDomain::Range(0.0, 1.0);

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
///
/// A NaN is never contained in any domain.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// Only the positive numbers. The bool determines if 0 is included or not.
    Positive(bool),
    /// Only the finite positive numbers: `(0, f64::MAX]`. Neither `0` nor `+inf`
    /// are included.
    PositiveFinite,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum (**both** inclusive).
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards. The value **is** included.
    From(f64),
    /// All the numbers until the given value. The value **is** included.
    To(f64),
    /// All the numbers strictly greater than the given value. The value is **not** included.
    Above(f64),
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }

        match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Positive(true) => 0.0 <= x,
            ContinuousDomain::Positive(false) => 0.0 < x,
            ContinuousDomain::PositiveFinite => 0.0 < x && x.is_finite(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
            ContinuousDomain::Above(min) => *min < x,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. For [ContinuousDomain::Positive],
    /// [ContinuousDomain::PositiveFinite] and [ContinuousDomain::Above] the lower bound is returned regardless of it
    /// being included or not.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Positive(_) => (0.0, f64::INFINITY),
            ContinuousDomain::PositiveFinite => (0.0, f64::MAX),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
            ContinuousDomain::Above(min) => (*min, f64::INFINITY),
        }
    }

    /// Validates the argument `name` with value `x`.
    ///
    /// Returns `x` if it is contained in the domain, otherwise a
    /// [DistributionError::DomainErr] describing the argument.
    pub fn check(&self, name: &'static str, x: f64) -> Result<f64, DistributionError> {
        if self.contains(x) {
            return Ok(x);
        }

        return Err(DistributionError::DomainErr {
            name,
            value: x,
            domain: self.clone(),
        });
    }
}

impl fmt::Display for ContinuousDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContinuousDomain::Reals => write!(f, "(-inf, inf)"),
            ContinuousDomain::Positive(true) => write!(f, "[0, inf)"),
            ContinuousDomain::Positive(false) => write!(f, "(0, inf)"),
            ContinuousDomain::PositiveFinite => write!(f, "(0, f64::MAX]"),
            ContinuousDomain::Range(min, max) => {
                write!(f, "[{}, {}]", Bound(*min), Bound(*max))
            }
            ContinuousDomain::From(min) => write!(f, "[{}, inf)", Bound(*min)),
            ContinuousDomain::To(max) => write!(f, "(-inf, {}]", Bound(*max)),
            ContinuousDomain::Above(min) => write!(f, "({}, inf)", Bound(*min)),
        }
    }
}

/// Displays a bound, naming the extremes of `f64` instead of printing their 309 digits.
struct Bound(f64);

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::MAX {
            return write!(f, "f64::MAX");
        }
        if self.0 == f64::MIN {
            return write!(f, "f64::MIN");
        }
        return write!(f, "{}", self.0);
    }
}
