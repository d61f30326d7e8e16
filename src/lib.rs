#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `ContinuousDistributions` should have a snake case name convert the identifier to snake case: `continuous_distributions`"
// The rest of the names will follow the snake_case convention.

//! # Continuous Distributions
//!
//! A catalog of closed form probability functions for continuous random
//! variables. Given the parameters of a distribution and a point, it returns
//! the pdf or the cdf at that point.
//!
//! There are no structures to create: every query is a pure function
//! in [distributions] that validates it's arguments and returns a
//! `Result<f64, DistributionError>`.
//!
//! ## Distributions
//!
//!  - [x] [Uniform distribution](distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!     (interval probability, pdf, cdf, quantile)
//!  - [x] [Pareto distribution](distributions::Pareto) ([Wiki](https://en.wikipedia.org/wiki/Pareto_distribution))
//!  - [x] [Weibull distribution](distributions::Weibull) ([Wiki](https://en.wikipedia.org/wiki/Weibull_distribution))
//!  - [x] [Laplace distribution](distributions::Laplace) ([Wiki](https://en.wikipedia.org/wiki/Laplace_distribution))
//!  - [x] [Logistic distribution](distributions::Logistic) ([Wiki](https://en.wikipedia.org/wiki/Logistic_distribution))
//!  - [x] [Log-logistic distribution](distributions::LogLogistic) ([Wiki](https://en.wikipedia.org/wiki/Log-logistic_distribution))
//!  - [x] [Beta distribution](distributions::Beta) ([Wiki](https://en.wikipedia.org/wiki/Beta_distribution))
//!     (pdf only)
//!
//! ## Errors
//!
//! Every invalid argument (a non positive scale, a point outside the domain,
//! a NaN...) is reported with [DistributionError::DomainErr]. Note that
//! the Pareto, Weibull and Uniform pdf and cdf are defined for all real `x`
//! and just return `0.0` (or `1.0`) outside of their support.
//!
//! ## Special functions
//!
//! The [beta function](euclid::beta) (needed by the Beta pdf) and the
//! [gamma function](euclid::gamma) are in [euclid].
//!
//! ***
//!

pub mod configuration;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;

pub use errors::DistributionError;
