//! The catalog of continuous distributions.
//!
//! Every distribution lives in it's own module, but all the functions are
//! re-exported here so they can be used as a flat catalog:
//!
//! ```
//! use ContinuousDistributions::distributions::*;
//!
//! assert_eq!(logistic_cdf(0.0, 1.0, 0.0).unwrap(), 0.5);
//! assert!(laplace_pdf(0.0, -1.0, 0.0).is_err());
//! ```
//!
//! All the functions are pure and return `Result<f64, DistributionError>`.
//! The error is always a [DomainErr](crate::errors::DistributionError::DomainErr)
//! indicating wich argument was invalid.

pub mod Beta;
pub mod Laplace;
pub mod LogLogistic;
pub mod Logistic;
pub mod Pareto;
pub mod Uniform;
pub mod Weibull;

pub use Beta::beta_pdf;
pub use Laplace::{laplace_cdf, laplace_pdf, laplace_quantile};
pub use LogLogistic::{log_logistic_cdf, log_logistic_pdf, log_logistic_quantile};
pub use Logistic::{logistic_cdf, logistic_pdf, logistic_quantile};
pub use Pareto::{pareto_cdf, pareto_pdf, pareto_quantile};
pub use Uniform::{
    uniform_cdf, uniform_interval, uniform_interval_builder, uniform_pdf, uniform_quantile,
};
pub use Weibull::{weibull_cdf, weibull_pdf, weibull_quantile};
