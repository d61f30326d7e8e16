use thiserror::Error;

use crate::domain::ContinuousDomain;

/// The error returned by every function of the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A parameter or an evaluation point was outside it's domain.
    /// NaNs are outside of every domain.
    ///
    ///  - `name`: the name of the argument (`"x"`, `"alpha"`, ...)
    ///  - `value`: the value that was given
    ///  - `domain`: the domain the value had to belong to
    #[error("The argument `{name}` = {value} is outside it's domain {domain}. ")]
    DomainErr {
        name: &'static str,
        value: f64,
        domain: ContinuousDomain,
    },
}
