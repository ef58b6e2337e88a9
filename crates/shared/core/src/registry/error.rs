use thiserror::Error;

use crate::values::Measure;

/// Errors raised by canonical value construction and parsing
///
/// Plain lookups (`by_measure`, `by_token`) report misses as `None`; these
/// variants surface where a `Result` is required (validated construction,
/// `FromStr`, deserialization).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No {domain} value matches '{token}'")]
    NotFound { domain: &'static str, token: String },

    #[error("{domain} measure {measure} is outside [{min}, {max}]")]
    OutOfBounds {
        domain: &'static str,
        measure: Measure,
        min: Measure,
        max: Measure,
    },

    #[error("Invalid currency pair: {0}")]
    InvalidCurrencyPair(String),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
