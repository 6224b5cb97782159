//! Error types for monetary amounts.

use thiserror::Error;

/// Reasons an amount cannot be spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// NaN or an infinity.
    #[error("amount is not a finite number")]
    NotFinite,

    /// Magnitude above one quadrillion.
    #[error("amount {value} exceeds the supported maximum of 1000000000000000")]
    OutOfRange { value: String },

    /// The decimal representation could not be split into reais and centavos.
    #[error("cannot read amount from {repr:?}")]
    Malformed { repr: String },
}

/// Result type for currency operations.
pub type CurrencyResult<T> = Result<T, CurrencyError>;
