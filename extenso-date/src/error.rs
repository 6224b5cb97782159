//! Error types for date verbalization.

use thiserror::Error;

/// Reasons a date cannot be spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Input is not in the exact `dd/mm/yyyy` form.
    #[error("expected a dd/mm/yyyy date, got {input:?}")]
    Malformed { input: String },

    /// Fields are well-formed but name no real calendar day.
    #[error("{day:02}/{month:02}/{year:04} is not a calendar date")]
    Invalid { day: u32, month: u32, year: i32 },
}

/// Result type for date operations.
pub type DateResult<T> = Result<T, DateError>;
