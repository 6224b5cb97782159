//! Error types for the fixture harness.
//!
//! This module defines error types for fixture parsing, fixture loading,
//! and unreadable case inputs.

use thiserror::Error;

use crate::CaseKind;

/// Errors that can occur while running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture file.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },

    /// A case input that cannot be read as its kind requires.
    #[error("{kind:?} case input {input:?} is unreadable: {message}")]
    Input {
        kind: CaseKind,
        input: String,
        message: String,
    },
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
