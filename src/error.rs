//! Error types for the Vacation Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that abort a whole run. Row-level problems (invalid
//! records, unparseable contracts) are not errors: they surface as
//! [`AuditWarning`](crate::models::AuditWarning)s and a `null` day count.

use thiserror::Error;

/// The main error type for the Vacation Entitlement Engine.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::InvalidYear {
///     value: "a2017".to_string(),
/// };
/// assert_eq!(error.to_string(), "Year is not valid: a2017");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The target year argument was not an integer.
    #[error("Year is not valid: {value}")]
    InvalidYear {
        /// The raw value that was supplied.
        value: String,
    },

    /// The input roster could not be read from disk.
    #[error("Failed to read input file '{path}': {message}")]
    InputRead {
        /// The input path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The input roster was not well-formed CSV.
    #[error("Failed to parse CSV in '{path}': {message}")]
    CsvRead {
        /// The input path.
        path: String,
        /// A description of the CSV failure.
        message: String,
    },

    /// The output file could not be encoded or written.
    #[error("Failed to write output file '{path}': {message}")]
    OutputWrite {
        /// The output path.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
