//! Error types for the employee pay service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service can report, from configuration loading
//! through to a single pay calculation.

use thiserror::Error;

/// The main error type for the employee pay service.
///
/// Calculation failures (`EmployeeNotFound`, `EmployeeTypeNotFound`,
/// `InvalidInput`) terminate only the request that raised them.
///
/// # Example
///
/// ```
/// use employee_pay::error::EngineError;
///
/// let error = EngineError::EmployeeTypeNotFound { type_id: 999 };
/// assert_eq!(error.to_string(), "Employee Type not found");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No active employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: i32,
    },

    /// The employee's type tag has no registered compensation rule.
    #[error("Employee Type not found")]
    EmployeeTypeNotFound {
        /// The unresolved type tag.
        type_id: i32,
    },

    /// A calculation input was missing or out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field, as named on the wire.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A rule was registered twice for the same type tag.
    #[error("Employee type {type_id} is already registered")]
    DuplicateEmployeeType {
        /// The type tag registered twice.
        type_id: i32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the service cannot run with.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the problem.
        message: String,
    },

    /// The employee store failed to serve a request.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
