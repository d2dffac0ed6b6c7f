//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur at the engine's boundaries.
//! The salary calculation itself is total and never fails; errors arise
//! only from configuration loading and request validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A daily wage was negative.
    ///
    /// Raised when a negative wage is configured as the default, or when a
    /// request supplies a negative wage. The calculation itself never
    /// validates its inputs; this check belongs to the boundary layers.
    #[error("Daily wage must not be negative: {wage}")]
    NegativeWage {
        /// The offending wage value.
        wage: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
