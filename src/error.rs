//! Error types for the compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure modes of the calculation and rollup layers. The engine
//! never swallows a failure: malformed logs, missing contracts, and
//! impossible deduction configurations all surface as variants here rather
//! than as NaN, null amounts, or silently-zeroed totals.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the compensation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profile.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profile.yaml");
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

    /// A work log was malformed or incomplete for its type.
    #[error("Invalid work log '{log_id}': {message}")]
    InvalidWorkLog {
        /// The ID of the invalid work log.
        log_id: Uuid,
        /// A description of what made the log invalid.
        message: String,
    },

    /// No rate contract exists for the given user/company pair.
    ///
    /// On write paths this is fatal; read/preview paths may fall back to a
    /// log's previously stored amount and flag the result as unverified.
    #[error("No rate contract for user '{user_id}' in company '{company_id}'")]
    RateNotFound {
        /// The user the rate was requested for.
        user_id: Uuid,
        /// The company the rate was requested for.
        company_id: Uuid,
    },

    /// Combined deduction fractions exceed 1 and would produce negative pay.
    #[error("Combined deduction fraction {total} exceeds 1")]
    InvalidDeduction {
        /// The combined deduction fraction after clamping each component.
        total: Decimal,
    },

    /// A work log carries a flag for a feature the company has disabled.
    #[error("Work log '{log_id}' requires disabled feature '{feature}'")]
    FeatureDisabled {
        /// The ID of the offending work log.
        log_id: Uuid,
        /// The feature toggle that is disabled.
        feature: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
