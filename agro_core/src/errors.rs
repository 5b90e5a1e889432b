//! # Error Types
//!
//! Structured error types for agro_core. Every calculator surfaces failures
//! through [`CalcError`] so callers can present a user-readable message or
//! handle specific cases programmatically. No calculator error is fatal to
//! the process.
//!
//! ## Example
//!
//! ```rust
//! use agro_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius_m: f64) -> CalcResult<()> {
//!     if radius_m < 0.1 {
//!         return Err(CalcError::InvalidInput {
//!             field: "radius_m".to_string(),
//!             value: radius_m.to_string(),
//!             reason: "Radius must be at least 0.1 m".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for agro_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by calling code.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (unparsable, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A polygon has fewer vertices than required
    #[error("Insufficient points: got {found}, need at least {required}")]
    InsufficientPoints { found: usize, required: usize },

    /// A divisor is zero where the quotient has no defined meaning
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// Calculation produced an unusable result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InsufficientPoints error
    pub fn insufficient_points(found: usize, required: usize) -> Self {
        CalcError::InsufficientPoints { found, required }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InsufficientPoints { .. } => "INSUFFICIENT_POINTS",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("radius_m", "-2.0", "Radius must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::insufficient_points(2, 3).error_code(),
            "INSUFFICIENT_POINTS"
        );
        assert_eq!(
            CalcError::division_by_zero("input costs").error_code(),
            "DIVISION_BY_ZERO"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::insufficient_points(2, 3);
        assert_eq!(
            error.to_string(),
            "Insufficient points: got 2, need at least 3"
        );
    }
}
