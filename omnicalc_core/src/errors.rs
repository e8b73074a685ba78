//! # Error Types
//!
//! Structured error type for omnicalc_core. The engine has exactly one
//! semantic failure class: an input that cannot produce a result. Callers
//! are expected to leave their previous display untouched when they see it.
//!
//! ## Example
//!
//! ```rust
//! use omnicalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_principal(principal: f64) -> CalcResult<()> {
//!     if principal <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "principal",
//!             principal.to_string(),
//!             "Principal must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for omnicalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Every engine function detects bad input locally and returns this instead
/// of a default or partial result. There is deliberately no other variant:
/// the engine performs no I/O and has nothing else that can fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, zero divisor, impossible
    /// geometry, empty character set, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
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

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("principal", "-5000", "Principal must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            CalcError::invalid_input("d1", "0", "Denominator cannot be zero").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::invalid_input("side_a", "-3", "Side must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'side_a': -3 - Side must be positive"
        );
    }
}
