//! Error types for SmartInsure
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using SmartInsureError
pub type Result<T> = std::result::Result<T, SmartInsureError>;

/// Unified error type for SmartInsure operations
#[derive(Debug, Error)]
pub enum SmartInsureError {
    // Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Portal session errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Form input validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field {field} must not be negative")]
    Negative { field: &'static str },

    #[error("Field {field} is out of range: {value} (allowed {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Pricing calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Quote description must not be empty")]
    EmptyDescription,

    #[error("Premium {0} does not fit the display range")]
    Overflow(String),
}

/// Portal session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("An AI quote is already being processed")]
    AlreadyProcessing,

    #[error("Coaching action not found: {0}")]
    UnknownAction(u32),
}

impl From<serde_json::Error> for SmartInsureError {
    fn from(err: serde_json::Error) -> Self {
        SmartInsureError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for SmartInsureError {
    fn from(err: anyhow::Error) -> Self {
        SmartInsureError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SmartInsureError::Validation(ValidationError::InvalidNumber {
            field: "age",
            value: "thirty".to_string(),
        });
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().contains("thirty"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ValidationError::OutOfRange {
            field: "vehicleYear",
            value: "3000".into(),
            min: "1900".into(),
            max: "2100".into(),
        };
        assert_eq!(
            err.to_string(),
            "Field vehicleYear is out of range: 3000 (allowed 1900 to 2100)"
        );
    }

    #[test]
    fn test_session_error() {
        let err = SmartInsureError::from(SessionError::NotFound("abc".to_string()));
        assert_eq!(err.to_string(), "Session error: Session not found: abc");
    }
}
