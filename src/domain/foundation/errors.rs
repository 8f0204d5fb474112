//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be finite, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("Field '{field}' must be non-negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a non-finite value validation error.
    pub fn non_finite(field: impl Into<String>, value: f64) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            value,
        }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, value: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            value,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NonFinite { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyMatrix,
    DimensionMismatch,
    NonFiniteValue,
    DegenerateWeights,
    InvalidThreshold,
    InvalidSimulationParameter,

    // Lookup errors
    UnknownMethod,
    UnknownScenario,
    RateUnavailable,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyMatrix => "EMPTY_MATRIX",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::NonFiniteValue => "NON_FINITE_VALUE",
            ErrorCode::DegenerateWeights => "DEGENERATE_WEIGHTS",
            ErrorCode::InvalidThreshold => "INVALID_THRESHOLD",
            ErrorCode::InvalidSimulationParameter => "INVALID_SIMULATION_PARAMETER",
            ErrorCode::UnknownMethod => "UNKNOWN_METHOD",
            ErrorCode::UnknownScenario => "UNKNOWN_SCENARIO",
            ErrorCode::RateUnavailable => "RATE_UNAVAILABLE",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a shape error naming what was expected and what arrived.
    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        let what = what.into();
        Self::new(
            ErrorCode::DimensionMismatch,
            format!("{} has length {}, expected {}", what, actual, expected),
        )
        .with_detail("field", what)
        .with_detail("expected", expected.to_string())
        .with_detail("actual", actual.to_string())
    }

    /// Creates an error for a simulation parameter outside its valid domain.
    pub fn invalid_parameter(name: impl Into<String>, value: impl fmt::Display) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::InvalidSimulationParameter,
            format!("Invalid simulation parameter {}: {}", name, value),
        )
        .with_detail("parameter", name)
        .with_detail("value", value.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::ValidationFailed,
            ValidationError::NonFinite { .. } => ErrorCode::NonFiniteValue,
            ValidationError::Negative { .. } | ValidationError::InvalidFormat { .. } => {
                ErrorCode::ValidationFailed
            }
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}
