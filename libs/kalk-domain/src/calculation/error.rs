//! Domain errors for calculation requests
//!
//! Validation errors carry the exact rule that failed. They are meant for
//! logs only: the HTTP layer collapses all of them into one uniform response.

use thiserror::Error;

use crate::calculation::entity::Operand;

/// A raw request that failed one of the validation rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was absent or null
    #[error("Field '{field}' is missing")]
    MissingField { field: Operand },

    /// The field holds a negative integer
    #[error("Field '{field}' must not be negative (got {value})")]
    NegativeValue { field: Operand, value: i64 },

    /// The field exceeds the largest operand whose factorial fits in 64 bits
    #[error("Field '{field}' exceeds maximum allowed value {max} (got {value})")]
    TooLarge { field: Operand, value: u64, max: u64 },
}

impl ValidationError {
    /// Create a missing field error
    pub fn missing_field(field: Operand) -> Self {
        Self::MissingField { field }
    }

    /// Create a negative value error
    pub fn negative_value(field: Operand, value: i64) -> Self {
        Self::NegativeValue { field, value }
    }

    /// Create a too large error
    pub fn too_large(field: Operand, value: u64, max: u64) -> Self {
        Self::TooLarge { field, value, max }
    }

    /// The field the failed rule applies to
    pub fn field(&self) -> Operand {
        match self {
            Self::MissingField { field }
            | Self::NegativeValue { field, .. }
            | Self::TooLarge { field, .. } => *field,
        }
    }
}

/// Errors raised while running the calculation engine
#[derive(Error, Debug)]
pub enum CalculationError {
    /// A spawned factorial task panicked or was cancelled before completing
    #[error("Factorial task for '{operand}' failed: {reason}")]
    TaskFailed { operand: Operand, reason: String },
}

impl CalculationError {
    /// Create a task failure error
    pub fn task_failed(operand: Operand, reason: impl Into<String>) -> Self {
        Self::TaskFailed {
            operand,
            reason: reason.into(),
        }
    }
}

/// Unknown overflow policy name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown overflow policy '{0}' (expected 'wrap' or 'reject')")]
pub struct ParsePolicyError(pub String);

/// Result type alias for calculation operations
pub type Result<T> = std::result::Result<T, CalculationError>;
