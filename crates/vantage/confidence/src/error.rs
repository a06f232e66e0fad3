//! Business-rule errors raised by the confidence controls.
//!
//! These are functional denials, not system failures: the mutation layer
//! catches them and maps them to permission-denied responses. The evaluator
//! itself performs no logging beyond trace points and no recovery.

use thiserror::Error;

/// Result alias for confidence policy evaluation.
pub type Result<T> = std::result::Result<T, ConfidenceError>;

/// Write operation being gated, used in denial messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteOperation {
    Create,
    Update,
    Upsert,
}

impl std::fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOperation::Create => write!(f, "create"),
            WriteOperation::Update => write!(f, "update"),
            WriteOperation::Upsert => write!(f, "upsert"),
        }
    }
}

/// Denials produced by the confidence policy evaluator.
#[derive(Error, Debug)]
pub enum ConfidenceError {
    /// The user has no usable confidence level at all: no user-level
    /// setting, no graded group, no bypass capability.
    #[error("User has no effective max confidence level and cannot {operation} this element")]
    NoEffectiveConfidenceLevel {
        /// Operation that was denied.
        operation: WriteOperation,
    },

    /// The user's applicable ceiling is below the element's confidence.
    #[error("User effective max confidence level is insufficient to update this element")]
    InsufficientConfidenceLevel {
        /// Ceiling applicable to the element's entity type.
        max_confidence: u8,
        /// Confidence carried by the element.
        element_confidence: u8,
    },

    /// An edit input carried a confidence value that is not a number.
    #[error("invalid confidence value in update input: {value:?}")]
    InvalidConfidenceValue {
        /// Raw value received from the mutation layer.
        value: String,
    },
}
