//! Error types for the advisor

use thiserror::Error;

use crate::classifier::traits::ClassifierError;

/// Result type for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Advisor error types
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A profile or planner input is outside its allowed range
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Unknown checklist item or exam
    #[error("Unknown tracker item: {0}")]
    UnknownItem(String),

    /// Classifier failed
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),
}

impl AdvisorError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AdvisorError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
