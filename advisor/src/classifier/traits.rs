//! Core trait for study-path classifiers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::features::FeatureRecord;

/// Error types for classifier calls.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Classifier is not reachable
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    /// Request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Label outside {0, 1}
    #[error("Invalid label: {0}")]
    InvalidLabel(i64),
}

/// Recommended graduate-study path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyPath {
    /// Label 0: domestic technical degree
    DomesticMTech,
    /// Label 1: master's abroad
    StudyAbroad,
}

impl StudyPath {
    /// Interpret a binary classifier label.
    pub fn from_label(label: i64) -> Result<Self, ClassifierError> {
        match label {
            0 => Ok(Self::DomesticMTech),
            1 => Ok(Self::StudyAbroad),
            other => Err(ClassifierError::InvalidLabel(other)),
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Self::DomesticMTech => 0,
            Self::StudyAbroad => 1,
        }
    }

    /// Display name of the path.
    pub fn title(&self) -> &'static str {
        match self {
            Self::DomesticMTech => "MTech (India)",
            Self::StudyAbroad => "MS (Abroad)",
        }
    }
}

/// Scores a fixed-shape feature record.
#[async_trait]
pub trait CareerClassifier: Send + Sync {
    /// Classifier identifier for logs.
    fn id(&self) -> &str;

    /// Score one applicant.
    async fn predict(&self, features: &FeatureRecord) -> Result<StudyPath, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_mapping() {
        assert_eq!(StudyPath::from_label(0).unwrap(), StudyPath::DomesticMTech);
        assert_eq!(StudyPath::from_label(1).unwrap(), StudyPath::StudyAbroad);
        assert!(matches!(
            StudyPath::from_label(2),
            Err(ClassifierError::InvalidLabel(2))
        ));
        assert_eq!(StudyPath::StudyAbroad.title(), "MS (Abroad)");
        assert_eq!(StudyPath::DomesticMTech.label(), 0);
    }
}
