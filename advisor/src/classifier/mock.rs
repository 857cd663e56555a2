//! Mock classifier for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use super::traits::*;
use crate::features::FeatureRecord;

/// Mock classifier with a fixed answer.
pub struct MockClassifier {
    label: StudyPath,
    available: AtomicBool,
    call_count: AtomicU32,
    last_features: Mutex<Option<FeatureRecord>>,
}

impl MockClassifier {
    /// Always answer with `label`.
    pub fn new(label: StudyPath) -> Self {
        Self {
            label,
            available: AtomicBool::new(true),
            call_count: AtomicU32::new(0),
            last_features: Mutex::new(None),
        }
    }

    /// Set availability.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Get the number of times predict was called.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Record passed to the most recent call.
    pub fn last_features(&self) -> Option<FeatureRecord> {
        self.last_features.lock().ok().and_then(|f| f.clone())
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(StudyPath::DomesticMTech)
    }
}

#[async_trait]
impl CareerClassifier for MockClassifier {
    fn id(&self) -> &str {
        "mock-classifier"
    }

    async fn predict(&self, features: &FeatureRecord) -> Result<StudyPath, ClassifierError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_features.lock() {
            *last = Some(features.clone());
        }

        if !self.available.load(Ordering::SeqCst) {
            return Err(ClassifierError::Unavailable("Mock classifier disabled".to_string()));
        }

        Ok(self.label)
    }
}
