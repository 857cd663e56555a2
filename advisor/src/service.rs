//! Advisor - main entry point for study-path recommendations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::classifier::traits::{CareerClassifier, StudyPath};
use crate::error::Result;
use crate::features::ApplicantProfile;
use crate::timeline::Phase;

/// Outcome of one recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub path: StudyPath,
    pub title: &'static str,
    pub timeline: &'static [Phase],
    pub total_months: u32,
    pub generated_at: DateTime<Utc>,
}

impl Recommendation {
    fn new(path: StudyPath) -> Self {
        Self {
            path,
            title: path.title(),
            timeline: path.timeline(),
            total_months: path.total_months(),
            generated_at: Utc::now(),
        }
    }
}

/// Validates profiles and asks the classifier for a study path.
pub struct Advisor {
    classifier: Arc<dyn CareerClassifier>,
}

impl Advisor {
    pub fn new(classifier: Arc<dyn CareerClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier_id(&self) -> &str {
        self.classifier.id()
    }

    /// Recommend a path for `profile`.
    ///
    /// Invalid profiles never reach the classifier.
    pub async fn recommend(&self, profile: &ApplicantProfile) -> Result<Recommendation> {
        let features = profile.to_features()?;
        debug!(classifier = %self.classifier.id(), ?features, "Scoring applicant");

        let path = match self.classifier.predict(&features).await {
            Ok(path) => path,
            Err(e) => {
                warn!(classifier = %self.classifier.id(), error = %e, "Classifier call failed");
                return Err(e.into());
            }
        };

        info!(path = path.title(), label = path.label(), "Recommendation ready");
        Ok(Recommendation::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MockClassifier;
    use crate::error::AdvisorError;
    use crate::features::{CareerGoal, PreferredCountry};

    #[tokio::test]
    async fn test_recommend_abroad() {
        let mock = Arc::new(MockClassifier::new(StudyPath::StudyAbroad));
        let advisor = Advisor::new(mock.clone());

        let profile = ApplicantProfile {
            gre: 325,
            toefl: 112,
            research: true,
            career_goal: CareerGoal::from_label("Entrepreneurship"),
            preferred_country: PreferredCountry::from_label("Canada"),
            ..Default::default()
        };
        let rec = advisor.recommend(&profile).await.unwrap();

        assert_eq!(rec.path, StudyPath::StudyAbroad);
        assert_eq!(rec.title, "MS (Abroad)");
        assert_eq!(rec.timeline.len(), 4);
        assert_eq!(rec.total_months, 13);
        assert_eq!(mock.call_count(), 1);

        let sent = mock.last_features().unwrap();
        assert_eq!(sent.gre_score, 325);
        assert_eq!(sent.research, 1);
        assert_eq!(sent.career_goal, 1);
        assert_eq!(sent.preferred_country, 4);
    }

    #[tokio::test]
    async fn test_invalid_profile_skips_classifier() {
        let mock = Arc::new(MockClassifier::default());
        let advisor = Advisor::new(mock.clone());

        let profile = ApplicantProfile {
            toefl: 150,
            ..Default::default()
        };
        let err = advisor.recommend(&profile).await.unwrap_err();

        assert!(matches!(err, AdvisorError::InvalidField { field: "TOEFL", .. }));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_classifier_failure_propagates() {
        let mock = Arc::new(MockClassifier::default().with_available(false));
        let advisor = Advisor::new(mock.clone());

        let err = advisor
            .recommend(&ApplicantProfile::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AdvisorError::Classifier(_)));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_recommendation_serializes() {
        let advisor = Advisor::new(Arc::new(MockClassifier::default()));
        let rec = advisor.recommend(&ApplicantProfile::default()).await.unwrap();

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["path"], "domestic_m_tech");
        assert_eq!(value["timeline"][0]["name"], "GATE Prep");
        assert_eq!(value["timeline"][0]["priority"], "high");
    }
}
