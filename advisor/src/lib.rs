//! Advisor - Study Path Recommendation
//!
//! Provides the decision-support side of GradGuide:
//! - Applicant profile validation and feature encoding
//! - Trait-based classifier boundary (remote scoring service, mock)
//! - Preparation timeline per recommended path
//! - Financial planner and preparation progress tracker
//!
//! The classifier is opaque: it scores a fixed 12-column feature record and
//! answers with a binary label.

pub mod classifier;
pub mod error;
pub mod features;
pub mod finance;
pub mod progress;
pub mod service;
pub mod timeline;

// Re-export main types for convenience
pub use classifier::traits::{CareerClassifier, ClassifierError, StudyPath};
pub use classifier::{MockClassifier, RemoteClassifier};
pub use error::{AdvisorError, Result};
pub use features::{ApplicantProfile, CareerGoal, FeatureRecord, PreferredCountry};
pub use finance::{BreakdownLine, FinancialInputs, FinancialSummary, FundingOutcome, LineKind};
pub use progress::{ProgressTracker, CHECKLIST_ITEMS, EXAMS};
pub use service::{Advisor, Recommendation};
pub use timeline::{Phase, Priority};
