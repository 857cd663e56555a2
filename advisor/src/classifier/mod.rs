//! Classifier abstraction layer.
//!
//! - Remote scoring service (`RemoteClassifier`)
//! - Mock classifier for testing

pub mod mock;
pub mod remote;
pub mod traits;

pub use mock::MockClassifier;
pub use remote::RemoteClassifier;
pub use traits::{CareerClassifier, ClassifierError, StudyPath};
