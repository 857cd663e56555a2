//! Directory backend abstraction layer.
//!
//! - Hipo universities API (`HipolabsBackend`)
//! - Mock backend for testing

pub mod hipolabs;
pub mod mock;
pub mod traits;

pub use hipolabs::HipolabsBackend;
pub use mock::MockBackend;
pub use traits::{BackendError, DirectoryBackend, RemoteInstitution, RemoteQuery};
