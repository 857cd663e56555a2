//! Explorer - University Lookup Resolution
//!
//! Resolves country and name queries against a live directory service and
//! falls back to the built-in [`university_directory`] table:
//!
//! - Trait-based directory backends (Hipo universities API, mock)
//! - One attempt per call, bounded by the backend timeout
//! - Every call ends in exactly one [`Provenance`]
//! - Optional time-bounded cache for repeated queries
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            LookupResolver               │
//! │  (by country / by name, provenance)     │
//! └───────┬──────────────────────┬──────────┘
//!         ▼                      ▼
//! ┌────────────────┐     ┌────────────────┐
//! │DirectoryBackend│     │StaticDirectory │
//! │ (Hipolabs/Mock)│     │  (fallback)    │
//! └────────────────┘     └────────────────┘
//! ```

pub mod backend;
pub mod cache;
pub mod config;
pub mod resolver;
pub mod result;

// Re-export main types for convenience
pub use backend::traits::{BackendError, DirectoryBackend, RemoteInstitution, RemoteQuery};
pub use backend::{HipolabsBackend, MockBackend};
pub use cache::{CacheKey, CacheStats, ResultCache};
pub use config::{CacheConfig, ExplorerConfig};
pub use resolver::LookupResolver;
pub use result::{FallbackReason, LookupKind, LookupResult, Provenance};
pub use university_directory::InstitutionRecord;
