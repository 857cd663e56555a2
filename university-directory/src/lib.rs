//! University Directory - built-in institution table
//!
//! The fallback data source for the university explorer:
//!
//! - **Entries**: canonical country → ordered institution names
//! - **Aliases**: lookup keys ("USA", "US", "United States") that share one entry
//! - **Matching**: exact, then case-insensitive, then substring (first key wins)
//!
//! Everything here is `'static` and immutable, so a [`StaticDirectory`] can be
//! copied freely and shared across tasks without synchronization.
//!
//! # Example
//!
//! ```
//! use university_directory::StaticDirectory;
//!
//! let directory = StaticDirectory::builtin();
//! let india = directory.institutions_for("bharat");
//! assert_eq!(india[0], "Indian Institute of Technology Delhi");
//! assert!(directory.match_country("Atlantis").is_none());
//! ```

pub mod directory;
pub mod table;
pub mod types;

// Re-export main types
pub use directory::{CountryMatch, MatchPhase, NameMatch, StaticDirectory};
pub use table::{AliasKey, DirectoryEntry};
pub use types::{homepage_slug, InstitutionRecord, MULTIPLE_COUNTRIES, UNKNOWN_COUNTRY};
