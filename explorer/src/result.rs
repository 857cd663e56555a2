//! Lookup results and their provenance.

use serde::{Deserialize, Serialize};
use university_directory::InstitutionRecord;

/// Where a lookup result came from.
///
/// Every resolution attempt yields exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Live answer from the directory service
    Live,
    /// Substituted from the built-in table
    Cached,
    /// Service answered, nothing exists anywhere
    None,
    /// Service unreachable, nothing in the built-in table either
    Error,
}

impl Provenance {
    /// Whether results with this provenance carry records.
    pub fn has_records(&self) -> bool {
        matches!(self, Self::Live | Self::Cached)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Cached => "cached",
            Self::None => "none",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the resolver fell back to the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Service answered with zero records
    EmptyResult,
    /// Timeout, connection failure, non-2xx or undecodable body
    TransportFailure,
}

impl FallbackReason {
    /// Provenance when the built-in table has nothing either.
    pub fn miss_provenance(&self) -> Provenance {
        match self {
            Self::EmptyResult => Provenance::None,
            Self::TransportFailure => Provenance::Error,
        }
    }
}

/// The two lookups the resolver offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    ByCountry,
    ByName,
}

/// Records plus provenance.
///
/// LIVE and CACHED always carry records; NONE and ERROR never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    records: Vec<InstitutionRecord>,
    provenance: Provenance,
}

impl LookupResult {
    /// Live result; an empty list is a miss after an empty answer.
    pub(crate) fn live(records: Vec<InstitutionRecord>) -> Self {
        if records.is_empty() {
            return Self::miss(FallbackReason::EmptyResult);
        }
        Self {
            records,
            provenance: Provenance::Live,
        }
    }

    /// Fallback result; an empty list becomes NONE or ERROR by `reason`.
    pub(crate) fn fallback(records: Vec<InstitutionRecord>, reason: FallbackReason) -> Self {
        if records.is_empty() {
            return Self::miss(reason);
        }
        Self {
            records,
            provenance: Provenance::Cached,
        }
    }

    pub(crate) fn miss(reason: FallbackReason) -> Self {
        Self {
            records: Vec::new(),
            provenance: reason.miss_provenance(),
        }
    }

    pub fn records(&self) -> &[InstitutionRecord] {
        &self.records
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split into records and provenance.
    pub fn into_parts(self) -> (Vec<InstitutionRecord>, Provenance) {
        (self.records, self.provenance)
    }
}
