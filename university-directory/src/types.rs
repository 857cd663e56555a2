//! Institution record shared by the directory and the lookup resolver.

use serde::{Deserialize, Serialize};

/// Country label for records synthesized from a cross-directory name search.
pub const MULTIPLE_COUNTRIES: &str = "Multiple countries available";

/// Country label used when a record carries no country.
pub const UNKNOWN_COUNTRY: &str = "unknown";

/// A single institution, either normalized from the remote service or
/// synthesized from the static table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// Institution name
    pub name: String,
    /// Country, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// State or province, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Canonical homepage URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl InstitutionRecord {
    /// Create a record with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: None,
            region: None,
            homepage: None,
        }
    }

    /// Build a record for a static-table name: homepage is the derived slug.
    pub fn synthesized(name: &str, country: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            country: Some(country.into()),
            region: None,
            homepage: Some(homepage_slug(name)),
        }
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the homepage.
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = Some(homepage.into());
        self
    }

    /// Country for display; `"unknown"` when absent.
    pub fn country_or_unknown(&self) -> &str {
        self.country.as_deref().unwrap_or(UNKNOWN_COUNTRY)
    }
}

/// Deterministic homepage for a static-table institution.
///
/// Lowercases the name and strips spaces: `"Anna University"` becomes
/// `https://annauniversity.edu`.
pub fn homepage_slug(name: &str) -> String {
    format!("https://{}.edu", name.to_lowercase().replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homepage_slug() {
        assert_eq!(
            homepage_slug("Massachusetts Institute of Technology"),
            "https://massachusettsinstituteoftechnology.edu"
        );
        assert_eq!(homepage_slug("UCLA"), "https://ucla.edu");
        assert_eq!(
            homepage_slug("King's College London"),
            "https://king'scollegelondon.edu"
        );
    }

    #[test]
    fn test_synthesized_record() {
        let record = InstitutionRecord::synthesized("BITS Pilani", "India");
        assert_eq!(record.name, "BITS Pilani");
        assert_eq!(record.country.as_deref(), Some("India"));
        assert_eq!(record.region, None);
        assert_eq!(record.homepage.as_deref(), Some("https://bitspilani.edu"));
    }

    #[test]
    fn test_country_or_unknown() {
        let record = InstitutionRecord::new("Somewhere College");
        assert_eq!(record.country_or_unknown(), "unknown");

        let record = record.with_country("Canada");
        assert_eq!(record.country_or_unknown(), "Canada");
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let record = InstitutionRecord::new("Anna University");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Anna University" }));
    }
}
