//! Core traits for directory backends.
//!
//! This module defines the `DirectoryBackend` trait - the seam between the
//! resolver and whatever serves live university data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use university_directory::InstitutionRecord;

/// Transport-level failures talking to a directory backend.
///
/// The resolver absorbs all of these into a provenance tag.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not reach the service
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a list of institutions
    #[error("Decode error: {0}")]
    Decode(String),

    /// Backend is switched off
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout(err.to_string())
        } else if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            BackendError::Connect(err.to_string())
        }
    }
}

/// A read-only query against the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", content = "query", rename_all = "snake_case")]
pub enum RemoteQuery {
    /// Institutions located in a country
    Country(String),
    /// Institutions whose name contains the text
    Name(String),
}

impl RemoteQuery {
    /// Query-string parameter name used by the service.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Country(_) => "country",
            Self::Name(_) => "name",
        }
    }

    /// The query text.
    pub fn text(&self) -> &str {
        match self {
            Self::Country(text) | Self::Name(text) => text,
        }
    }
}

/// Institution as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteInstitution {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "state-province")]
    pub state_province: Option<String>,
    #[serde(default)]
    pub web_pages: Vec<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub alpha_two_code: Option<String>,
}

impl RemoteInstitution {
    /// Create a remote record with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: None,
            state_province: None,
            web_pages: Vec::new(),
            domains: Vec::new(),
            alpha_two_code: None,
        }
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Add a web page.
    pub fn with_web_page(mut self, url: impl Into<String>) -> Self {
        self.web_pages.push(url.into());
        self
    }

    /// Normalize into an [`InstitutionRecord`].
    ///
    /// The first web page, if any, is the canonical homepage.
    pub fn into_record(self) -> InstitutionRecord {
        InstitutionRecord {
            homepage: self.web_pages.into_iter().next(),
            name: self.name,
            country: self.country,
            region: self.state_province,
        }
    }
}

/// Core trait for live directory sources.
#[async_trait]
pub trait DirectoryBackend: Send + Sync {
    /// Backend identifier for logs.
    fn id(&self) -> &str;

    /// Run one lookup. No retries.
    async fn search(&self, query: &RemoteQuery) -> Result<Vec<RemoteInstitution>, BackendError>;
}
