//! Hipo universities API backend.
//!
//! `GET {base_url}/search?country=..` and `GET {base_url}/search?name=..`,
//! both answering with a JSON array of institutions.

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::debug;

use super::traits::*;

/// Public endpoint of the Hipo universities service.
pub const DEFAULT_BASE_URL: &str = "http://universities.hipolabs.com";

/// Backend for the Hipo universities API.
pub struct HipolabsBackend {
    client: Client,
    base_url: String,
}

impl HipolabsBackend {
    /// Create a backend with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Unavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Backend pointing at the public service.
    pub fn public(timeout: Duration) -> Result<Self, BackendError> {
        Self::new(DEFAULT_BASE_URL, timeout)
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl DirectoryBackend for HipolabsBackend {
    fn id(&self) -> &str {
        "hipolabs"
    }

    async fn search(&self, query: &RemoteQuery) -> Result<Vec<RemoteInstitution>, BackendError> {
        debug!(by = query.param(), query = query.text(), "Querying directory service");

        let response = self
            .client
            .get(self.search_url())
            .query(&[(query.param(), query.text())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let institutions: Vec<RemoteInstitution> = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        debug!(count = institutions.len(), "Directory service answered");
        Ok(institutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let backend =
            HipolabsBackend::new("http://localhost:9000/", Duration::from_secs(1)).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:9000");
        assert_eq!(backend.search_url(), "http://localhost:9000/search");
    }

    #[test]
    fn test_public_backend() {
        let backend = HipolabsBackend::public(Duration::from_secs(10)).unwrap();
        assert_eq!(backend.id(), "hipolabs");
        assert_eq!(backend.base_url(), DEFAULT_BASE_URL);
    }
}
