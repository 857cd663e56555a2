//! Remote scoring service.
//!
//! `POST {base_url}/predict` with `{"instances": [<feature record>]}`,
//! answered by `{"predictions": [0 | 1]}`.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::traits::*;
use crate::features::FeatureRecord;

/// Classifier hosted behind an HTTP scoring endpoint.
pub struct RemoteClassifier {
    client: Client,
    base_url: String,
}

impl RemoteClassifier {
    /// Create a classifier client with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Unavailable(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [&'a FeatureRecord; 1],
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: Vec<i64>,
}

#[async_trait]
impl CareerClassifier for RemoteClassifier {
    fn id(&self) -> &str {
        &self.base_url
    }

    async fn predict(&self, features: &FeatureRecord) -> Result<StudyPath, ClassifierError> {
        let body = PredictRequest {
            instances: [features],
        };

        let response = self
            .client
            .post(self.predict_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ClassifierError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::ParseError(e.to_string()))?;

        let label = parsed
            .predictions
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::ParseError("No predictions in response".to_string()))?;

        StudyPath::from_label(label)
    }
}
