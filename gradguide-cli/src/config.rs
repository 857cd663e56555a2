//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use explorer::ExplorerConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Remote study-path classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Scoring service base URL; `predict` is unavailable without one
    #[serde(default)]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Load from `path`, or defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

// Defaults
fn default_timeout_secs() -> u64 { 10 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.explorer.timeout_secs, 10);
        assert_eq!(config.explorer.cache.ttl_secs, 3600);
        assert!(config.explorer.cache.enabled);
        assert!(config.classifier.url.is_none());
        assert_eq!(config.classifier.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
[explorer]
base_url = "http://localhost:8080"
timeout_secs = 3

[explorer.cache]
enabled = false
max_entries = 16

[classifier]
url = "http://localhost:9000"
timeout_secs = 2
"#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.explorer.base_url, "http://localhost:8080");
        assert_eq!(config.explorer.timeout_secs, 3);
        assert!(!config.explorer.cache.enabled);
        assert_eq!(config.explorer.cache.max_entries, 16);
        assert_eq!(config.explorer.cache.ttl_secs, 3600);
        assert_eq!(config.classifier.url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.classifier.timeout_secs, 2);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load("/nonexistent/gradguide.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
