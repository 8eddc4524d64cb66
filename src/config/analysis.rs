//! Frame analysis configuration
//!
//! The API key may come from the environment (`GEMINI_API_KEY`, then
//! `API_KEY`) or from the `[analysis]` section. Only a key that came from
//! the file is ever written back to it.

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Where the resolved API key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySource {
    Env,
    File,
    #[default]
    None,
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub api_key: Option<String>,
    pub key_source: KeySource,
    /// Base URL; `/models/{model}:generateContent` is appended
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            key_source: KeySource::None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Analysis settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAnalysis {
    /// API key from config file (env vars take precedence)
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl AnalysisConfig {
    /// Create from file config with defaults
    /// Note: api_key_override is the env var value, which wins over the file
    pub fn from_file(file: Option<FileAnalysis>, api_key_override: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let non_empty = |key: Option<String>| key.filter(|k| !k.trim().is_empty());
        let (api_key, key_source) = match (non_empty(api_key_override), non_empty(file.api_key)) {
            (Some(key), _) => (Some(key), KeySource::Env),
            (None, Some(key)) => (Some(key), KeySource::File),
            (None, None) => (None, KeySource::None),
        };

        Self {
            api_key,
            key_source,
            endpoint: file.endpoint.unwrap_or(defaults.endpoint),
            model: file.model.unwrap_or(defaults.model),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }

    /// True when a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
