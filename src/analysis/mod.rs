// Frame analysis - describe a still from a camera
//
// The public entry points never fail: a missing credential and any error on
// the way (capture, network, HTTP status, decoding) are turned into fixed
// user-facing strings. Errors are logged, not returned.

mod gemini;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::config::AnalysisConfig;
use gemini::{GenerateContentRequest, GenerateContentResponse};

pub const SIMULATION_MESSAGE: &str = "Simulation Mode: API Key not configured. In a real scenario, Gemini would analyze this frame for threats, people, or package delivery.";
pub const UNAVAILABLE_MESSAGE: &str = "AI Service unavailable momentarily.";
pub const NO_ACTIVITY_MESSAGE: &str = "No significant activity detected.";

const PROMPT: &str = "You are a security assistant. Analyze this security camera frame. Briefly list what you see (people, pets, vehicles, potential threats) in 1-2 sentences. Be concise.";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("captured frame is empty")]
    EmptyFrame,

    #[error("frame capture failed: {0}")]
    Capture(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Base64-encode a JPEG still for the request body
pub fn encode_frame(jpeg: &[u8]) -> Result<String, AnalysisError> {
    if jpeg.is_empty() {
        return Err(AnalysisError::EmptyFrame);
    }
    Ok(STANDARD.encode(jpeg))
}

#[derive(Clone)]
pub struct FrameAnalyzer {
    client: reqwest::Client,
    api_key: Option<String>,
    url: String,
}

impl FrameAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        let url = format!(
            "{}/models/{}:generateContent",
            config.endpoint.trim_end_matches('/'),
            config.model
        );

        if config.has_credential() {
            tracing::info!("Frame analysis enabled (model: {})", config.model);
        } else {
            tracing::info!("Frame analysis in simulation mode (no API key)");
        }

        Self {
            client,
            api_key: config.api_key.clone(),
            url,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Describe a base64-encoded JPEG still
    pub async fn analyze(&self, image_base64: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return SIMULATION_MESSAGE.to_string();
        };

        let result = self.generate(key, image_base64).await;
        Self::into_message(result)
    }

    /// Grab a still from a camera's image URL and describe it
    ///
    /// The credential is checked before the capture, so simulation mode does
    /// no network I/O at all.
    pub async fn analyze_url(&self, image_url: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return SIMULATION_MESSAGE.to_string();
        };

        let result = match self.capture(image_url).await {
            Ok(image) => self.generate(key, &image).await,
            Err(e) => Err(e),
        };
        Self::into_message(result)
    }

    async fn capture(&self, image_url: &str) -> Result<String, AnalysisError> {
        tracing::debug!("Capturing still from {}", image_url);
        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(|e| AnalysisError::Capture(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::Capture(format!(
                "HTTP {}",
                response.status().as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Capture(e.to_string()))?;
        encode_frame(&bytes)
    }

    async fn generate(&self, key: &str, image_base64: &str) -> Result<String, AnalysisError> {
        let body = GenerateContentRequest::image_with_prompt(image_base64, PROMPT);

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }

    fn into_message(result: Result<String, AnalysisError>) -> String {
        match result {
            Ok(text) if text.trim().is_empty() => NO_ACTIVITY_MESSAGE.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::error!("Frame analysis failed: {}", e);
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileAnalysis, KeySource};
    use std::time::{Duration, Instant};

    fn config_with_key(endpoint: &str) -> AnalysisConfig {
        AnalysisConfig::from_file(
            Some(FileAnalysis {
                api_key: Some("test-key".to_string()),
                endpoint: Some(endpoint.to_string()),
                model: None,
                timeout_secs: Some(2),
            }),
            None,
        )
    }

    #[tokio::test]
    async fn no_credential_returns_simulation_message() {
        let analyzer = FrameAnalyzer::new(&AnalysisConfig::default());
        assert!(!analyzer.has_credential());

        let started = Instant::now();
        assert_eq!(analyzer.analyze("AAAA").await, SIMULATION_MESSAGE);
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn no_credential_skips_capture() {
        let analyzer = FrameAnalyzer::new(&AnalysisConfig::default());
        // The URL is never fetched
        let text = analyzer.analyze_url("http://127.0.0.1:9/frame.jpg").await;
        assert_eq!(text, SIMULATION_MESSAGE);
    }

    #[tokio::test]
    async fn unreachable_service_returns_unavailable() {
        let config = config_with_key("http://127.0.0.1:9");
        assert_eq!(config.key_source, KeySource::File);

        let analyzer = FrameAnalyzer::new(&config);
        assert_eq!(analyzer.analyze("AAAA").await, UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn failed_capture_returns_unavailable() {
        let analyzer = FrameAnalyzer::new(&config_with_key("http://127.0.0.1:9"));
        let text = analyzer.analyze_url("http://127.0.0.1:9/frame.jpg").await;
        assert_eq!(text, UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn empty_model_text_means_no_activity() {
        assert_eq!(
            FrameAnalyzer::into_message(Ok("  \n".to_string())),
            NO_ACTIVITY_MESSAGE
        );
        assert_eq!(
            FrameAnalyzer::into_message(Ok(" One person at the gate. ".to_string())),
            "One person at the gate."
        );
        assert_eq!(
            FrameAnalyzer::into_message(Err(AnalysisError::Api {
                status: 503,
                message: "overloaded".to_string()
            })),
            UNAVAILABLE_MESSAGE
        );
    }

    #[test]
    fn encode_rejects_empty_frame() {
        assert!(matches!(encode_frame(&[]), Err(AnalysisError::EmptyFrame)));
        assert_eq!(encode_frame(&[0xff, 0xd8, 0xff]).unwrap(), "/9j/");
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let analyzer = FrameAnalyzer::new(&config_with_key("http://localhost:1234/v1beta/"));
        assert_eq!(
            analyzer.url,
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
