//! Google Gemini integration for LexiGuard
//!
//! Thin client for the `generateContent` endpoint, exposed to the core
//! through the `TextGenerator` seam. The API key comes from configuration,
//! never from source.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use lexiguard_core::config::{get_env_or, get_required_env, GEMINI_API_KEY_VAR, GEMINI_MODEL_VAR};
use lexiguard_core::{LexiError, Result, TextGenerator};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shared HTTP client for connection pooling
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or initialize the shared HTTP client
fn get_http_client() -> Client {
    HTTP_CLIENT
        .get_or_init(|| {
            Client::builder()
                .pool_max_idle_per_host(50)
                .pool_idle_timeout(std::time::Duration::from_secs(300))
                .tcp_keepalive(std::time::Duration::from_secs(60))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to create HTTP client")
        })
        .clone()
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the shared connection pool
    pub fn new(api_key: String) -> Self {
        Self {
            client: get_http_client(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a new Gemini client with a custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: get_http_client(),
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the generation model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build a client from `GEMINI_API_KEY` / `GEMINI_MODEL`.
    ///
    /// Fails with a config error when the key is unset rather than falling
    /// back to any embedded default.
    pub fn from_env() -> Result<Self> {
        let api_key = get_required_env(GEMINI_API_KEY_VAR)?;
        let model = get_env_or(GEMINI_MODEL_VAR, DEFAULT_MODEL);
        Ok(Self::new(api_key).with_model(model))
    }

    /// Generate a completion for `prompt`
    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        tracing::debug!(model = %self.model, "dispatching generateContent request");

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LexiError::transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| LexiError::transport(e.to_string()))?;
        extract_text(body)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}

/// Map a non-success HTTP status to the generation error taxonomy
fn status_error(status: StatusCode) -> LexiError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        LexiError::RateLimited
    } else {
        LexiError::request_failed(status.as_u16())
    }
}

/// Pull the first candidate's first text part out of a response
fn extract_text(body: GeminiResponse) -> Result<String> {
    body.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(LexiError::EmptyResponse)
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "What is RERA?".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is RERA?");
    }

    #[test]
    fn test_extract_text_success() {
        let body: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"RERA is the Real Estate (Regulation and Development) Act."}]}}]}"#,
        )
        .unwrap();

        let text = extract_text(body).unwrap();
        assert!(text.starts_with("RERA is"));
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let body: GeminiResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(extract_text(body), Err(LexiError::EmptyResponse)));

        let body: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(extract_text(body), Err(LexiError::EmptyResponse)));
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS),
            LexiError::RateLimited
        ));
        assert!(matches!(
            status_error(StatusCode::SERVICE_UNAVAILABLE),
            LexiError::RequestFailed { status: 503 }
        ));
    }

    #[test]
    fn test_client_construction() {
        let client = GeminiClient::new("test_key".to_string()).with_model("gemini-exp");
        assert_eq!(client.model, "gemini-exp");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(TextGenerator::name(&client), "gemini");

        let client =
            GeminiClient::with_base_url("test_key".to_string(), "http://localhost:9090".into());
        assert_eq!(client.base_url, "http://localhost:9090");
    }
}
