//! Google Gemini Oracle
//!
//! Implementation of `Oracle` for the Gemini `generateContent` REST API.
//! One request per inquiry, no retry, no client-side timeout: whatever the
//! transport enforces is inherited unchanged, on native and wasm32 alike.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use beacon_core::{
    error::{BeaconError, Result},
    oracle::{InquiryRequest, Oracle, Reply},
};

/// Default Gemini API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini oracle configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API base URL (overridable for self-hosted proxies)
    pub api_base: String,

    /// Explicit API key; when `None` the environment is consulted at call time
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: GEMINI_API_BASE.into(),
            api_key: None,
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| GEMINI_API_BASE.into());

        Self {
            api_base,
            ..Default::default()
        }
    }
}

/// Gemini oracle
pub struct GeminiOracle {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiOracle {
    /// Create from configuration
    pub fn from_config(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(GeminiConfig::from_env())
    }

    /// Create with an explicit API key (e.g., injected at build time)
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::from_config(GeminiConfig {
            api_key: Some(key.into()),
            ..Default::default()
        })
    }

    /// Resolve the credential at call time
    fn resolve_key(&self) -> Result<String> {
        if let Some(key) = &self.config.api_key {
            return Ok(key.clone());
        }
        std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| {
                BeaconError::Credential(
                    "no API key configured; set GEMINI_API_KEY or GOOGLE_API_KEY".into(),
                )
            })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.api_base, model)
    }
}

#[async_trait(?Send)]
impl Oracle for GeminiOracle {
    async fn generate(&self, request: &InquiryRequest) -> Result<Reply> {
        let key = self.resolve_key()?;
        let body = GenerateContentRequest::from_inquiry(request);

        tracing::debug!(model = %request.model, "calling Gemini generateContent");

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .query(&[("key", key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| BeaconError::Transport(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| BeaconError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(BeaconError::Service(format!(
                "{}: {}",
                status,
                snippet(&payload)
            )));
        }

        let decoded: GenerateContentResponse = serde_json::from_str(&payload)
            .map_err(|e| BeaconError::MalformedResponse(e.to_string()))?;

        if let Some(error) = decoded.error {
            return Err(BeaconError::Service(error.message));
        }

        Ok(Reply {
            text: decoded.text(),
        })
    }
}

/// First 500 bytes of an error payload, for logs and error context
fn snippet(payload: &str) -> &str {
    match payload.char_indices().nth(500) {
        Some((idx, _)) => &payload[..idx],
        None => payload,
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
}

#[derive(Clone, Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Clone, Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_inquiry(request: &'a InquiryRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GenerateContentResponse {
    /// Joined text of the first candidate; `None` when no text came back
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let joined: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.is_empty() { None } else { Some(joined) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::default();
        assert_eq!(config.api_base, GEMINI_API_BASE);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_endpoint_includes_model() {
        let oracle = GeminiOracle::from_config(GeminiConfig::default());
        assert_eq!(
            oracle.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_explicit_key_wins() {
        let oracle = GeminiOracle::with_key("k-123");
        assert_eq!(oracle.resolve_key().unwrap(), "k-123");
    }

    #[test]
    fn test_request_body_shape() {
        let inquiry = InquiryRequest {
            model: "gemini-3-flash-preview".into(),
            system_instruction: "Respond as a guide.".into(),
            prompt: "What is progress?".into(),
        };

        let body = serde_json::to_value(GenerateContentRequest::from_inquiry(&inquiry)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What is progress?");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "Respond as a guide."
        );
        // System instruction carries no role field.
        assert!(body["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn test_response_text_joins_parts() {
        let decoded: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Progress is "},{"text":"entropy tamed."}]}}]}"#,
        )
        .unwrap();

        assert_eq!(decoded.text().as_deref(), Some("Progress is entropy tamed."));
    }

    #[test]
    fn test_textless_response_is_none_not_error() {
        let decoded: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).unwrap();
        assert_eq!(decoded.text(), None);

        let empty: GenerateContentResponse = serde_json::from_str(r"{}").unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_api_error_payload_decodes() {
        let decoded: GenerateContentResponse =
            serde_json::from_str(r#"{"error":{"message":"API key not valid"}}"#).unwrap();
        assert_eq!(decoded.error.unwrap().message, "API key not valid");
    }

    #[test]
    fn test_snippet_truncates_long_payloads() {
        let long = "x".repeat(2000);
        assert_eq!(snippet(&long).len(), 500);
        assert_eq!(snippet("short"), "short");
    }
}
