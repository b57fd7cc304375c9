/// LLM Client: the single point of entry for all model calls in the analyst service.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Bots and the questionnaire chain receive an `Arc<dyn TextGenerator>` at
/// construction time and never see the HTTP client.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

pub mod prompts;

#[cfg(test)]
pub mod stub;

use prompts::{render_supervisor_prompt, FAILURE_MARKER};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Default model when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The abstract "GenerateText(prompt, context) → text" capability.
///
/// Implementations must be stateless between calls: concurrent callers may each
/// hold their own in-flight request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, context: &str) -> Result<String, LlmError>;
}

/// Calls the generator once and converts any failure into a labeled string.
///
/// This is the only place an upstream failure is turned into text; callers
/// always receive a non-empty string.
pub async fn generate_or_marker(
    generator: &dyn TextGenerator,
    prompt: &str,
    context: &str,
) -> String {
    match generator.generate(prompt, context).await {
        Ok(text) => text,
        Err(e) => {
            error!("Could not invoke LLM: {e}");
            format!("{FAILURE_MARKER} Details: {e}")
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The production generator: wraps the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }

    /// Makes one raw call to the model with an already-rendered prompt.
    /// No retries: a failed call is reported to the caller as-is.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str, context: &str) -> Result<String, LlmError> {
        let rendered = render_supervisor_prompt(prompt, context);
        let response = self.call(&rendered).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubGenerator;
    use super::*;

    #[test]
    fn test_response_text_concatenates_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 3}
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Hello, world"));
        assert_eq!(parsed.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.text().is_none());
    }

    #[test]
    fn test_blocked_candidate_has_no_text() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.text().is_none());
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = LlmClient::new("key".to_string(), "gemini-test".to_string()).unwrap();
        assert!(client.endpoint().ends_with("/gemini-test:generateContent"));
        assert_eq!(client.model(), "gemini-test");
    }

    #[tokio::test]
    async fn test_generate_or_marker_passes_text_through() {
        let stub = StubGenerator::with_responses(["raw model text"]);
        let out = generate_or_marker(&stub, "prompt", "context").await;
        assert_eq!(out, "raw model text");
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_or_marker_converts_failure() {
        let stub = StubGenerator::failing("quota exhausted");
        let out = generate_or_marker(&stub, "prompt", "").await;
        assert!(out.starts_with(FAILURE_MARKER));
        assert!(out.contains("quota exhausted"));
    }
}
