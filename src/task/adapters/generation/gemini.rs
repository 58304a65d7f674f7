//! Google Gemini client for JSON-mode generation.

use crate::task::ports::{GenerationError, GenerationResult, StructuredGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Public endpoint of the Generative Language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

const ERROR_BODY_PREVIEW_CHARS: usize = 300;

/// Gemini `generateContent` client requesting JSON output.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    /// Creates a client for `model` against the public endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }

    /// Points the client at another endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

#[async_trait]
impl StructuredGenerator for GeminiGenerator {
    async fn generate_value(&self, prompt: &str) -> GenerationResult<Value> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(GenerationError::transport)?;
        if !status.is_success() {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect();
            return Err(GenerationError::new(format!(
                "provider returned {status}: {preview}"
            )));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(GenerationError::malformed_output)?;
        let text = parsed
            .into_text()
            .ok_or_else(|| GenerationError::new("provider returned no candidate text"))?;
        debug!(model = %self.model, chars = text.len(), "received generation output");
        serde_json::from_str(strip_code_fence(&text)).map_err(GenerationError::malformed_output)
    }
}

/// Removes a surrounding Markdown code fence, which some models add even in
/// JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|inner| inner.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}
