//! Completion-service boundary and the generative-language HTTP adapter.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::schema::ResponseSchema;
use crate::config::GenAiConfig;

/// A single prompt, optionally constrained to a structured JSON response.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub schema: Option<ResponseSchema>,
}

impl CompletionRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            schema: None,
        }
    }

    pub fn structured(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: ResponseSchema,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            schema: Some(schema),
        }
    }
}

/// Why a generation produced nothing. Logged, never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    #[error("completion service is not configured")]
    Disabled,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("completion service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("completion service returned no text")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for GenerationFailure {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Generative text/JSON completion capability. Each call is independent and at-most-once.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationFailure>;
}

/// Adapter for the `models/{model}:generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(config: &GenAiConfig) -> Result<Self, GenerationFailure> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| GenerationFailure::Transport(format!("failed to build client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a ResponseSchema,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationFailure> {
        let api_key = self.api_key.as_deref().ok_or(GenerationFailure::Disabled)?;

        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: request.schema.as_ref().map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        let response = self
            .client
            .post(self.generate_url(&request.model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GenerateContentResponse>(&text)
                .ok()
                .and_then(|parsed| parsed.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(GenerationFailure::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|err| GenerationFailure::Malformed(format!("invalid envelope: {err}")))?;

        if let Some(error) = parsed.error {
            return Err(GenerationFailure::Malformed(
                error.message.unwrap_or_else(|| "error without message".to_string()),
            ));
        }

        let content: String = parsed
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if content.trim().is_empty() {
            return Err(GenerationFailure::EmptyResponse);
        }
        Ok(content)
    }
}
