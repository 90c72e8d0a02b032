//! REST client for the hosted text-generation API.
//!
//! Wraps the model provider's `generateContent` endpoint with typed
//! request/response structs. One attempt per call; the caller decides what
//! a failure means.

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Default API base URL.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model when `GEMINI_MODEL` is unset.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the generation client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API base URL (overridable for tests).
    pub api_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var          | Required | Default                                     |
    /// |------------------|----------|---------------------------------------------|
    /// | `GEMINI_API_KEY` | **yes**  | --                                          |
    /// | `GEMINI_MODEL`   | no       | `gemini-2.5-flash`                          |
    /// | `GEMINI_API_URL` | no       | `https://generativelanguage.googleapis.com` |
    ///
    /// # Panics
    ///
    /// Panics if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set in the environment");
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let api_url = std::env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        Self {
            api_url,
            api_key,
            model,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// HTTP client for the generation API.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with its own connection pool.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    /// Generate text for a prompt, returning the raw model output.
    ///
    /// Sends one `POST {api_url}/v1beta/models/{model}:generateContent`
    /// request. No retry: a failed call surfaces directly to the caller.
    pub async fn generate(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AdvisorError::MalformedOutput(
                "Model returned no candidates".to_string(),
            ));
        }

        Ok(text)
    }
}
