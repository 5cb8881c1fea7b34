//! LLM Client: the single point of entry for all Claude API calls in the reviewer.
//!
//! ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
//! All LLM interactions MUST go through this module.
//!
//! One call per review: no retry, no backoff, no client-side timeout.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{AnalysisSettings, Config, DEFAULT_API_URL};

pub mod prompts;

const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

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

/// Request body for the Messages API.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AnthropicMessage<'a> {
    pub role: &'a str,
    pub content: Vec<RequestBlock<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBlock<'a> {
    Document { source: DocumentSource<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
pub struct DocumentSource<'a> {
    #[serde(rename = "type")]
    pub source_type: &'a str,
    pub media_type: &'a str,
    pub data: &'a str,
}

impl<'a> AnalysisRequest<'a> {
    /// Builds the single-message request: the document block first, then the instruction.
    pub fn new(settings: &'a AnalysisSettings, document_base64: &'a str) -> Self {
        Self {
            model: &settings.model,
            max_tokens: settings.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user",
                content: vec![
                    RequestBlock::Document {
                        source: DocumentSource {
                            source_type: "base64",
                            media_type: PDF_MEDIA_TYPE,
                            data: document_base64,
                        },
                    },
                    RequestBlock::Text {
                        text: &settings.instruction,
                    },
                ],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Text of the first content element. Later blocks are ignored.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Anything that can review a base64-encoded PDF.
///
/// Carried in `AppState` as `Arc<dyn DocumentReviewer>` so handlers can be
/// exercised against a stub.
#[async_trait]
pub trait DocumentReviewer: Send + Sync {
    /// Sends the document for review and returns the full response object.
    async fn review(&self, document_base64: &str) -> Result<LlmResponse, LlmError>;

    /// Reviews the document and returns the feedback text.
    async fn analyze(&self, document_base64: &str) -> Result<String, LlmError> {
        let response = self.review(document_base64).await?;
        response
            .first_text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

/// The Anthropic Messages API client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    settings: AnalysisSettings,
}

impl LlmClient {
    pub fn new(api_key: String, settings: AnalysisSettings) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            settings,
        })
    }

    /// Builds the client from the startup configuration: credential, endpoint and call settings.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Ok(Self::new(config.anthropic_api_key.clone(), config.analysis.clone())?
            .with_base_url(config.anthropic_api_url.as_str()))
    }

    /// Points the client at a different Messages endpoint.
    pub fn with_base_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }
}

#[async_trait]
impl DocumentReviewer for LlmClient {
    /// Makes exactly one call to the Claude API. Failures are returned as-is.
    async fn review(&self, document_base64: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnalysisRequest::new(&self.settings, document_base64);

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}", status);
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(llm_response)
    }
}
