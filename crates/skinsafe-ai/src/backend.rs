//! Completion backend seam and the Groq HTTP implementation

use crate::config::AiConfig;
use crate::prompt::{ChatRequest, CompletionEnvelope};
use async_trait::async_trait;
use skinsafe_core::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Seam between the classifier and the completion service.
///
/// Implementations return the completion message content (the inner JSON
/// string) or an error; the classifier turns every error into its fallback
/// result, so no error crosses the public boundary.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run one completion request and return its message content
    async fn complete(&self, request: &ChatRequest) -> Result<String>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// OpenAI-compatible HTTP backend (Groq by default)
pub struct GroqBackend {
    client: reqwest::Client,
    config: AiConfig,
}

impl GroqBackend {
    /// Create a backend from configuration.
    ///
    /// The request timeout lives here, on the transport layer.
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::backend(format!("failed to build http client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CompletionBackend for GroqBackend {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        debug!(model = %request.model, "sending completion request");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::backend(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::backend(format!("completion API returned {status}")));
        }

        let envelope: CompletionEnvelope = response
            .json()
            .await
            .map_err(|e| Error::backend(format!("unreadable response body: {e}")))?;

        if let Some(api_error) = &envelope.error {
            return Err(Error::backend(format!("API error: {}", api_error.message)));
        }

        envelope
            .content()
            .map(str::to_string)
            .ok_or_else(|| Error::backend("empty completion"))
    }

    fn name(&self) -> &str {
        "groq"
    }
}
