//! REST client for OpenAI-compatible chat completion services.
//!
//! Defaults to the DeepSeek API but works against any service that speaks
//! `POST {base_url}/v1/chat/completions` with bearer authentication.
//!
//! # Example
//!
//! ```rust,ignore
//! use chat_client::{ChatClient, GenerationOptions};
//!
//! let client = ChatClient::from_env()?;
//!
//! let text = client
//!     .generate_text("Summarize: red | large | red", &GenerationOptions::for_refinement())
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GenerationError, Result};
pub use types::*;

use std::time::Duration;

use reqwest::{header, Client};
use tracing::{debug, info, warn};

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Chat completion client.
#[derive(Clone)]
pub struct ChatClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from `DEEPSEEK_API_KEY` (and optional `DEEPSEEK_BASE_URL`).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::Config("DEEPSEEK_API_KEY not set".into()))?;

        let client = Self::new(api_key);
        Ok(match std::env::var("DEEPSEEK_BASE_URL") {
            Ok(url) => client.with_base_url(url),
            Err(_) => client,
        })
    }

    /// Set a custom base URL (proxies, self-hosted gateways, test stubs).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Bound every request by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Chat completion.
    ///
    /// Sends the request once and returns the first choice's content as-is.
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.completions_url())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat completion request failed");
                GenerationError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Chat completion API error");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let chat_response: types::ChatResponseRaw =
            serde_json::from_str(&body).map_err(|e| GenerationError::Parse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.unwrap_or_default())
            .ok_or(GenerationError::EmptyChoices)?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: chat_response.usage,
        })
    }

    /// Generate text for a single prompt.
    ///
    /// Returns the first choice's content trimmed of surrounding whitespace.
    pub async fn generate_text(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        info!(model = %options.model, prompt_length = prompt.len(), "Calling generation service");

        let request = ChatRequest::from_prompt(prompt, options);
        let response = self.chat_completion(&request).await?;

        info!(
            model = %options.model,
            response_length = response.content.len(),
            "Generation service call succeeded"
        );

        Ok(response.content.trim().to_string())
    }

    /// Generate text for several prompts, one call at a time.
    ///
    /// A failed prompt leaves `None` in its slot; the rest of the batch still runs.
    pub async fn batch_generate(
        &self,
        prompts: &[&str],
        options: &GenerationOptions,
    ) -> Vec<Option<String>> {
        let mut results = Vec::with_capacity(prompts.len());

        for (i, prompt) in prompts.iter().enumerate() {
            info!(index = i + 1, total = prompts.len(), "Processing prompt");
            match self.generate_text(prompt, options).await {
                Ok(text) => results.push(Some(text)),
                Err(e) => {
                    warn!(index = i + 1, error = %e, "Prompt failed");
                    results.push(None);
                }
            }
        }

        results
    }
}
