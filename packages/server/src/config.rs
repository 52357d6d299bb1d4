use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use chat_client::GenerationOptions;
use dotenvy::dotenv;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub deepseek_api_key: String,
    pub deepseek_base_url: String,
    pub refine_model: String,
    pub refine_temperature: f32,
    pub refine_max_tokens: u32,
    pub generation_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            deepseek_api_key: env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .context("DEEPSEEK_API_KEY must be set")?,
            deepseek_base_url: env::var("DEEPSEEK_BASE_URL")
                .unwrap_or_else(|_| chat_client::DEFAULT_BASE_URL.to_string()),
            refine_model: env::var("REFINE_MODEL")
                .unwrap_or_else(|_| chat_client::DEFAULT_MODEL.to_string()),
            refine_temperature: env::var("REFINE_TEMPERATURE")
                .unwrap_or_else(|_| "0.3".to_string())
                .parse()
                .context("REFINE_TEMPERATURE must be a number")?,
            refine_max_tokens: env::var("REFINE_MAX_TOKENS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("REFINE_MAX_TOKENS must be a positive integer")?,
            generation_timeout: Duration::from_secs(
                env::var("GENERATION_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .context("GENERATION_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }

    /// Generation options used by the refinement pipeline
    pub fn refine_options(&self) -> GenerationOptions {
        GenerationOptions::default()
            .model(self.refine_model.clone())
            .temperature(self.refine_temperature)
            .max_tokens(self.refine_max_tokens)
    }
}
