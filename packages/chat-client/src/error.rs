//! Error types for the chat completion client.

use thiserror::Error;

/// Result type for chat client operations.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Generation failures.
///
/// Each variant is a distinct failure mode of a chat completion call so
/// callers can log them separately.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// Configuration error (missing API key, unusable HTTP client settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-2xx status
    #[error("HTTP {status} from generation service: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Response parsed but carried no choices
    #[error("Generation service returned no choices")]
    EmptyChoices,
}

impl GenerationError {
    /// Short, stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Parse(_) => "parse",
            Self::EmptyChoices => "empty_choices",
        }
    }
}
