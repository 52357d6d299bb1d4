// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for and how to read the reply lives in the domain layer.
//
// Naming convention: Base* for trait names (e.g., BaseTextGenerator)

use async_trait::async_trait;
use chat_client::{GenerationError, GenerationOptions};

// =============================================================================
// Text Generation Trait (Infrastructure - Generic LLM capability)
// =============================================================================

#[async_trait]
pub trait BaseTextGenerator: Send + Sync {
    /// Send one prompt and return the generated text, trimmed.
    ///
    /// Implementations make a single attempt; retry policy is the caller's.
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError>;
}
