// Text generation backed by the chat completion client
//
// This is the infrastructure implementation of BaseTextGenerator.

use async_trait::async_trait;
use chat_client::{ChatClient, GenerationError, GenerationOptions};

use super::BaseTextGenerator;

#[async_trait]
impl BaseTextGenerator for ChatClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        self.generate_text(prompt, options).await.map_err(|e| {
            tracing::error!(
                error = %e,
                kind = e.kind(),
                model = %options.model,
                "Generation service call failed"
            );
            e
        })
    }
}
