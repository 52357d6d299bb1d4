// Test dependencies - mock implementations for testing
//
// Provides a deterministic stand-in for the generation service.

use async_trait::async_trait;
use chat_client::{GenerationError, GenerationOptions};
use std::sync::{Arc, Mutex};

use super::BaseTextGenerator;

// =============================================================================
// Mock Text Generator
// =============================================================================

/// Replays queued replies in order and records every prompt it receives.
///
/// With an empty queue it answers with the configured persistent error, or
/// with an echo of the prompt when none is set.
#[derive(Clone, Default)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<Vec<Result<String, GenerationError>>>>,
    persistent_error: Option<GenerationError>,
    calls: Arc<Mutex<Vec<String>>>,
    options_seen: Arc<Mutex<Vec<GenerationOptions>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator whose every call fails with `error`
    pub fn failing(error: GenerationError) -> Self {
        Self {
            persistent_error: Some(error),
            ..Self::default()
        }
    }

    /// Add a reply to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a failure to the queue
    pub fn with_error(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Get all prompts that were sent
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the options of the last call
    pub fn last_options(&self) -> Option<GenerationOptions> {
        self.options_seen.lock().unwrap().last().cloned()
    }

    /// Get the number of times the generator was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseTextGenerator for MockTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GenerationError> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());
        self.options_seen.lock().unwrap().push(options.clone());

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            return responses.remove(0);
        }

        match &self.persistent_error {
            Some(error) => Err(error.clone()),
            None => Ok(prompt.trim().to_string()),
        }
    }
}
