//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod test_dependencies;
pub mod traits;

// Re-export generation client types
pub use chat_client::{ChatClient, GenerationError, GenerationOptions};

pub use test_dependencies::MockTextGenerator;
pub use traits::*;
