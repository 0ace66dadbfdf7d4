//! Chat service integration for slide generation
//!
//! Provides the seam between the builder and a text-generation provider, with
//! an OpenAI chat-completions implementation and a mock for tests.

pub mod mock;
pub mod openai;

pub use mock::MockChatClient;
pub use openai::OpenAiChatClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one rendered prompt alongside the slide-designer instruction and
    /// return the model's text, trimmed.
    async fn generate_slides(&self, user_prompt: &str) -> Result<String>;
}
