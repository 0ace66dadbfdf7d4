use super::client::OpenAiHttpClient;
use super::types::{ChatCompletionRequest, ChatMessage};
use crate::ai::ChatService;
use crate::models::Config;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Response-length budget for one deck.
pub const MAX_COMPLETION_TOKENS: u32 = 500;
pub const TEMPERATURE: f64 = 0.4;

pub struct OpenAiChatClient {
    http: OpenAiHttpClient,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            http: OpenAiHttpClient::new(api_key, base_url, timeout)?,
            model,
        })
    }

    /// Build a client from config, or `None` when no API key was supplied.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        config
            .openai_api_key
            .as_ref()
            .map(|api_key| {
                Self::new(
                    api_key.clone(),
                    config.openai_model.clone(),
                    config.openai_base_url.clone(),
                    config.request_timeout,
                )
            })
            .transpose()
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatService for OpenAiChatClient {
    async fn generate_slides(&self, user_prompt: &str) -> Result<String> {
        tracing::debug!(
            "Sending slide generation request to OpenAI (model: {}, {} prompt chars)",
            self.model,
            user_prompt.len()
        );

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts::SLIDES_SYSTEM.trim()),
                ChatMessage::user(user_prompt),
            ],
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self.http.chat_completion(&request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Request("No response from OpenAI chat API".to_string()))?;

        let text = choice.message.content.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            tracing::warn!(
                "OpenAI returned an empty completion (finish_reason: {:?})",
                choice.finish_reason
            );
        }

        Ok(text)
    }
}
