//! Caller-facing operations shared by every front end.

use crate::ai::{ChatService, OpenAiChatClient};
use crate::models::{Config, PresentationRequest};
use crate::prompts::{self, RenderMode};
use crate::{quality, Error, Result};
use tracing::{error, info};

/// Entry point for front ends: advisory check, guided prompt, and generation.
///
/// The chat service is fixed at construction. Without one, generation stays
/// disabled and reports the missing key on every call.
pub struct SlideBuilder {
    chat: Option<Box<dyn ChatService>>,
}

impl SlideBuilder {
    /// Build from an injected service, or `None` for a builder that cannot
    /// generate.
    pub fn with_service(chat: Option<Box<dyn ChatService>>) -> Self {
        Self { chat }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let chat = match OpenAiChatClient::from_config(config)? {
            Some(client) => {
                info!("Chat provider: OpenAI (model: {})", client.model());
                Some(Box::new(client) as Box<dyn ChatService>)
            }
            None => {
                info!("OPENAI_API_KEY not set; slide generation disabled");
                None
            }
        };

        Ok(Self::with_service(chat))
    }

    /// Construct from environment configuration (`Config::from_env`).
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }

    pub fn can_generate(&self) -> bool {
        self.chat.is_some()
    }

    pub fn check(&self, request: &PresentationRequest) -> String {
        quality::check(request)
    }

    /// Guided-mode prompt for the user to paste into a model themselves.
    pub fn render_prompt(&self, request: &PresentationRequest) -> String {
        prompts::render_prompt(request, RenderMode::Guided)
    }

    /// Generated slide text, or the user-facing message for whatever stopped
    /// it.
    pub async fn generate(&self, request: &PresentationRequest) -> String {
        self.try_generate(request)
            .await
            .unwrap_or_else(|e| e.to_string())
    }

    pub async fn try_generate(&self, request: &PresentationRequest) -> Result<String> {
        let chat = self.chat.as_deref().ok_or(Error::MissingApiKey)?;

        if request.topic.trim().is_empty() {
            return Err(Error::MissingTopic);
        }

        let user_prompt = prompts::render_prompt(request, RenderMode::Generate);

        match chat.generate_slides(&user_prompt).await {
            Ok(slides) => {
                info!(
                    "Generated slides for '{}' ({} chars)",
                    request.topic.trim(),
                    slides.len()
                );
                Ok(slides)
            }
            Err(e) => {
                error!("Slide generation failed ({:?}): {}", e.category(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockChatClient;
    use crate::error::ErrorCategory;

    fn ai_in_business() -> PresentationRequest {
        PresentationRequest {
            topic: "AI in Business".to_string(),
            slide_count: 8,
            duration_min: 10,
            ..PresentationRequest::default()
        }
    }

    fn builder_with(mock: MockChatClient) -> (SlideBuilder, MockChatClient) {
        let observer = mock.observer();
        (SlideBuilder::with_service(Some(Box::new(mock))), observer)
    }

    #[tokio::test]
    async fn test_generate_without_key_reports_missing_key() {
        let builder = SlideBuilder::with_service(None);

        assert!(!builder.can_generate());
        assert_eq!(
            builder.generate(&ai_in_business()).await,
            "Missing OPENAI_API_KEY in .env"
        );
    }

    #[tokio::test]
    async fn test_missing_key_takes_precedence_over_missing_topic() {
        let builder = SlideBuilder::with_service(None);

        let err = builder
            .try_generate(&PresentationRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[tokio::test]
    async fn test_blank_topic_skips_the_call() {
        let (builder, observer) = builder_with(MockChatClient::new());

        let request = PresentationRequest {
            topic: "   ".to_string(),
            audience: "engineers".to_string(),
            user_content: "draft".to_string(),
            ..PresentationRequest::default()
        };

        assert_eq!(builder.generate(&request).await, "Please enter a topic.");
        assert_eq!(observer.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_sends_generate_mode_prompt() {
        let (builder, observer) = builder_with(
            MockChatClient::new().with_slides_response("Deck Title: AI in Business".to_string()),
        );

        let request = ai_in_business();
        let slides = builder.generate(&request).await;

        assert_eq!(slides, "Deck Title: AI in Business");
        assert_eq!(
            observer.received_prompts(),
            vec![prompts::render_prompt(&request, RenderMode::Generate)]
        );
    }

    #[tokio::test]
    async fn test_generate_surfaces_classified_errors() {
        let (builder, observer) = builder_with(
            MockChatClient::new()
                .with_error(Error::QuotaExceeded)
                .with_error(Error::InvalidApiKey)
                .with_error(Error::Request("status 400: bad".to_string())),
        );
        let request = ai_in_business();

        assert_eq!(
            builder.generate(&request).await,
            "API quota exceeded (429). Check billing/quota."
        );
        assert_eq!(
            builder.generate(&request).await,
            "Invalid API key. Check OPENAI_API_KEY."
        );
        assert_eq!(
            builder.generate(&request).await,
            "Request error: status 400: bad"
        );
        // One attempt per call, no retries.
        assert_eq!(observer.get_call_count(), 3);
    }

    #[test]
    fn test_render_prompt_is_guided_mode() {
        let builder = SlideBuilder::with_service(None);
        let request = ai_in_business();

        assert_eq!(
            builder.render_prompt(&request),
            prompts::render_prompt(&request, RenderMode::Guided)
        );
    }

    #[test]
    fn test_render_prompt_never_calls_the_service() {
        let (builder, observer) = builder_with(MockChatClient::new());

        builder.render_prompt(&ai_in_business());
        assert_eq!(observer.get_call_count(), 0);
    }

    #[test]
    fn test_check_delegates_to_quality_report() {
        let builder = SlideBuilder::with_service(None);
        let report = builder.check(&ai_in_business());

        assert!(report.starts_with("Prompt quality check:"));
        assert!(report.contains("Audience is missing"));
        assert!(!report.contains("Topic is missing"));
    }

    #[test]
    fn test_from_config_without_key_is_disabled() {
        let config = Config::from_lookup(|_| None).unwrap();
        let builder = SlideBuilder::from_config(&config).unwrap();
        assert!(!builder.can_generate());
    }
}
