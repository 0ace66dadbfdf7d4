use super::ChatService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// In-memory [`ChatService`] that records prompts and replays canned replies.
///
/// Queued errors are returned first, one per call; after that the text
/// responses cycle.
pub struct MockChatClient {
    responses: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<VecDeque<Error>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_slides_response(self, response: String) -> Self {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(response);
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(error);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Every user prompt received so far, oldest first.
    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Handle that keeps observing calls after the client is boxed away.
    pub fn observer(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            errors: Arc::clone(&self.errors),
            prompts: Arc::clone(&self.prompts),
        }
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn generate_slides(&self, user_prompt: &str) -> Result<String> {
        let count = {
            let mut prompts = self.prompts.lock().unwrap_or_else(|e| e.into_inner());
            prompts.push(user_prompt.to_string());
            prompts.len()
        };

        if let Some(error) = self.errors.lock().unwrap_or_else(|e| e.into_inner()).pop_front() {
            return Err(error);
        }

        let responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        if responses.is_empty() {
            // Default mock response
            let first_line = user_prompt.lines().next().unwrap_or_default();
            Ok(format!("Deck Title: {}\nSlides:", first_line))
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat_client_default_response() {
        let client = MockChatClient::new();

        let text = client.generate_slides("Topic: Rust\nAudience: devs").await.unwrap();
        assert_eq!(text, "Deck Title: Topic: Rust\nSlides:");
    }

    #[tokio::test]
    async fn test_mock_chat_client_custom_responses() {
        let client = MockChatClient::new()
            .with_slides_response("Deck 1".to_string())
            .with_slides_response("Deck 2".to_string());

        assert_eq!(client.generate_slides("a").await.unwrap(), "Deck 1");
        assert_eq!(client.generate_slides("b").await.unwrap(), "Deck 2");

        // Should cycle back
        assert_eq!(client.generate_slides("c").await.unwrap(), "Deck 1");
    }

    #[tokio::test]
    async fn test_mock_chat_client_errors_come_first() {
        let client = MockChatClient::new()
            .with_slides_response("Deck".to_string())
            .with_error(Error::QuotaExceeded);

        let err = client.generate_slides("a").await.unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded));
        assert_eq!(client.generate_slides("b").await.unwrap(), "Deck");
    }

    #[tokio::test]
    async fn test_mock_chat_client_records_prompts() {
        let client = MockChatClient::new();
        let observer = client.observer();

        assert_eq!(observer.get_call_count(), 0);

        client.generate_slides("first").await.unwrap();
        client.generate_slides("second").await.unwrap();

        assert_eq!(observer.get_call_count(), 2);
        assert_eq!(observer.received_prompts(), vec!["first", "second"]);
    }
}
