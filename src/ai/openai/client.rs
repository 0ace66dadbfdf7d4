use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub struct OpenAiHttpClient {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(setup_error)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST one JSON request and decode the JSON reply, sorting failures into
    /// quota, credential, connectivity and generic request errors.
    pub async fn post<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to OpenAI: {}", e);
                classify_send_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error (status {}): {}", status, error_text);
            return Err(classify_status(status, &error_text));
        }

        let body = response.text().await.map_err(classify_send_error)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}\nBody: {}", e, body);
            Error::Request(format!("Failed to parse OpenAI response: {}", e))
        })
    }

    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.post(CHAT_COMPLETIONS_PATH, request).await
    }
}

/// The HTTP client could not be built locally; nothing was sent.
fn setup_error(error: reqwest::Error) -> Error {
    Error::Config(format!("Failed to build HTTP client: {}", error))
}

fn classify_send_error(error: reqwest::Error) -> Error {
    if error.is_connect() || error.is_timeout() {
        Error::Network(error)
    } else {
        Error::Http(error)
    }
}

fn classify_status(status: StatusCode, body: &str) -> Error {
    match status {
        StatusCode::TOO_MANY_REQUESTS => Error::QuotaExceeded,
        StatusCode::UNAUTHORIZED => Error::InvalidApiKey,
        _ => Error::Request(format!("OpenAI API error (status {}): {}", status, body)),
    }
}
