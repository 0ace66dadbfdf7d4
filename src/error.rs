//! Error handling and custom error types
//!
//! Every variant's `Display` text is the message shown to the person using the
//! builder, so callers can surface `error.to_string()` directly.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing OPENAI_API_KEY in .env")]
    MissingApiKey,

    #[error("Please enter a topic.")]
    MissingTopic,

    #[error("API quota exceeded (429). Check billing/quota.")]
    QuotaExceeded,

    #[error("Invalid API key. Check OPENAI_API_KEY.")]
    InvalidApiKey,

    #[error("Network error. Try again.")]
    Network(#[source] reqwest::Error),

    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse grouping of [`Error`] by what the caller has to do about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Fix the environment and restart.
    Configuration,
    /// Fill in the missing input and resubmit.
    Input,
    /// Wait for quota to recover.
    RemoteQuota,
    /// Replace the API key.
    RemoteAuth,
    /// Try again once the network is back.
    RemoteConnectivity,
    /// The provider rejected the request.
    RemoteRequest,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingApiKey | Error::Config(_) => ErrorCategory::Configuration,
            Error::MissingTopic => ErrorCategory::Input,
            Error::QuotaExceeded => ErrorCategory::RemoteQuota,
            Error::InvalidApiKey => ErrorCategory::RemoteAuth,
            Error::Network(_) => ErrorCategory::RemoteConnectivity,
            Error::Http(_) | Error::Request(_) => ErrorCategory::RemoteRequest,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
