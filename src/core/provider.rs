//! Provider abstraction layer for the probed APIs
//!
//! This module defines the common trait the chat probes run through, the
//! error type every HTTP failure is folded into, and the shared request
//! executor.

use crate::core::constants::models;
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Error types for provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The server answered with something other than 200 OK
    #[error("{status} - {body}")]
    Http { status: u16, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Classify a reqwest failure, keeping timeouts distinct
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(timeout)
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

/// Trait for APIs that can answer the fixed test prompt
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send the test prompt to `model`
    ///
    /// Returns `Ok(Some(text))` with the first reply text, or `Ok(None)` when
    /// the server answered 200 with no reply at all.
    async fn send_test_message(&self, model: &str) -> Result<Option<String>, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Upstream vendors the proxy can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    Google,
    Anthropic,
}

impl ProviderType {
    /// Model string that routes to this vendor through the proxy
    pub fn proxy_model(self) -> &'static str {
        match self {
            ProviderType::Google => models::PROXY_GOOGLE,
            ProviderType::Anthropic => models::PROXY_ANTHROPIC,
        }
    }
}

/// Send a request and return the body of a 200 response
///
/// Any other status becomes `ProviderError::Http` carrying the full body.
pub async fn execute(
    request: RequestBuilder,
    timeout: Duration,
) -> Result<String, ProviderError> {
    let response = request
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(e, timeout))?;

    let status = response.status();
    debug!("Response status: {} from {}", status, response.url());

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::from_reqwest(e, timeout))?;

    if status != StatusCode::OK {
        return Err(ProviderError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Deserialize a response body
pub fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ProviderError> {
    serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))
}
