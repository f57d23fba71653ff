//! Anthropic Messages API provider
//!
//! Also drives the anyclaude proxy, which accepts the same request shape and
//! routes on the `provider/model` prefix of the model string.

use crate::core::constants::{CHAT_TIMEOUT, header, prompt};
use crate::core::provider::{Provider, ProviderError, execute, parse_body};
use crate::models::claude::{ClaudeMessagesRequest, ClaudeMessagesResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for any endpoint speaking the Anthropic Messages API
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    prompt: &'static str,
    timeout: Duration,
    name: &'static str,
}

impl AnthropicProvider {
    /// Provider for the Anthropic API itself
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            prompt: prompt::CONNECTION_TEST,
            timeout: CHAT_TIMEOUT,
            name: "Anthropic",
        }
    }

    /// Provider for an anyclaude proxy
    ///
    /// The proxy holds the real credentials, so a placeholder key is sent.
    pub fn proxy(client: Client, proxy_url: String) -> Self {
        Self {
            client,
            api_key: header::PROXY_PLACEHOLDER_KEY.to_string(),
            base_url: proxy_url.trim_end_matches('/').to_string(),
            prompt: prompt::PROXY_TEST,
            timeout: CHAT_TIMEOUT,
            name: "anyclaude proxy",
        }
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    async fn send_test_message(&self, model: &str) -> Result<Option<String>, ProviderError> {
        let url = self.messages_url();
        debug!("Probing {} model {}: POST {}", self.name, model, url);

        let request = self
            .client
            .post(&url)
            .header(header::ANTHROPIC_API_KEY, &self.api_key)
            .header(header::ANTHROPIC_VERSION, header::ANTHROPIC_VERSION_VALUE)
            .json(&ClaudeMessagesRequest::probe(model, self.prompt));

        let body = execute(request, self.timeout).await?;
        let response: ClaudeMessagesResponse = parse_body(&body)?;

        response
            .first_text()
            .map(|text| text.map(str::to_string))
            .map_err(ProviderError::Parse)
    }

    fn provider_name(&self) -> &str {
        self.name
    }
}
