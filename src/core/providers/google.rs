//! Google Gemini provider implementation

use crate::core::constants::{CHAT_TIMEOUT, LIST_TIMEOUT, header, prompt};
use crate::core::provider::{Provider, ProviderError, execute, parse_body};
use crate::models::gemini::{GeminiModelInfo, GeminiModelList, GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Gemini API provider authenticated with an AI Studio key
pub struct GoogleProvider {
    client: Client,
    api_key: String,
    base_url: String,
    list_timeout: Duration,
    chat_timeout: Duration,
}

impl GoogleProvider {
    /// Create a new Google provider
    ///
    /// # Arguments
    ///
    /// * `client` - Shared HTTP client
    /// * `api_key` - Value for the `x-goog-api-key` header
    /// * `base_url` - API root, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            list_timeout: LIST_TIMEOUT,
            chat_timeout: CHAT_TIMEOUT,
        }
    }

    /// Override both timeouts
    pub fn with_timeouts(mut self, list_timeout: Duration, chat_timeout: Duration) -> Self {
        self.list_timeout = list_timeout;
        self.chat_timeout = chat_timeout;
        self
    }

    /// List the models visible to this key
    pub async fn list_models(&self) -> Result<Vec<GeminiModelInfo>, ProviderError> {
        let url = format!("{}/models", self.base_url);
        debug!("Listing Google models: GET {}", url);

        let request = self
            .client
            .get(&url)
            .header(header::GOOGLE_API_KEY, &self.api_key)
            .header("Content-Type", "application/json");

        let body = execute(request, self.list_timeout).await?;
        let list: GeminiModelList = parse_body(&body)?;

        Ok(list.models.unwrap_or_default())
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    async fn send_test_message(&self, model: &str) -> Result<Option<String>, ProviderError> {
        let url = self.generate_url(model);
        debug!("Probing Google model {}: POST {}", model, url);

        let request = self
            .client
            .post(&url)
            .header(header::GOOGLE_API_KEY, &self.api_key)
            .json(&GeminiRequest::probe(prompt::CONNECTION_TEST));

        let body = execute(request, self.chat_timeout).await?;
        let response: GeminiResponse = parse_body(&body)?;

        response
            .first_text()
            .map(|text| text.map(str::to_string))
            .map_err(ProviderError::Parse)
    }

    fn provider_name(&self) -> &str {
        "Google"
    }
}
