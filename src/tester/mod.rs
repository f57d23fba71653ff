//! Model tester orchestration
//!
//! Runs the fixed sequence of checks: environment report, Google section,
//! Anthropic section, then the proxy section. Every section is gated only on
//! the presence of its credentials; no probe result influences later ones.

pub mod report;

use crate::core::config::{BaseUrl, Config};
use crate::core::constants::{CHAT_TIMEOUT, LIST_TIMEOUT, MODEL_LIST_LIMIT, env, models};
use crate::core::provider::{Provider, ProviderError, ProviderType};
use crate::core::providers::{AnthropicProvider, GoogleProvider};
use report::{ProbeOutcome, Reporter, key_prefix, mask_key};
use reqwest::Client;
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

/// Per-call timeouts
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub list: Duration,
    pub chat: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            list: LIST_TIMEOUT,
            chat: CHAT_TIMEOUT,
        }
    }
}

/// Sequential connectivity checker for the configured providers
pub struct ModelTester {
    config: Config,
    client: Client,
    timeouts: Timeouts,
}

impl ModelTester {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
            timeouts: Timeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Run every section and print the report
    ///
    /// Only a failing output sink can make this return an error.
    pub async fn run<W: Write>(&self, report: &mut Reporter<W>) -> io::Result<()> {
        report.line("🚀 AnyClaude Model Tester")?;
        report.line("=".repeat(50))?;

        self.check_environment(report)?;

        match &self.config.google_api_key {
            Some(key) => self.test_google_models(key, report).await?,
            None => report.line("⏭️  Skipping Google tests (no API key)")?,
        }

        match &self.config.anthropic_api_key {
            Some(key) => self.test_anthropic_models(key, report).await?,
            None => report.line("⏭️  Skipping Anthropic tests (no API key)")?,
        }

        match &self.config.proxy_url {
            Some(url) => self.test_anyclaude_proxy(url, report).await?,
            None => {
                report.blank()?;
                report.line("💡 To test anyclaude proxy:")?;
                report.line("   1. Run: PROXY_ONLY=true anyclaude")?;
                report.line("   2. Set ANYCLAUDE_PROXY_URL to the displayed URL")?;
                report.line("   3. Run this tester again")?;
            }
        }

        report.blank()?;
        report.summary()
    }

    fn check_environment<W: Write>(&self, report: &mut Reporter<W>) -> io::Result<()> {
        report.line("🔧 Environment Variables Check:")?;

        report_key(report, env::GOOGLE_API_KEY, &self.config.google_api_key)?;
        report_url(report, env::GOOGLE_API_URL, &self.config.google_base_url)?;
        report_key(report, env::ANTHROPIC_API_KEY, &self.config.anthropic_api_key)?;
        report_url(report, env::ANTHROPIC_BASE_URL, &self.config.anthropic_base_url)?;

        report.blank()
    }

    async fn test_google_models<W: Write>(
        &self,
        api_key: &str,
        report: &mut Reporter<W>,
    ) -> io::Result<()> {
        let base_url = &self.config.google_base_url.value;
        report.line(format!("🔍 Testing Google Models with base URL: {}", base_url))?;
        report.line(format!("🔑 API Key: {}", key_prefix(api_key)))?;

        let provider = GoogleProvider::new(
            self.client.clone(),
            api_key.to_string(),
            base_url.clone(),
        )
        .with_timeouts(self.timeouts.list, self.timeouts.chat);

        self.list_google_models(&provider, report).await?;

        for model in models::GOOGLE {
            probe(&provider, model, model, report).await?;
        }
        Ok(())
    }

    async fn list_google_models<W: Write>(
        &self,
        provider: &GoogleProvider,
        report: &mut Reporter<W>,
    ) -> io::Result<()> {
        match provider.list_models().await {
            Ok(listed) => {
                report.record(true);
                report.line("✅ Available Google Models:")?;
                for model in listed.iter().take(MODEL_LIST_LIMIT) {
                    report.line(format!(
                        "   • {} - {}",
                        model.short_name(),
                        model.display_name()
                    ))?;
                }
            }
            Err(ProviderError::Http { status, body }) => {
                report.record(false);
                report.line(format!("❌ Failed to list models: {} - {}", status, body))?;
            }
            Err(err) => {
                report.record(false);
                report.line(format!("❌ Error listing Google models: {}", err))?;
            }
        }
        Ok(())
    }

    async fn test_anthropic_models<W: Write>(
        &self,
        api_key: &str,
        report: &mut Reporter<W>,
    ) -> io::Result<()> {
        let base_url = &self.config.anthropic_base_url.value;
        report.blank()?;
        report.line(format!(
            "🔍 Testing Anthropic Models with base URL: {}",
            base_url
        ))?;
        report.line(format!("🔑 API Key: {}", key_prefix(api_key)))?;

        let provider = AnthropicProvider::new(
            self.client.clone(),
            api_key.to_string(),
            base_url.clone(),
        )
        .with_timeout(self.timeouts.chat);

        for model in models::ANTHROPIC {
            probe(&provider, model, model, report).await?;
        }
        Ok(())
    }

    /// Providers the proxy should be exercised for, in report order
    fn proxy_targets(&self) -> Vec<ProviderType> {
        let mut targets = Vec::new();
        if self.config.google_api_key.is_some() {
            targets.push(ProviderType::Google);
        }
        if self.config.anthropic_api_key.is_some() {
            targets.push(ProviderType::Anthropic);
        }
        targets
    }

    async fn test_anyclaude_proxy<W: Write>(
        &self,
        proxy_url: &str,
        report: &mut Reporter<W>,
    ) -> io::Result<()> {
        report.blank()?;
        report.line(format!("🔍 Testing anyclaude proxy at: {}", proxy_url))?;

        let provider = AnthropicProvider::proxy(self.client.clone(), proxy_url.to_string())
            .with_timeout(self.timeouts.chat);

        for target in self.proxy_targets() {
            let model = target.proxy_model();
            probe(&provider, &format!("Proxy {}", model), model, report).await?;
        }
        Ok(())
    }
}

/// Send one test message and print its result line
async fn probe<W: Write>(
    provider: &dyn Provider,
    label: &str,
    model: &str,
    report: &mut Reporter<W>,
) -> io::Result<()> {
    let outcome = ProbeOutcome::from_result(provider.send_test_message(model).await);
    debug!("{} {} -> {:?}", provider.provider_name(), model, outcome);
    report.outcome(label, &outcome)
}

fn report_key<W: Write>(
    report: &mut Reporter<W>,
    name: &str,
    value: &Option<String>,
) -> io::Result<()> {
    match value {
        Some(key) => report.line(format!("✅ {}: {}", name, mask_key(key))),
        None => report.line(format!("❌ {}: Not set", name)),
    }
}

fn report_url<W: Write>(report: &mut Reporter<W>, name: &str, url: &BaseUrl) -> io::Result<()> {
    if url.from_env {
        report.line(format!("✅ {}: {}", name, url.value))
    } else {
        report.line(format!("❌ {}: Not set (using default {})", name, url.value))
    }
}
