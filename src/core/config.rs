//! Tester configuration
//!
//! Loaded once from the process environment and never mutated afterwards.
//! Empty variables count as unset, and base URLs fall back to the public
//! production endpoints.

use crate::core::constants::{env, url};

/// A base URL together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    /// URL exactly as configured
    pub value: String,

    /// True when the value came from the environment rather than the default
    pub from_env: bool,
}

impl BaseUrl {
    fn resolve(value: Option<String>, default: &str) -> Self {
        match value {
            Some(value) => Self {
                value,
                from_env: true,
            },
            None => Self {
                value: default.to_string(),
                from_env: false,
            },
        }
    }
}

/// Tester configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Google API key
    pub google_api_key: Option<String>,

    /// Google API base URL
    pub google_base_url: BaseUrl,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Anthropic API base URL
    pub anthropic_base_url: BaseUrl,

    /// anyclaude proxy URL; the proxy section is skipped when absent
    pub proxy_url: Option<String>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Config {
            google_api_key: get(env::GOOGLE_API_KEY),
            google_base_url: BaseUrl::resolve(get(env::GOOGLE_API_URL), url::GOOGLE_DEFAULT),
            anthropic_api_key: get(env::ANTHROPIC_API_KEY),
            anthropic_base_url: BaseUrl::resolve(
                get(env::ANTHROPIC_BASE_URL),
                url::ANTHROPIC_DEFAULT,
            ),
            proxy_url: get(env::ANYCLAUDE_PROXY_URL),
        }
    }
}
