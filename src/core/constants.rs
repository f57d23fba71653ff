//! Constants for endpoints, headers, and the fixed probe payloads
//!
//! Everything the tester sends is fixed at compile time: the prompts, the
//! model identifiers, the generation limits, and the per-call timeouts.

use std::time::Duration;

/// Environment variable names
pub mod env {
    /// Google AI Studio API key
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

    /// Google API base URL
    pub const GOOGLE_API_URL: &str = "GOOGLE_API_URL";

    /// Anthropic API key
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

    /// Anthropic API base URL
    pub const ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";

    /// Base URL of a running anyclaude proxy
    pub const ANYCLAUDE_PROXY_URL: &str = "ANYCLAUDE_PROXY_URL";

    /// Log level for the tracing subscriber
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Default base URLs
pub mod url {
    /// Public Gemini API endpoint
    pub const GOOGLE_DEFAULT: &str = "https://generativelanguage.googleapis.com/v1beta";

    /// Public Anthropic API endpoint
    pub const ANTHROPIC_DEFAULT: &str = "https://api.anthropic.com";
}

/// HTTP header names and fixed values
pub mod header {
    /// Google API key header
    pub const GOOGLE_API_KEY: &str = "x-goog-api-key";

    /// Anthropic API key header
    pub const ANTHROPIC_API_KEY: &str = "x-api-key";

    /// Anthropic API version header
    pub const ANTHROPIC_VERSION: &str = "anthropic-version";

    /// Anthropic API version sent with every messages request
    pub const ANTHROPIC_VERSION_VALUE: &str = "2023-06-01";

    /// The proxy ignores the key, but the Anthropic shape requires one
    pub const PROXY_PLACEHOLDER_KEY: &str = "dummy-key";
}

/// Prompts sent to each model
pub mod prompt {
    /// Direct provider prompt
    pub const CONNECTION_TEST: &str =
        "Hello! Just testing the connection. Reply with 'OK' if you can see this.";

    /// Proxy prompt
    pub const PROXY_TEST: &str = "Hello! Testing proxy connection. Reply with 'OK'.";
}

/// Model identifiers probed in each section
pub mod models {
    pub const GOOGLE: [&str; 4] = [
        "gemini-2.0-flash-exp",
        "gemini-1.5-pro",
        "gemini-1.5-flash",
        "gemini-1.0-pro",
    ];

    pub const ANTHROPIC: [&str; 4] = [
        "claude-3-5-sonnet-20241022",
        "claude-3-5-haiku-20241022",
        "claude-3-opus-20240229",
        "claude-3-sonnet-20240229",
    ];

    /// Routed through the proxy when a Google key is present
    pub const PROXY_GOOGLE: &str = "google/gemini-2.0-flash-exp";

    /// Routed through the proxy when an Anthropic key is present
    pub const PROXY_ANTHROPIC: &str = "anthropic/claude-3-5-sonnet-20241022";
}

/// Message role constants
pub mod role {
    /// User role identifier
    pub const USER: &str = "user";
}

/// Output token cap for every probe
pub const MAX_OUTPUT_TOKENS: u32 = 50;

/// Sampling temperature for every probe
pub const TEMPERATURE: f32 = 0.1;

/// Number of listed models shown in the report
pub const MODEL_LIST_LIMIT: usize = 5;

/// Characters of an error body shown for a failed chat probe
pub const ERROR_BODY_EXCERPT: usize = 100;

/// Timeout for the model listing call
pub const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for chat and proxy calls
pub const CHAT_TIMEOUT: Duration = Duration::from_secs(30);
