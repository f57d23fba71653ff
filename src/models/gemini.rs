//! Gemini API data models
//!
//! Request and response shapes for `models` and `models/{id}:generateContent`.

use crate::core::constants::{MAX_OUTPUT_TOKENS, TEMPERATURE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// generateContent request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    pub generation_config: GeminiGenerationConfig,
}

impl GeminiRequest {
    /// Single-part request with the probe limits
    pub fn probe(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: Some(vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }]),
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

/// generateContent response
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Option<Vec<GeminiCandidate>>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate
    ///
    /// `Ok(None)` when there are no candidates, `Err` when the first
    /// candidate has no text part.
    pub fn first_text(&self) -> Result<Option<&str>, String> {
        let Some([first, ..]) = self.candidates.as_deref() else {
            return Ok(None);
        };

        first
            .content
            .as_ref()
            .and_then(|c| c.parts.as_deref())
            .and_then(|parts| parts.first())
            .and_then(|p| p.text.as_deref())
            .map(Some)
            .ok_or_else(|| "candidate has no content.parts[0].text".to_string())
    }
}

/// Entry of the `models` listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiModelInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeminiModelInfo {
    /// Model name without the `models/` resource prefix
    pub fn short_name(&self) -> String {
        self.name
            .as_deref()
            .unwrap_or("Unknown")
            .replace("models/", "")
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("No display name")
    }
}

/// `models` listing response
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiModelList {
    #[serde(default)]
    pub models: Option<Vec<GeminiModelInfo>>,
}
