//! Claude API data models
//!
//! The subset of the Anthropic Messages API the probes need. Responses are
//! deserialized leniently so an empty reply is distinguishable from a
//! malformed one.

use crate::core::constants::{MAX_OUTPUT_TOKENS, TEMPERATURE, role};
use serde::{Deserialize, Serialize};

/// Message with role and plain-text content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessage {
    pub role: String,
    pub content: String,
}

/// Claude Messages API request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaudeMessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ClaudeMessage>,
}

impl ClaudeMessagesRequest {
    /// Single-turn request with the probe limits
    pub fn probe(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![ClaudeMessage {
                role: role::USER.to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

/// Content block in a Messages API response
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeResponseBlock {
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Claude Messages API response
#[derive(Debug, Clone, Deserialize)]
pub struct ClaudeMessagesResponse {
    #[serde(default)]
    pub content: Option<Vec<ClaudeResponseBlock>>,
}

impl ClaudeMessagesResponse {
    /// Text of the first content block
    ///
    /// `Ok(None)` when there are no blocks, `Err` with a description when the
    /// first block carries no text.
    pub fn first_text(&self) -> Result<Option<&str>, String> {
        match self.content.as_deref() {
            None | Some([]) => Ok(None),
            Some([first, ..]) => first.text.as_deref().map(Some).ok_or_else(|| {
                format!(
                    "first content block ({}) has no text",
                    first.content_type.as_deref().unwrap_or("untyped")
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_probe_request_shape() {
        let request = ClaudeMessagesRequest::probe("claude-3-5-haiku-20241022", "Hi");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "claude-3-5-haiku-20241022",
                "max_tokens": 50,
                "temperature": 0.1f32,
                "messages": [{"role": "user", "content": "Hi"}]
            })
        );
    }

    #[test]
    fn test_first_text() {
        let response: ClaudeMessagesResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "content": [{"type": "text", "text": "OK"}, {"type": "text", "text": "more"}]
        }))
        .unwrap();
        assert_eq!(response.first_text(), Ok(Some("OK")));
    }

    #[test]
    fn test_first_text_empty_or_missing() {
        let empty: ClaudeMessagesResponse =
            serde_json::from_value(json!({"content": []})).unwrap();
        assert_eq!(empty.first_text(), Ok(None));

        let absent: ClaudeMessagesResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(absent.first_text(), Ok(None));

        let null: ClaudeMessagesResponse =
            serde_json::from_value(json!({"content": null})).unwrap();
        assert_eq!(null.first_text(), Ok(None));
    }

    #[test]
    fn test_first_text_non_text_block() {
        let response: ClaudeMessagesResponse = serde_json::from_value(json!({
            "content": [{"type": "tool_use", "id": "toolu_1", "name": "x", "input": {}}]
        }))
        .unwrap();
        let err = response.first_text().unwrap_err();
        assert!(err.contains("tool_use"));
    }
}
