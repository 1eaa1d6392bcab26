//! OpenAI-compatible chat completion data structures
//!
//! Only the fields the relay sends or reads are modelled; unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// Chat message in a completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// Chat completion response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// Choice in a chat completion response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in a response choice
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    /// `null` or missing content is treated as an unusable reply
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of `choices[0].message`, if present.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}
