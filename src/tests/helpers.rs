//! Test helper utilities shared across unit test modules
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

#![allow(dead_code)]

use crate::chat::{ChatChoice, ChatResponse, ChatResponseMessage, MockChatBackend};
use crate::config::RelayConfig;
use crate::service::ExtractionService;
use std::sync::Arc;

pub const TEST_API_URL: &str = "https://router.example.test/v1/chat/completions";
pub const TEST_API_TOKEN: &str = "hf_test_token";
pub const TEST_MODEL_NAME: &str = "meta-llama/Llama-3.1-8B-Instruct";

/// Fully populated configuration
pub fn create_test_config() -> RelayConfig {
    RelayConfig {
        api_url: Some(TEST_API_URL.to_string()),
        api_token: Some(TEST_API_TOKEN.to_string()),
        model_name: Some(TEST_MODEL_NAME.to_string()),
        ..RelayConfig::default()
    }
}

/// Chat response with a single choice carrying `content`
pub fn chat_response_with_content(content: &str) -> ChatResponse {
    ChatResponse {
        choices: vec![ChatChoice {
            message: ChatResponseMessage {
                role: Some("assistant".to_string()),
                content: Some(content.to_string()),
            },
            finish_reason: Some("stop".to_string()),
        }],
    }
}

/// Service wired to a mock backend
pub fn create_service(config: RelayConfig, backend: MockChatBackend) -> ExtractionService {
    ExtractionService::new(Arc::new(config), Arc::new(backend))
}
