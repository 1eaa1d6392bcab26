//! Test helper utilities for hf-extract-relay integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use axum_test::TestServer;
use hf_extract_relay::server::{self, AppState};
use hf_extract_relay::{ExtractionService, HttpChatClient, RelayConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const TEST_API_TOKEN: &str = "hf_integration_token";
pub const TEST_MODEL_NAME: &str = "test-org/test-model";
pub const CHAT_PATH: &str = "/v1/chat/completions";

/// Chat completion URL on the mock server
pub fn chat_url(mock_server: &MockServer) -> String {
    format!("{}{}", mock_server.uri(), CHAT_PATH)
}

/// Configuration pointing at the mock server
pub fn create_test_config(mock_server: &MockServer) -> RelayConfig {
    RelayConfig {
        api_url: Some(chat_url(mock_server)),
        api_token: Some(TEST_API_TOKEN.to_string()),
        model_name: Some(TEST_MODEL_NAME.to_string()),
        ..RelayConfig::default()
    }
}

/// OpenAI-shaped chat completion body whose first choice carries `content`
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": TEST_MODEL_NAME,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 42, "completion_tokens": 17, "total_tokens": 59}
    })
}

/// Relay router served in-process with a real HTTP backend
pub fn create_test_server(config: RelayConfig) -> TestServer {
    create_test_server_with_timeout(config, Duration::from_secs(5))
}

pub fn create_test_server_with_timeout(config: RelayConfig, timeout: Duration) -> TestServer {
    let backend = Arc::new(HttpChatClient::new(timeout).expect("HTTP client should build"));
    let service = ExtractionService::new(Arc::new(config), backend);
    TestServer::new(server::router(AppState::new(service))).expect("test server should start")
}
