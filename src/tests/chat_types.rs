//! Tests for chat completion wire types

use crate::chat::{ChatMessage, ChatRequest, ChatResponse};
use serde_json::json;

#[test]
fn test_request_serializes_to_chat_completion_body() {
    let request = ChatRequest {
        model: "test-model".to_string(),
        messages: vec![ChatMessage::system("be terse"), ChatMessage::user("hello")],
        max_tokens: 300,
    };

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({
            "model": "test-model",
            "messages": [
                {"role": "system", "content": "be terse"},
                {"role": "user", "content": "hello"}
            ],
            "max_tokens": 300
        })
    );
}

#[test]
fn test_response_first_content() {
    let response: ChatResponse = serde_json::from_value(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "{\"name\": \"Ann\"}"}, "finish_reason": "stop"},
            {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
    .unwrap();

    assert_eq!(response.first_content(), Some("{\"name\": \"Ann\"}"));
}

#[test]
fn test_response_without_choices_has_no_content() {
    let response: ChatResponse = serde_json::from_value(json!({"error": "boom"})).unwrap();
    assert!(response.first_content().is_none());

    let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
    assert!(response.first_content().is_none());
}

#[test]
fn test_response_with_null_content_has_no_content() {
    let response: ChatResponse = serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": null}}]
    }))
    .unwrap();
    assert!(response.first_content().is_none());
}

#[test]
fn test_response_with_malformed_choice_fails_to_decode() {
    let result = serde_json::from_value::<ChatResponse>(json!({"choices": [{"text": "legacy"}]}));
    assert!(result.is_err());
}
