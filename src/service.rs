//! Extraction request handler
//!
//! Validates input, checks endpoint configuration, calls the chat completion
//! API once and repairs the reply into JSON. Holds no mutable state; one
//! instance is shared by every request.

use crate::chat::{ChatBackend, ChatMessage, ChatRequest, UPSTREAM_SHAPE_MESSAGE};
use crate::config::{EndpointSettings, RelayConfig};
use crate::error::{RelayError, RelayResult};
use crate::logging::{log_debug, log_info};
use crate::models::ExtractedRecord;
use crate::repair::ResponseRepair;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Instruction sent as the system message of every request
pub const SYSTEM_PROMPT: &str = concat!(
    "You are a helpful and accurate data extraction assistant. ",
    "Your task is to parse the user's input text and extract specific data fields. ",
    "You MUST respond ONLY with a valid JSON object matching the following structure: ",
    r#"{"name": "...", "email": null, "age": null, "gender": "..."} "#,
    "If a value is missing, use null. DO NOT include any text, markdown, or explanation outside of the JSON object."
);

pub const MISSING_TEXT_MESSAGE: &str = r#"Missing "text" field in request body."#;

/// Request handler for `POST /process`
pub struct ExtractionService {
    config: Arc<RelayConfig>,
    backend: Arc<dyn ChatBackend>,
}

impl ExtractionService {
    pub fn new(config: Arc<RelayConfig>, backend: Arc<dyn ChatBackend>) -> Self {
        Self { config, backend }
    }

    /// Build the outbound chat payload for `text`
    pub fn build_chat_request(&self, endpoint: &EndpointSettings<'_>, text: &str) -> ChatRequest {
        ChatRequest {
            model: endpoint.model_name.to_string(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(text)],
            max_tokens: self.config.max_tokens,
        }
    }

    /// Extract a record from `text`.
    ///
    /// # Errors
    ///
    /// - [`RelayError::ValidationError`] if `text` is absent or empty
    /// - [`RelayError::ConfigurationError`] if endpoint settings are incomplete
    /// - [`RelayError::TransportError`] if the outbound call fails
    /// - [`RelayError::UpstreamShapeError`] if the reply has no message content
    /// - [`RelayError::RepairParseError`] if the content cannot be made into JSON
    pub async fn process(&self, text: Option<&str>) -> RelayResult<Value> {
        // Input before configuration: an empty body is a 400 even when unconfigured
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(RelayError::validation_error(MISSING_TEXT_MESSAGE)),
        };

        let endpoint = self.config.endpoint()?;
        let request = self.build_chat_request(&endpoint, text);

        let start_time = Instant::now();
        let response = self
            .backend
            .complete(endpoint.api_url, endpoint.api_token, &request)
            .await?;

        let raw_text = response
            .first_content()
            .map(str::trim)
            .ok_or_else(|| RelayError::upstream_shape_error(UPSTREAM_SHAPE_MESSAGE))?;

        let extracted = ResponseRepair::parse_model_output(raw_text)?;

        log_info!(
            model = %request.model,
            input_length = text.len(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Extraction completed"
        );
        log_debug!(
            matches_record_shape = ExtractedRecord::matches_shape(&extracted),
            "Extraction result shape"
        );

        Ok(extracted)
    }
}
