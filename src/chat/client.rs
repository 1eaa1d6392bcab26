//! HTTP client for OpenAI-compatible chat completion endpoints

use super::types::{ChatRequest, ChatResponse};
use crate::error::{RelayError, RelayResult};
use crate::logging::{log_debug, log_error};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::{Duration, Instant};

/// Detail reported when the reply cannot be navigated to its message content
pub const UPSTREAM_SHAPE_MESSAGE: &str = "Failed to parse response from chat completion API.";

/// Seam between the request handler and the remote chat completion API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one chat completion request.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::TransportError`] when the call fails or the status
    /// is not a success, and [`RelayError::UpstreamShapeError`] when the body is
    /// not a chat completion response.
    async fn complete(
        &self,
        url: &str,
        api_token: &str,
        request: &ChatRequest,
    ) -> RelayResult<ChatResponse>;
}

/// reqwest-backed [`ChatBackend`]
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: reqwest::Client,
}

impl HttpChatClient {
    /// Create a client whose calls are bounded by `timeout`.
    pub fn new(timeout: Duration) -> RelayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                RelayError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }

    /// Build bearer authentication headers
    pub fn build_auth_headers(api_token: &str) -> RelayResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_token}")).map_err(|e| {
            RelayError::configuration_error(format!("Invalid API token format: {e}"))
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn complete(
        &self,
        url: &str,
        api_token: &str,
        request: &ChatRequest,
    ) -> RelayResult<ChatResponse> {
        let headers = Self::build_auth_headers(api_token)?;

        log_debug!(
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let start_time = Instant::now();
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    url = %url,
                    error = %e,
                    timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                RelayError::transport_error(error_chain_message(&e), Some(Box::new(e)))
            })?;

        log_debug!(
            status = %response.status(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Chat completion response received"
        );

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }
}

/// `err` and each of its causes, joined with `": "`
///
/// reqwest's own `Display` stops at "error sending request for url (...)";
/// the reason (refused, timed out, DNS) only appears further down the chain.
pub fn error_chain_message(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }

    message
}

/// Handle non-success HTTP responses
async fn handle_error_response(response: reqwest::Response) -> RelayError {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    log_error!(
        status = %status,
        error_text = %error_text,
        "API error response"
    );

    RelayError::transport_error(format!("API error {status}: {error_text}"), None)
}

/// Parse a successful HTTP response into a [`ChatResponse`]
async fn parse_success_response(response: reqwest::Response) -> RelayResult<ChatResponse> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(
            error = %e,
            "Failed to read response body"
        );
        RelayError::upstream_shape_error(UPSTREAM_SHAPE_MESSAGE)
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        log_error!(
            error = %e,
            raw_body = %raw_body,
            "Failed to parse response"
        );
        RelayError::upstream_shape_error(UPSTREAM_SHAPE_MESSAGE)
    })
}
