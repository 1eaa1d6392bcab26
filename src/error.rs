//! Error types for the extraction relay.
//!
//! Every failure is scoped to a single request and surfaces directly to the
//! caller as an HTTP error with a human-readable `detail` string. Nothing is
//! retried and nothing is logged-and-suppressed.
//!
//! # Error Types
//!
//! The main error type is [`RelayError`]:
//! - Configuration errors (remote endpoint settings missing)
//! - Validation errors (empty or absent input text)
//! - Transport errors (connection failure, timeout, non-success status)
//! - Upstream shape errors (reply lacks `choices[0].message.content`)
//! - Repair parse errors (model output could not be turned into JSON)
//!
//! # Result Type
//!
//! Use [`RelayResult<T>`] as a convenient alias for `Result<T, RelayError>`:
//!
//! ```rust
//! use hf_extract_relay::RelayResult;
//!
//! fn my_function() -> RelayResult<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The chat completion API or the network misbehaved.
    External,

    /// The relay itself is misconfigured.
    Internal,

    /// The caller sent a request that cannot be served.
    Client,
}

// ============================================================================
// Relay Error types
// ============================================================================

/// Convenient result type for relay operations.
pub type RelayResult<T> = std::result::Result<T, RelayError>;

/// Errors that can occur while serving an extraction request.
///
/// Use the constructor methods, which log automatically:
///
/// ```rust
/// use hf_extract_relay::RelayError;
///
/// let err = RelayError::validation_error("Missing \"text\" field in request body.");
/// assert_eq!(err.status_code(), 400);
/// ```
///
/// | Variant | Category | HTTP |
/// |---------|----------|------|
/// | `ConfigurationError` | Internal | 500 |
/// | `ValidationError` | Client | 400 |
/// | `TransportError` | External | 502 |
/// | `UpstreamShapeError` | External | 502 |
/// | `RepairParseError` | External | 502 |
#[derive(Error, Debug)]
pub enum RelayError {
    /// Remote endpoint settings are missing or unusable.
    #[error("{message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The caller's input is missing or empty.
    #[error("{message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },

    /// The outbound call failed at the transport level.
    ///
    /// Covers connection errors, timeouts and non-success status codes.
    #[error("Chat completion request failed: {message}")]
    TransportError {
        /// Description of the failure, including the underlying error text.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote reply could not be navigated to its message content.
    #[error("{message}")]
    UpstreamShapeError {
        /// Description of the shape problem.
        message: String,
    },

    /// The repaired model output is not valid JSON.
    #[error("Failed to parse JSON from model output. Raw output: {raw_output}")]
    RepairParseError {
        /// The model output exactly as received (after trimming).
        raw_output: String,
    },
}

impl RelayError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Internal,
            Self::ValidationError { .. } => ErrorCategory::Client,
            Self::TransportError { .. } => ErrorCategory::External,
            Self::UpstreamShapeError { .. } => ErrorCategory::External,
            Self::RepairParseError { .. } => ErrorCategory::External,
        }
    }

    /// HTTP status code reported to the caller.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Client => 400,
            ErrorCategory::Internal => 500,
            ErrorCategory::External => 502,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Relay configuration is incomplete"
        );
        Self::ConfigurationError { message }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "validation_error",
            message = %message,
            "Extraction input rejected"
        );
        Self::ValidationError { message }
    }

    pub fn transport_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "transport_error",
            message = %message,
            has_source = source.is_some(),
            "Chat completion request failed"
        );
        Self::TransportError { message, source }
    }

    pub fn upstream_shape_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "upstream_shape_error",
            message = %message,
            "Chat completion response has unexpected shape"
        );
        Self::UpstreamShapeError { message }
    }

    pub fn repair_parse_error(raw_output: impl Into<String>) -> Self {
        let raw_output = raw_output.into();
        log_warn!(
            error_type = "repair_parse_error",
            raw_output_length = raw_output.len(),
            raw_output_preview = raw_output.chars().take(200).collect::<String>(),
            "Model output could not be repaired into JSON"
        );
        Self::RepairParseError { raw_output }
    }
}
