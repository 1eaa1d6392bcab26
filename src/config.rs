//! Relay configuration
//!
//! Read once from the process environment at startup and injected into the
//! request handler. Completeness of the remote endpoint settings is checked
//! per request by [`RelayConfig::endpoint`], so a relay started without
//! credentials still serves `GET /` and reports a configuration error on
//! every `/process` call.

use crate::error::{RelayError, RelayResult};
use crate::logging::log_debug;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

/// Remote chat completion endpoint URL
pub const ENV_API_URL: &str = "HF_API_URL";
/// Bearer credential for the remote endpoint
pub const ENV_API_TOKEN: &str = "HF_API_TOKEN";
/// Model identifier sent in the chat payload
pub const ENV_MODEL_NAME: &str = "HF_MODEL_NAME";
/// Listen address for the HTTP server
pub const ENV_BIND_ADDR: &str = "RELAY_BIND_ADDR";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_TOKENS: u32 = 300;

const MISSING_ENDPOINT_MESSAGE: &str =
    "HF_API_URL, HF_API_TOKEN, and HF_MODEL_NAME environment variables must be set.";

/// Settings for the outbound chat completion call
#[derive(Clone)]
pub struct RelayConfig {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
    pub model_name: Option<String>,
    /// Upper bound on the whole outbound call
    pub timeout: Duration,
    /// Response-length cap sent as `max_tokens`
    pub max_tokens: u32,
}

/// Borrowed view of a complete endpoint configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSettings<'a> {
    pub api_url: &'a str,
    pub api_token: &'a str,
    pub model_name: &'a str,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_token: None,
            model_name: None,
            timeout: DEFAULT_TIMEOUT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl RelayConfig {
    /// Build configuration from `HF_API_URL`, `HF_API_TOKEN` and `HF_MODEL_NAME`.
    ///
    /// Unset and empty variables are both recorded as missing; this never fails.
    pub fn from_env() -> Self {
        let config = Self {
            api_url: read_env(ENV_API_URL),
            api_token: read_env(ENV_API_TOKEN),
            model_name: read_env(ENV_MODEL_NAME),
            ..Self::default()
        };

        log_debug!(
            has_api_url = config.api_url.is_some(),
            has_api_token = config.api_token.is_some(),
            model_name = config.model_name.as_deref().unwrap_or("<unset>"),
            timeout_secs = config.timeout.as_secs(),
            max_tokens = config.max_tokens,
            "Loaded relay configuration from environment"
        );

        config
    }

    /// Resolve the endpoint settings, failing if any of them is missing.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ConfigurationError`] if the API URL, access token
    /// or model name is unset or empty.
    pub fn endpoint(&self) -> RelayResult<EndpointSettings<'_>> {
        match (
            non_empty(self.api_url.as_deref()),
            non_empty(self.api_token.as_deref()),
            non_empty(self.model_name.as_deref()),
        ) {
            (Some(api_url), Some(api_token), Some(model_name)) => Ok(EndpointSettings {
                api_url,
                api_token,
                model_name,
            }),
            _ => Err(RelayError::configuration_error(MISSING_ENDPOINT_MESSAGE)),
        }
    }
}

// Token stays out of logs and panic messages.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("timeout", &self.timeout)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

impl ServerConfig {
    /// Read `RELAY_BIND_ADDR`, falling back to `127.0.0.1:8000`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::ConfigurationError`] if the variable is set but is
    /// not a valid socket address.
    pub fn from_env() -> RelayResult<Self> {
        let Some(raw) = read_env(ENV_BIND_ADDR) else {
            return Ok(Self::default());
        };

        let bind_addr = raw.parse::<SocketAddr>().map_err(|e| {
            RelayError::configuration_error(format!("Invalid {ENV_BIND_ADDR} '{raw}': {e}"))
        })?;

        Ok(Self { bind_addr })
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
