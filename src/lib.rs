//! # hf-extract-relay
//!
//! HTTP relay that forwards free text to an OpenAI-compatible chat completion
//! API (Hugging Face router, OpenAI, local servers), asks it to extract
//! `name`, `email`, `age` and `gender`, and repairs the reply into JSON.
//!
//! ## Endpoints
//!
//! - `GET /` - liveness note
//! - `POST /process` with `{"text": "..."}` - returns the extracted object
//!
//! ## Example
//!
//! ```rust,no_run
//! use hf_extract_relay::{AppState, ExtractionService, HttpChatClient, RelayConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Arc::new(RelayConfig::from_env());
//! let backend = Arc::new(HttpChatClient::new(config.timeout)?);
//! let app = hf_extract_relay::server::router(AppState::new(ExtractionService::new(config, backend)));
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod logging;

pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod repair;
pub mod server;
pub mod service;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use chat::{ChatBackend, ChatRequest, ChatResponse, HttpChatClient};
pub use config::{EndpointSettings, RelayConfig, ServerConfig};
pub use error::{RelayError, RelayResult};
pub use models::{ExtractedRecord, ExtractionRequest};
pub use repair::ResponseRepair;
pub use server::AppState;
pub use service::ExtractionService;
