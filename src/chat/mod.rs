//! OpenAI-compatible chat completion plumbing
//!
//! - `types` - request/response wire structures
//! - `client` - the [`ChatBackend`] seam and its reqwest implementation

pub mod client;
pub mod types;

pub use client::{ChatBackend, HttpChatClient, UPSTREAM_SHAPE_MESSAGE};
pub use types::*;

#[cfg(test)]
pub use client::MockChatBackend;
