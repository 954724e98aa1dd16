//! Language-model transport
//!
//! Agents depend only on the [`LlmClient`] trait: a stateless, blocking
//! `invoke(prompt) -> text` capability shared read-only behind an `Arc`.
//! The production implementation is [`groq::GroqClient`]; tests supply
//! scripted mocks.

pub mod groq;

use async_trait::async_trait;

use crate::errors::Result;

/// Opaque completion capability consumed by every agent.
///
/// Failures (auth, network, rate limit) propagate to the caller
/// unchanged; no retry or fallback lives behind this trait.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn invoke(&self, prompt: &str) -> Result<String>;
}

pub use groq::GroqClient;
