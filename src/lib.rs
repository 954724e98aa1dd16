//! hrbuddy - Multi-agent benefits assistant
//!
//! Answers natural-language questions about two fixed knowledge domains
//! (salary and insurance) by retrieving passages from per-domain
//! document collections and delegating to domain-specialized agents. A
//! coordinator merges both agents' answers when a question spans both
//! domains.
//!
//! # Architecture
//!
//! - `rag`: chunker + per-domain BM25 retriever indexes
//! - `agents`: domain agents, coordinator, query router
//! - `llm`: the `invoke(prompt) -> text` transport seam
//! - `engine`: document-set lifecycle and query entry point

pub mod config;
pub mod errors;
pub mod types;

pub mod agents;
pub mod engine;
pub mod llm;
pub mod rag;

// Re-export commonly used types
pub use config::Config;
pub use engine::AgentEngine;
pub use errors::{AgentError, Result};
pub use types::{AgentAnswer, Chunk, CompositeAnswer, Domain, Route};
