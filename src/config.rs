//! Explicit configuration for the agent system
//!
//! All tunables live here and are passed at construction time. The only
//! place the crate reads the environment is [`Config::from_env`]; every
//! component receives its settings as plain values, so tests never have
//! to mutate process state.

use serde::{Deserialize, Serialize};

use crate::errors::{AgentError, Result};

/// Default Groq model, matching the system's reference deployment.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Groq API key. Required before any query is processed.
    pub api_key: String,

    /// Model name sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the chat-completions endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature for all agents.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Chunking parameters for document ingestion.
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Number of chunks retrieved as context per agent query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks.
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 50,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_top_k() -> usize {
    4
}

impl Config {
    /// Create a config with the given API key and default tunables.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AgentError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            chunking: ChunkingConfig::default(),
            top_k: default_top_k(),
        })
    }

    /// Load configuration from the environment.
    ///
    /// A missing or empty `GROQ_API_KEY` is fatal: it returns a typed
    /// error rather than halting, so the caller decides how to surface
    /// it and exits before any query processing starts.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| AgentError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// Validate chunking parameters.
    ///
    /// Overlap must be strictly smaller than the chunk size or the
    /// chunker's sliding window cannot advance.
    pub fn validate(&self) -> Result<()> {
        if self.chunking.chunk_size == 0 {
            return Err(AgentError::ConfigError(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.chunking.chunk_overlap >= self.chunking.chunk_size {
            return Err(AgentError::ConfigError(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunking.chunk_overlap, self.chunking.chunk_size
            )));
        }
        if self.top_k == 0 {
            return Err(AgentError::ConfigError(
                "top_k must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
