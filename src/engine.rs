//! Engine: document-set lifecycle and query entry point
//!
//! Owns one retriever index slot per domain and the shared LLM client.
//! A document change rebuilds that domain's index from scratch and swaps
//! the `Arc` wholesale; routers handed out earlier keep ranking against
//! the snapshot they were built with, new routers see the new one.

use std::collections::HashMap;
use std::sync::Arc;

use crate::agents::{CoordinatorAgent, DomainAgent, QueryRouter};
use crate::config::Config;
use crate::errors::Result;
use crate::llm::LlmClient;
use crate::rag::{chunk_text, RetrieverIndex};
use crate::types::{CompositeAnswer, Domain};

pub struct AgentEngine {
    config: Config,
    llm: Arc<dyn LlmClient>,
    indexes: HashMap<Domain, Arc<RetrieverIndex>>,
}

impl AgentEngine {
    /// Create an engine with no documents ingested.
    ///
    /// Validates the config up front so bad chunking parameters surface
    /// here rather than on the first ingestion.
    pub fn new(config: Config, llm: Arc<dyn LlmClient>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            llm,
            indexes: HashMap::new(),
        })
    }

    /// Replace a domain's document text, rebuilding its index.
    ///
    /// Empty (or whitespace-only) text clears the domain instead: a
    /// chunkless domain has no index, and its agent answers with the
    /// no-data sentinel.
    pub fn set_document(&mut self, domain: Domain, text: &str) {
        let chunks = chunk_text(text.trim(), domain, &self.config.chunking);
        match RetrieverIndex::build(chunks) {
            Some(index) => {
                self.indexes.insert(domain, Arc::new(index));
            }
            None => {
                self.indexes.remove(&domain);
            }
        }
    }

    /// Remove a domain's document and index.
    pub fn clear_document(&mut self, domain: Domain) {
        self.indexes.remove(&domain);
    }

    pub fn has_documents(&self, domain: Domain) -> bool {
        self.indexes.contains_key(&domain)
    }

    /// Chunks currently indexed for a domain (0 when no index).
    pub fn chunk_count(&self, domain: Domain) -> usize {
        self.indexes.get(&domain).map_or(0, |index| index.len())
    }

    /// Build a router bound to the current index snapshots.
    pub fn router(&self) -> QueryRouter {
        let agent = |domain: Domain| {
            DomainAgent::new(
                domain,
                self.indexes.get(&domain).cloned(),
                self.llm.clone(),
                self.config.top_k,
            )
        };

        QueryRouter::new(
            agent(Domain::Salary),
            agent(Domain::Insurance),
            CoordinatorAgent::new(self.llm.clone()),
        )
    }

    /// Classify and answer one query against the current document set.
    pub async fn route(&self, query: &str) -> Result<CompositeAnswer> {
        self.router().route(query).await
    }
}
