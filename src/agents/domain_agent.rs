//! Domain-scoped answer agent
//!
//! One [`DomainAgent`] exists per [`Domain`] value; the salary and
//! insurance agents are the same type configured with different domain
//! descriptors rather than duplicated logic. Each agent is bound to its
//! domain's retriever snapshot (possibly absent) and the shared LLM
//! client.

use std::sync::Arc;

use crate::errors::Result;
use crate::llm::LlmClient;
use crate::rag::RetrieverIndex;
use crate::types::{AgentAnswer, Domain};

pub struct DomainAgent {
    domain: Domain,
    index: Option<Arc<RetrieverIndex>>,
    llm: Arc<dyn LlmClient>,
    top_k: usize,
}

impl DomainAgent {
    pub fn new(
        domain: Domain,
        index: Option<Arc<RetrieverIndex>>,
        llm: Arc<dyn LlmClient>,
        top_k: usize,
    ) -> Self {
        Self {
            domain,
            index,
            llm,
            top_k,
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Whether this domain has an index (i.e. ingested documents).
    pub fn has_documents(&self) -> bool {
        self.index.is_some()
    }

    /// Answer a query within this agent's domain.
    ///
    /// Without an index this returns the no-data sentinel immediately and
    /// never touches the model: a domain with no ingested documents must
    /// not cost a model call. With an index, the top-k chunks become the
    /// context block and the model is invoked exactly once — even when
    /// retrieval comes back empty the call still happens with an empty
    /// context block (known inefficiency, kept as documented behavior).
    pub async fn answer(&self, query: &str) -> Result<AgentAnswer> {
        let Some(index) = &self.index else {
            return Ok(AgentAnswer::no_data(self.domain));
        };

        let chunks = index.query(query, self.top_k);
        let context = chunks
            .iter()
            .map(|chunk| chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = self.compose_prompt(query, &context);
        let completion = self.llm.invoke(&prompt).await?;

        Ok(AgentAnswer {
            domain: self.domain,
            text: format!("{}: {}", self.domain.agent_name(), completion.trim()),
        })
    }

    /// Role framing + context block + literal query + answer instruction.
    fn compose_prompt(&self, query: &str, context: &str) -> String {
        format!(
            "You are the **{agent}**. Use the following context to answer.\n\n\
             Context:\n{context}\n\n\
             Question: {query}\n\n\
             Answer clearly about {subject}:",
            agent = self.domain.agent_name(),
            subject = self.domain.subject(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChunkingConfig;
    use crate::rag::chunk_text;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every prompt and replies with a fixed completion.
    struct MockLlm {
        prompts: Mutex<Vec<String>>,
        reply: String,
    }

    impl MockLlm {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                reply: reply.to_string(),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmClient for MockLlm {
        async fn invoke(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    fn index_from(text: &str, domain: Domain) -> Option<Arc<RetrieverIndex>> {
        let chunks = chunk_text(text, domain, &ChunkingConfig::default());
        RetrieverIndex::build(chunks).map(Arc::new)
    }

    #[tokio::test]
    async fn test_no_index_returns_sentinel_without_model_call() {
        let llm = MockLlm::new("should never be used");
        let agent = DomainAgent::new(Domain::Salary, None, llm.clone(), 4);

        let answer = agent.answer("What is my salary?").await.unwrap();
        assert_eq!(answer.text, "No salary data available.");
        assert!(answer.is_no_data());
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_answer_is_label_prefixed() {
        let llm = MockLlm::new("Bonuses are paid in Q4.");
        let agent = DomainAgent::new(
            Domain::Salary,
            index_from("Bonuses paid in Q4.", Domain::Salary),
            llm,
            4,
        );

        let answer = agent.answer("When are bonuses paid? My salary?").await.unwrap();
        assert_eq!(answer.text, "Salary Agent: Bonuses are paid in Q4.");
        assert_eq!(answer.domain, Domain::Salary);
    }

    #[tokio::test]
    async fn test_prompt_contains_context_and_query() {
        let llm = MockLlm::new("ok");
        let agent = DomainAgent::new(
            Domain::Insurance,
            index_from("Dental coverage starts after 90 days.", Domain::Insurance),
            llm.clone(),
            4,
        );

        agent.answer("When does dental coverage start?").await.unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("**Insurance Agent**"));
        assert!(prompts[0].contains("Dental coverage starts after 90 days."));
        assert!(prompts[0].contains("Question: When does dental coverage start?"));
        assert!(prompts[0].contains("insurance details"));
    }

    #[tokio::test]
    async fn test_zero_retrieved_chunks_still_invokes_model() {
        let llm = MockLlm::new("nothing to go on");
        // Index exists but k = 0 retrieves nothing.
        let agent = DomainAgent::new(
            Domain::Salary,
            index_from("Base pay reviewed annually.", Domain::Salary),
            llm.clone(),
            0,
        );

        let answer = agent.answer("salary?").await.unwrap();
        assert_eq!(llm.prompts().len(), 1);
        assert!(llm.prompts()[0].contains("Context:\n\n"));
        assert!(!answer.is_no_data());
    }
}
