//! Coordinator agent: cross-domain answer synthesis
//!
//! Invoked only after both domain agents have produced answers, never
//! speculatively. One model call merges the two sub-answers and the
//! original query into a single user-facing response.

use std::sync::Arc;

use crate::errors::Result;
use crate::llm::LlmClient;
use crate::types::AgentAnswer;

pub struct CoordinatorAgent {
    llm: Arc<dyn LlmClient>,
}

impl CoordinatorAgent {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Merge both domain answers into one final answer.
    ///
    /// Callers guarantee both sub-answers exist; model failures
    /// propagate unchanged.
    pub async fn synthesize(
        &self,
        query: &str,
        salary: &AgentAnswer,
        insurance: &AgentAnswer,
    ) -> Result<String> {
        let prompt = compose_prompt(query, &salary.text, &insurance.text);
        let completion = self.llm.invoke(&prompt).await?;
        Ok(format!("Coordinator Agent: {}", completion.trim()))
    }
}

fn compose_prompt(query: &str, salary_answer: &str, insurance_answer: &str) -> String {
    format!(
        "You are the **Coordinator Agent**. Combine the following answers into one clear response.\n\n\
         Salary Agent Answer:\n{salary_answer}\n\n\
         Insurance Agent Answer:\n{insurance_answer}\n\n\
         User Question: {query}\n\n\
         Provide a helpful, concise final answer for the user."
    )
}
