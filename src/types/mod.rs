//! Core data model: domains, chunks, answers, and routing outcomes

use serde::{Deserialize, Serialize};

/// Clarification sentinel returned when a query matches neither domain.
pub const CLARIFICATION: &str = "Please ask about salary or insurance.";

/// The two fixed knowledge domains the system answers questions about.
///
/// This is a closed set: adding a domain means touching the router's
/// dispatch table, so it is intentionally not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Salary,
    Insurance,
}

impl Domain {
    /// Routing keyword matched (case-insensitively) against query text.
    pub const fn keyword(&self) -> &'static str {
        match self {
            Domain::Salary => "salary",
            Domain::Insurance => "insurance",
        }
    }

    /// Display name used to prefix this domain's answers.
    pub const fn agent_name(&self) -> &'static str {
        match self {
            Domain::Salary => "Salary Agent",
            Domain::Insurance => "Insurance Agent",
        }
    }

    /// Subject matter named in the prompt's answer instruction.
    pub const fn subject(&self) -> &'static str {
        match self {
            Domain::Salary => "salary details",
            Domain::Insurance => "insurance details",
        }
    }

    /// Both domains, in dispatch order.
    pub const fn all() -> [Domain; 2] {
        [Domain::Salary, Domain::Insurance]
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A bounded, overlapping slice of one domain's source document.
///
/// Immutable once produced by the chunker. `sequence_index` preserves
/// source order, which the retriever uses for stable tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    pub domain: Domain,
    pub sequence_index: usize,
}

/// The unit returned by a Domain Agent for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAnswer {
    pub domain: Domain,
    pub text: String,
}

impl AgentAnswer {
    /// Sentinel answer for a domain with no ingested documents.
    pub fn no_data(domain: Domain) -> Self {
        Self {
            text: format!("No {} data available.", domain.keyword()),
            domain,
        }
    }

    /// True if this is the no-documents sentinel rather than a model answer.
    pub fn is_no_data(&self) -> bool {
        self.text == format!("No {} data available.", self.domain.keyword())
    }
}

/// Routing outcome for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    SalaryOnly,
    InsuranceOnly,
    Both,
    Unmatched,
}

impl Route {
    /// Classify a query by case-insensitive keyword containment.
    ///
    /// This is a raw substring test, not intent detection: "How much do
    /// I get paid?" will not match. Preserved as documented behavior.
    pub fn classify(query: &str) -> Self {
        let query_lower = query.to_lowercase();
        let salary = query_lower.contains(Domain::Salary.keyword());
        let insurance = query_lower.contains(Domain::Insurance.keyword());

        match (salary, insurance) {
            (true, false) => Route::SalaryOnly,
            (false, true) => Route::InsuranceOnly,
            (true, true) => Route::Both,
            (false, false) => Route::Unmatched,
        }
    }
}

/// Aggregate result returned by the router for one query.
///
/// Invariant: `final_answer` is `Some` if and only if both `salary` and
/// `insurance` are `Some`. The constructors below are the only way the
/// crate builds one, which keeps the invariant by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeAnswer {
    pub route: Route,
    pub salary: Option<AgentAnswer>,
    pub insurance: Option<AgentAnswer>,
    pub final_answer: Option<String>,
}

impl CompositeAnswer {
    pub fn salary_only(answer: AgentAnswer) -> Self {
        Self {
            route: Route::SalaryOnly,
            salary: Some(answer),
            insurance: None,
            final_answer: None,
        }
    }

    pub fn insurance_only(answer: AgentAnswer) -> Self {
        Self {
            route: Route::InsuranceOnly,
            salary: None,
            insurance: Some(answer),
            final_answer: None,
        }
    }

    pub fn both(salary: AgentAnswer, insurance: AgentAnswer, final_answer: String) -> Self {
        Self {
            route: Route::Both,
            salary: Some(salary),
            insurance: Some(insurance),
            final_answer: Some(final_answer),
        }
    }

    pub fn unmatched() -> Self {
        Self {
            route: Route::Unmatched,
            salary: None,
            insurance: None,
            final_answer: None,
        }
    }

    /// The clarification sentinel, present only for unmatched queries.
    pub fn clarification(&self) -> Option<&'static str> {
        match self.route {
            Route::Unmatched => Some(CLARIFICATION),
            _ => None,
        }
    }
}
