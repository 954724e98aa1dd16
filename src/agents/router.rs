//! Query router: classification and dispatch
//!
//! Stateless per query. Classification is the raw keyword containment
//! test from [`Route::classify`]; dispatch follows a four-way table:
//! one domain agent, the other, both plus the coordinator, or neither
//! plus a clarification sentinel.

use crate::agents::{CoordinatorAgent, DomainAgent};
use crate::errors::Result;
use crate::types::{CompositeAnswer, Route};

pub struct QueryRouter {
    salary: DomainAgent,
    insurance: DomainAgent,
    coordinator: CoordinatorAgent,
}

impl QueryRouter {
    pub fn new(salary: DomainAgent, insurance: DomainAgent, coordinator: CoordinatorAgent) -> Self {
        Self {
            salary,
            insurance,
            coordinator,
        }
    }

    /// Classify `query` and dispatch to the matching agents.
    ///
    /// In the both-domains branch the two agents run concurrently over
    /// their disjoint, immutable index snapshots; the coordinator is
    /// invoked only after both have completed. Any model failure aborts
    /// the rest of this query's work and propagates.
    pub async fn route(&self, query: &str) -> Result<CompositeAnswer> {
        match Route::classify(query) {
            Route::SalaryOnly => {
                let answer = self.salary.answer(query).await?;
                Ok(CompositeAnswer::salary_only(answer))
            }
            Route::InsuranceOnly => {
                let answer = self.insurance.answer(query).await?;
                Ok(CompositeAnswer::insurance_only(answer))
            }
            Route::Both => {
                let (salary, insurance) =
                    tokio::join!(self.salary.answer(query), self.insurance.answer(query));
                let (salary, insurance) = (salary?, insurance?);

                let final_answer = self
                    .coordinator
                    .synthesize(query, &salary, &insurance)
                    .await?;
                Ok(CompositeAnswer::both(salary, insurance, final_answer))
            }
            Route::Unmatched => Ok(CompositeAnswer::unmatched()),
        }
    }
}
