//! The agent layer: domain agents, coordinator, and query router
//!
//! Components:
//! - Domain Agent: answers one domain's questions from retrieved context
//! - Coordinator Agent: merges two domain answers into one final answer
//! - Query Router: classifies queries and dispatches to the agents

pub mod coordinator;
pub mod domain_agent;
pub mod router;

pub use coordinator::CoordinatorAgent;
pub use domain_agent::DomainAgent;
pub use router::QueryRouter;
