//! Retrieval plumbing: document chunking and per-domain lexical indexes
//!
//! Components:
//! - Chunker: splits raw domain text into bounded, overlapping passages
//! - Retriever Index: BM25-style lexical ranking over one domain's chunks

pub mod chunker;
pub mod index;

pub use chunker::chunk_text;
pub use index::RetrieverIndex;
