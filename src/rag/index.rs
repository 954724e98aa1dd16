//! Per-domain lexical retriever index
//!
//! BM25 ranking over one domain's chunk snapshot. The index owns its
//! chunks and is never mutated after construction: a document-set change
//! discards the whole index and rebuilds it, so concurrent readers keep
//! ranking against the snapshot they started with.

use std::collections::HashMap;

use crate::types::Chunk;

// Standard Okapi BM25 constants.
const BM25_K1: f64 = 1.5;
const BM25_B: f64 = 0.75;

/// Lexical relevance index over one domain's chunks.
///
/// Built with [`RetrieverIndex::build`], which returns `None` for an
/// empty chunk set: "no index" is a distinct state from "index with
/// zero results", and callers rely on that to skip model calls for
/// domains without documents.
pub struct RetrieverIndex {
    chunks: Vec<Chunk>,
    term_freqs: Vec<HashMap<String, usize>>,
    doc_freqs: HashMap<String, usize>,
    doc_lens: Vec<usize>,
    avg_doc_len: f64,
}

impl RetrieverIndex {
    /// Build an index from a domain's chunk sequence.
    ///
    /// Returns `None` when `chunks` is empty.
    pub fn build(chunks: Vec<Chunk>) -> Option<Self> {
        if chunks.is_empty() {
            return None;
        }

        let mut term_freqs = Vec::with_capacity(chunks.len());
        let mut doc_freqs: HashMap<String, usize> = HashMap::new();
        let mut doc_lens = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            let terms = tokenize(&chunk.text);
            doc_lens.push(terms.len());

            let mut freqs: HashMap<String, usize> = HashMap::new();
            for term in terms {
                *freqs.entry(term).or_insert(0) += 1;
            }
            for term in freqs.keys() {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            term_freqs.push(freqs);
        }

        let avg_doc_len = doc_lens.iter().sum::<usize>() as f64 / doc_lens.len() as f64;

        Some(Self {
            chunks,
            term_freqs,
            doc_freqs,
            doc_lens,
            avg_doc_len,
        })
    }

    /// Number of chunks in the snapshot.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Return up to `k` chunks ranked by decreasing BM25 relevance to
    /// `text`. Ties keep original chunk order (stable sort), so a query
    /// sharing no terms with the corpus yields the first `k` chunks in
    /// source order, mirroring plain BM25 retrievers.
    pub fn query(&self, text: &str, k: usize) -> Vec<Chunk> {
        let query_terms = tokenize(text);

        let mut scored: Vec<(usize, f64)> = (0..self.chunks.len())
            .map(|doc| (doc, self.score(&query_terms, doc)))
            .collect();

        // sort_by is stable: equal scores preserve sequence order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        scored
            .into_iter()
            .map(|(doc, _)| self.chunks[doc].clone())
            .collect()
    }

    /// Okapi BM25 score of one document against the query terms.
    fn score(&self, query_terms: &[String], doc: usize) -> f64 {
        let total_docs = self.chunks.len() as f64;
        let doc_len = self.doc_lens[doc] as f64;
        let freqs = &self.term_freqs[doc];

        let mut score = 0.0;
        for term in query_terms {
            let Some(&tf) = freqs.get(term) else {
                continue;
            };
            let df = self.doc_freqs.get(term).copied().unwrap_or(0) as f64;
            let idf = ((total_docs - df + 0.5) / (df + 0.5) + 1.0).ln();

            let tf = tf as f64;
            let norm = BM25_K1 * (1.0 - BM25_B + BM25_B * doc_len / self.avg_doc_len);
            score += idf * (tf * (BM25_K1 + 1.0)) / (tf + norm);
        }
        score
    }
}

/// Lowercased alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
