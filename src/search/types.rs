//! Search Data Types
//!
//! Ranked hits produced by the engine and the DTOs exposed over HTTP.

use serde::{Deserialize, Serialize};

/// A single ranked match: the document's position in the corpus and its
/// cosine similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub doc_index: usize,
    pub score: f64,
}

/// Response body of `POST /search`.
///
/// Three index-aligned lists of equal length: entry i of each list refers
/// to the i-th ranked result.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub documents: Vec<String>,
    pub similarities: Vec<f64>,
    pub indices: Vec<usize>,
}
