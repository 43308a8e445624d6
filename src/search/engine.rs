use super::types::SearchHit;
use crate::index::SearchIndex;
use ndarray::ArrayView1;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Number of results returned per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Rank every indexed document against the query and return the `top_k`
/// best matches, best first.
///
/// The query goes through the same frozen transformation pipeline the
/// documents went through at build time. Empty or entirely
/// out-of-vocabulary queries produce the zero vector: every similarity is
/// then 0.0 and the tie-break alone orders the results. Equal scores are
/// broken by ascending corpus index, so results are always a total,
/// reproducible order.
pub fn search(index: &SearchIndex, query: &str, top_k: usize) -> Vec<SearchHit> {
    let query_vec = index.embed(query);
    let doc_matrix = index.doc_matrix();

    let mut hits: Vec<SearchHit> = (0..index.len())
        .into_par_iter()
        .map(|doc_index| SearchHit {
            doc_index,
            score: cosine_similarity(&query_vec, doc_matrix.row(doc_index)),
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.doc_index.cmp(&b.doc_index))
    });
    hits.truncate(top_k);
    hits
}

/// Cosine similarity in [-1, 1]; defined as 0.0 whenever either vector has
/// zero magnitude.
fn cosine_similarity(query: &[f64], doc: ArrayView1<f64>) -> f64 {
    let mut dot = 0.0;
    let mut query_sq = 0.0;
    let mut doc_sq = 0.0;
    for (q, d) in query.iter().zip(doc.iter()) {
        dot += q * d;
        query_sq += q * q;
        doc_sq += d * d;
    }

    if query_sq == 0.0 || doc_sq == 0.0 {
        return 0.0;
    }

    dot / (query_sq.sqrt() * doc_sq.sqrt())
}
