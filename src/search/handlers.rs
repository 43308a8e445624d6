use super::engine::{search, DEFAULT_TOP_K};
use super::types::SearchResponse;
use crate::index::SearchIndex;
use axum::response::Html;
use axum::{Extension, Form, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// The search page.
pub async fn handle_home() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// `POST /search` with a form-encoded `query` field.
///
/// A missing or malformed form body is rejected by the extractor before
/// this handler runs; the query text itself is never invalid.
pub async fn handle_search(
    Extension(index): Extension<Arc<SearchIndex>>,
    Form(params): Form<SearchParams>,
) -> Json<SearchResponse> {
    let hits = search(&index, &params.query, DEFAULT_TOP_K);
    tracing::debug!(
        "Query {:?} -> {} hits, best score {:.4}",
        params.query,
        hits.len(),
        hits.first().map(|h| h.score).unwrap_or(0.0)
    );

    let mut documents = Vec::with_capacity(hits.len());
    let mut similarities = Vec::with_capacity(hits.len());
    let mut indices = Vec::with_capacity(hits.len());
    for hit in hits {
        if let Some(text) = index.document(hit.doc_index) {
            documents.push(text.to_string());
            similarities.push(hit.score);
            indices.push(hit.doc_index);
        }
    }

    Json(SearchResponse {
        documents,
        similarities,
        indices,
    })
}
