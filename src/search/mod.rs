//! Query Serving Module
//!
//! The request-time component: executes free-text queries against the
//! immutable index built at startup.
//!
//! ## Overview
//! Every query is transformed through the exact vectorizer and projection
//! frozen at index time, scored against every reduced document vector by
//! cosine similarity, and ranked with a deterministic tie-break. Queries
//! never mutate shared state, so any number of them can run concurrently
//! over the shared `Arc<SearchIndex>`.
//!
//! ## Submodules
//! - **`engine`**: The ranking logic (similarity scan + top-k selection).
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Search hits and API response DTOs.

pub mod engine;
pub mod handlers;
pub mod types;
