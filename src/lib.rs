//! LSA Document Search Service Library
//!
//! This library crate defines the core modules of the search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three subsystems, built in dependency order:
//!
//! - **`corpus`**: The data intake layer. Responsible for fetching the fixed
//!   document collection and the stopword list from external sources (HTTP or
//!   local files), with transparent on-disk caching of fetched resources.
//! - **`index`**: The offline index construction pipeline. Fits a TF-IDF
//!   vectorizer over the corpus, reduces the term-weight space to a fixed
//!   number of latent dimensions via seeded truncated SVD, and bundles the
//!   frozen parameters into an immutable `SearchIndex`.
//! - **`search`**: The query-serving layer. Transforms free-text queries
//!   through the frozen index parameters, ranks every document by cosine
//!   similarity, and exposes the results over HTTP.
//!
//! The index is built exactly once at startup and never mutated afterwards;
//! all request handling is read-only computation over shared immutable state.

pub mod corpus;
pub mod index;
pub mod search;
