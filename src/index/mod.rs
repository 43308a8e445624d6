//! Index Construction Module
//!
//! The offline pipeline that turns the raw corpus into the immutable
//! semantic index served at query time.
//!
//! ## Pipeline
//! 1. **Vectorize**: Fit a TF-IDF vectorizer over the corpus (tokenization,
//!    vocabulary, IDF weights) and produce one sparse term-weight vector per
//!    document.
//! 2. **Reduce**: Fit a truncated SVD with a fixed seed over the term-weight
//!    matrix, yielding a dense projection from the vocabulary space down to
//!    a fixed number of latent dimensions.
//! 3. **Bundle**: Project every document and assemble the `SearchIndex`: the
//!    documents, the frozen vectorizer, the frozen projection, and the
//!    reduced document matrix, row-aligned with the corpus.
//!
//! The whole pipeline runs exactly once at startup and is deterministic: the
//! same corpus and seed always produce bit-identical matrices.
//!
//! ## Submodules
//! - **`vectorizer`**: Tokenization and TF-IDF weighting. The single
//!   tokenize-and-weight capability shared by index and query paths.
//! - **`lsa`**: The randomized truncated SVD and its projection.
//! - **`builder`**: Assembles the `SearchIndex` bundle.
//! - **`types`**: Configuration parameters and defaults.

pub mod builder;
pub mod lsa;
pub mod types;
pub mod vectorizer;

pub use builder::SearchIndex;
pub use lsa::LsaProjection;
pub use types::IndexConfig;
pub use vectorizer::TfidfVectorizer;
