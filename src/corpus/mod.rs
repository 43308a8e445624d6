//! Corpus Loading Module
//!
//! Handles the acquisition of the fixed document collection and the stopword
//! list from external sources.
//!
//! ## Workflow
//! 1. **Fetch**: Downloads each resource over HTTP (with retry/backoff), or
//!    reads it from a local file path.
//! 2. **Cache**: Downloaded resources are written to a local cache directory
//!    so subsequent startups skip the network entirely.
//! 3. **Parse**: The document collection is decoded from a JSON array of
//!    strings; the stopword list from plaintext, one term per line.
//!
//! Loading happens exactly once at process startup. Any failure here is
//! fatal: the service refuses to start without a complete corpus.

pub mod loader;
pub mod types;

pub use loader::load;
pub use types::{Corpus, CorpusConfig};

#[cfg(test)]
mod tests;
