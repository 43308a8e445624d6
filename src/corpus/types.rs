//! Corpus Data Types
//!
//! Defines the loaded corpus value and the loader configuration.

use std::collections::HashSet;
use std::path::PathBuf;

/// The fully loaded document collection, produced once at startup.
///
/// `documents` preserves source order; a document's position in this vector
/// is its identity for the lifetime of the process. The reduced document
/// matrix built by the indexer is row-aligned with it.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub documents: Vec<String>,
    pub stopwords: HashSet<String>,
}

/// Where to obtain the corpus and stopword resources.
///
/// Each source is either an `http(s)://` URL or a local file path. Fetched
/// URLs are cached under `cache_dir` on first use.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub corpus_source: String,
    pub stopwords_source: String,
    pub cache_dir: PathBuf,
}
