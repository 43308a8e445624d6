//! Corpus Module Tests
//!
//! Validates resource parsing and the load pipeline over local files.
//!
//! ## Test Scopes
//! - **Parsing**: Ensures the corpus and stopword wire formats decode
//!   correctly and reject degenerate input.
//! - **Loading**: Exercises the full load path against temporary files,
//!   including the warm-cache shortcut and fatal failure modes.

#[cfg(test)]
mod tests {
    use crate::corpus::loader::{parse_documents, parse_stopwords};
    use crate::corpus::{load, CorpusConfig};

    // ============================================================
    // PARSING TESTS - parse_documents
    // ============================================================

    #[test]
    fn test_parse_documents_basic() {
        let raw = r#"["first document", "second document"]"#;
        let documents = parse_documents(raw).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0], "first document");
        assert_eq!(documents[1], "second document");
    }

    #[test]
    fn test_parse_documents_preserves_order() {
        let raw = r#"["c", "a", "b"]"#;
        let documents = parse_documents(raw).unwrap();

        // Corpus order is identity; parsing must not reorder
        assert_eq!(documents, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_parse_documents_empty_array_is_fatal() {
        let result = parse_documents("[]");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_parse_documents_invalid_json_is_fatal() {
        assert!(parse_documents("not json at all").is_err());
        assert!(parse_documents(r#"{"docs": []}"#).is_err());
    }

    // ============================================================
    // PARSING TESTS - parse_stopwords
    // ============================================================

    #[test]
    fn test_parse_stopwords_basic() {
        let stopwords = parse_stopwords("the\nand\nof\n");

        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(stopwords.contains("of"));
    }

    #[test]
    fn test_parse_stopwords_lowercases() {
        let stopwords = parse_stopwords("The\nAND\n");

        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert!(!stopwords.contains("The"));
    }

    #[test]
    fn test_parse_stopwords_deduplicates() {
        let stopwords = parse_stopwords("the\nthe\nThe\n");

        assert_eq!(stopwords.len(), 1);
    }

    #[test]
    fn test_parse_stopwords_skips_blank_lines_and_comments() {
        let stopwords = parse_stopwords("# english stopwords\n\nthe\n   \nand\n");

        assert_eq!(stopwords.len(), 2);
        assert!(!stopwords.iter().any(|w| w.starts_with('#')));
    }

    #[test]
    fn test_parse_stopwords_empty_input() {
        let stopwords = parse_stopwords("");
        assert!(stopwords.is_empty());
    }

    // ============================================================
    // LOADING TESTS - local files
    // ============================================================

    fn write_sources(dir: &std::path::Path) -> (String, String) {
        let corpus_path = dir.join("corpus.json");
        let stopwords_path = dir.join("stopwords.txt");
        std::fs::write(&corpus_path, r#"["cats are great pets", "dogs bark"]"#).unwrap();
        std::fs::write(&stopwords_path, "are\nthe\n").unwrap();
        (
            corpus_path.to_str().unwrap().to_string(),
            stopwords_path.to_str().unwrap().to_string(),
        )
    }

    #[tokio::test]
    async fn test_load_from_local_files() {
        // ARRANGE: Write both resources to disk
        let dir = tempfile::tempdir().unwrap();
        let (corpus_source, stopwords_source) = write_sources(dir.path());

        let config = CorpusConfig {
            corpus_source,
            stopwords_source,
            cache_dir: dir.path().join("cache"),
        };

        // ACT
        let corpus = load(&config).await.unwrap();

        // ASSERT
        assert_eq!(corpus.documents.len(), 2);
        assert_eq!(corpus.documents[0], "cats are great pets");
        assert!(corpus.stopwords.contains("are"));
        assert!(corpus.stopwords.contains("the"));
    }

    #[tokio::test]
    async fn test_load_missing_corpus_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let (_, stopwords_source) = write_sources(dir.path());

        let config = CorpusConfig {
            corpus_source: dir.path().join("nope.json").to_str().unwrap().to_string(),
            stopwords_source,
            cache_dir: dir.path().join("cache"),
        };

        let result = load(&config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_missing_stopwords_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let (corpus_source, _) = write_sources(dir.path());

        let config = CorpusConfig {
            corpus_source,
            stopwords_source: dir.path().join("nope.txt").to_str().unwrap().to_string(),
            cache_dir: dir.path().join("cache"),
        };

        let result = load(&config).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_load_warm_cache_skips_network() {
        // ARRANGE: Pre-populate the cache; sources are unreachable URLs, so
        // a cache miss would fail the load
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        std::fs::create_dir_all(&cache_dir).unwrap();
        std::fs::write(cache_dir.join("corpus.json"), r#"["cached document"]"#).unwrap();
        std::fs::write(cache_dir.join("stopwords.txt"), "the\n").unwrap();

        let config = CorpusConfig {
            corpus_source: "http://127.0.0.1:9/corpus.json".to_string(),
            stopwords_source: "http://127.0.0.1:9/stopwords.txt".to_string(),
            cache_dir,
        };

        // ACT
        let corpus = load(&config).await.unwrap();

        // ASSERT: Served entirely from cache
        assert_eq!(corpus.documents, vec!["cached document"]);
        assert!(corpus.stopwords.contains("the"));
    }
}
