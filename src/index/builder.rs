use super::lsa::LsaProjection;
use super::types::{IndexConfig, SparseVector};
use super::vectorizer::TfidfVectorizer;
use crate::corpus::Corpus;
use anyhow::Result;
use ndarray::Array2;
use rayon::prelude::*;

/// The immutable index bundle: documents, frozen vectorizer, frozen
/// projection, and the reduced document matrix, row-aligned with the
/// documents.
///
/// Built exactly once at startup and shared read-only (behind an `Arc`)
/// with every request handler. Nothing here is ever mutated after `build`
/// returns, which is the entire concurrency story of the service.
pub struct SearchIndex {
    documents: Vec<String>,
    vectorizer: TfidfVectorizer,
    projection: LsaProjection,
    doc_matrix: Array2<f64>,
}

impl SearchIndex {
    /// Build the full index from a loaded corpus.
    ///
    /// Deterministic: the same corpus and configuration always produce
    /// bit-identical matrices. Fails fast on an empty corpus or an empty
    /// post-stopword vocabulary.
    pub fn build(corpus: Corpus, config: &IndexConfig) -> Result<Self> {
        let started = std::time::Instant::now();
        let Corpus {
            documents,
            stopwords,
        } = corpus;

        let vectorizer = TfidfVectorizer::fit(&documents, stopwords)?;
        tracing::info!(
            "Fitted vectorizer: {} features over {} documents",
            vectorizer.vocabulary_len(),
            documents.len()
        );

        let rows: Vec<SparseVector> = documents
            .par_iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();

        let projection = LsaProjection::fit(&rows, vectorizer.vocabulary_len(), config)?;
        let rank = projection.rank();

        let reduced: Vec<Vec<f64>> = rows
            .par_iter()
            .map(|row| projection.transform(row))
            .collect();
        let mut data = Vec::with_capacity(documents.len() * rank);
        for row in &reduced {
            data.extend_from_slice(row);
        }
        let doc_matrix = Array2::from_shape_vec((documents.len(), rank), data).unwrap();

        tracing::info!(
            "Built search index: rank {}, {:.1?} elapsed",
            rank,
            started.elapsed()
        );

        Ok(Self {
            documents,
            vectorizer,
            projection,
            doc_matrix,
        })
    }

    /// Transform free text into its latent-space vector using the frozen
    /// vectorizer and projection. This is the one transformation path shared
    /// by index construction and query handling.
    pub fn embed(&self, text: &str) -> Vec<f64> {
        self.projection.transform(&self.vectorizer.transform(text))
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn document(&self, index: usize) -> Option<&str> {
        self.documents.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Reduced document matrix, shape (corpus size x latent rank); row i
    /// belongs to document i.
    pub fn doc_matrix(&self) -> &Array2<f64> {
        &self.doc_matrix
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn projection(&self) -> &LsaProjection {
        &self.projection
    }
}
