use super::types::SparseVector;
use anyhow::Result;
use rayon::prelude::*;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Terms are lowercase alphabetic runs of two or more characters.
const TOKEN_PATTERN: &str = r"\b[a-z][a-z]+\b";

/// TF-IDF vectorizer fitted over the whole corpus.
///
/// Holds the frozen vocabulary, per-feature IDF weights, and the stopword
/// set. Both the index build and every incoming query go through the same
/// `transform`, so index-time and query-time tokenization can never diverge.
///
/// Weighting follows the usual smoothed formulation: raw term count times
/// `ln((1 + n) / (1 + df)) + 1`, with each document vector L2-normalized.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    stopwords: HashSet<String>,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    /// Fit vocabulary and IDF weights over the document collection.
    ///
    /// Feature indices are assigned in sorted term order, so refitting the
    /// same corpus always yields the same vocabulary. Fails if no term
    /// survives stopword removal.
    pub fn fit(documents: &[String], stopwords: HashSet<String>) -> Result<Self> {
        if documents.is_empty() {
            anyhow::bail!("cannot fit vectorizer on an empty corpus");
        }

        let token_pattern = Regex::new(TOKEN_PATTERN).unwrap();

        let tokenized: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| tokenize_with(&token_pattern, &stopwords, doc))
            .collect();

        // Document frequency per term; BTreeMap keeps term order sorted
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let distinct: HashSet<&String> = tokens.iter().collect();
            for term in distinct {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            anyhow::bail!("vocabulary is empty after stopword removal");
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (feature_index, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term, feature_index);
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
        }

        Ok(Self {
            vocabulary,
            idf,
            stopwords,
            token_pattern,
        })
    }

    /// Transform text into a sparse L2-normalized TF-IDF vector over the
    /// frozen vocabulary.
    ///
    /// Out-of-vocabulary terms contribute nothing; empty or all-unknown text
    /// yields an empty vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in self.tokenize(text) {
            if let Some(&feature_index) = self.vocabulary.get(&token) {
                *counts.entry(feature_index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(feature_index, count)| (feature_index, count * self.idf[feature_index]))
            .collect();
        vector.sort_unstable_by_key(|&(feature_index, _)| feature_index);

        let norm = vector.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in vector.iter_mut() {
                *weight /= norm;
            }
        }

        vector
    }

    /// Split text into lowercase terms, dropping stopwords.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize_with(&self.token_pattern, &self.stopwords, text)
    }

    /// Number of features in the frozen vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a feature.
    pub fn idf(&self, feature_index: usize) -> Option<f64> {
        self.idf.get(feature_index).copied()
    }
}

fn tokenize_with(pattern: &Regex, stopwords: &HashSet<String>, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|token| !stopwords.contains(token))
        .collect()
}
