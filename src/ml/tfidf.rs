//! TF-IDF vectorizer for text feature extraction.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::{Result, SentimentError};
use crate::ml::sparse::SparseVector;

/// TF-IDF vectorizer for text feature extraction.
///
/// Terms come from the configured analyzer. The vocabulary is learned by
/// [`fit`](Self::fit) and indexed in sorted term order. A document's vector is
/// its raw term counts multiplied by the smoothed IDF
/// `ln((1 + n) / (1 + df)) + 1`, then scaled to unit L2 norm.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Terms by feature index.
    terms: Vec<String>,
    /// Inverse document frequency for each feature.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Create a vectorizer that drops English stop words.
    pub fn english() -> Result<Self> {
        Ok(Self::new(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Fit the vectorizer on training documents.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in documents {
            let unique_terms: HashSet<String> = self.terms_of(doc)?.into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(SentimentError::training(
                "empty vocabulary; the documents contain only stop words or no terms",
            ));
        }

        let mut terms: Vec<String> = document_frequency.keys().cloned().collect();
        terms.sort_unstable();

        let n = documents.len() as f64;
        let idf = terms
            .iter()
            .map(|term| {
                let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
                ((n + 1.0) / (df + 1.0)).ln() + 1.0
            })
            .collect();

        self.vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.terms = terms;
        self.idf = idf;
        self.n_documents = documents.len();

        debug!(
            "Fitted TF-IDF vocabulary of {} terms over {} documents",
            self.terms.len(),
            self.n_documents
        );
        Ok(())
    }

    /// Transform a document into a unit-length TF-IDF vector.
    ///
    /// Terms outside the vocabulary are ignored; a document with no known
    /// term maps to the zero vector.
    pub fn transform(&self, document: &str) -> Result<SparseVector> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.terms_of(document)? {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector::from_sorted_pairs(
            counts
                .into_iter()
                .map(|(idx, count)| (idx, count * self.idf[idx])),
        );

        let norm = vector.norm_squared().sqrt();
        if norm > 0.0 {
            vector.scale(1.0 / norm);
        }
        Ok(vector)
    }

    /// Transform many documents, keeping their order.
    pub fn transform_all(&self, documents: &[String]) -> Result<Vec<SparseVector>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Fit on `documents`, then transform them.
    pub fn fit_transform(&mut self, documents: &[String]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        self.transform_all(documents)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in feature index order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Feature index of a term.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    fn terms_of(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .analyzer
            .analyze(text)?
            .filter(|token| !token.is_stopped())
            .map(|token| token.text)
            .collect())
    }
}
