//! TF-IDF vectorization
//!
//! Term Frequency - Inverse Document Frequency features over a
//! whitespace-tokenized, already-preprocessed corpus.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer with smoothed IDF and L2-normalized rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term -> column index
    vocabulary: HashMap<String, usize>,
    /// Column index -> term
    terms: Vec<String>,
    /// IDF value per term
    idf: Vec<f64>,
    /// Add-one smoothing of document frequencies
    smooth_idf: bool,
    /// L2-normalize output rows
    normalize: bool,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        Self {
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            idf: Vec::new(),
            smooth_idf: true,
            normalize: true,
        }
    }

    /// Disable IDF smoothing
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Disable L2 normalization
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Number of learned terms
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Learned vocabulary
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Learn the vocabulary and IDF values from a corpus
    pub fn fit(&mut self, documents: &[String]) {
        let n_docs = documents.len() as f64;

        // Document frequency per term
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.split_whitespace().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Sorted for a deterministic term order
        let mut sorted: Vec<(&str, usize)> = doc_freq.into_iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        self.vocabulary.clear();
        self.terms.clear();
        self.idf.clear();

        for (idx, (term, df)) in sorted.into_iter().enumerate() {
            self.vocabulary.insert(term.to_string(), idx);
            self.terms.push(term.to_string());

            let (df, n) = if self.smooth_idf {
                (df as f64 + 1.0, n_docs + 1.0)
            } else {
                ((df as f64).max(1.0), n_docs)
            };
            self.idf.push((n / df).ln() + 1.0);
        }
    }

    /// Transform documents into a dense feature matrix, one row per
    /// document. Terms unseen during fit are ignored.
    pub fn transform(&self, documents: &[String]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.terms.len()));

        for (row, doc) in documents.iter().enumerate() {
            for term in doc.split_whitespace() {
                if let Some(&idx) = self.vocabulary.get(term) {
                    matrix[[row, idx]] += 1.0;
                }
            }

            for idx in 0..self.terms.len() {
                matrix[[row, idx]] *= self.idf[idx];
            }

            if self.normalize {
                let norm: f64 = matrix
                    .row(row)
                    .iter()
                    .map(|x| x * x)
                    .sum::<f64>()
                    .sqrt();
                if norm > 0.0 {
                    for idx in 0..self.terms.len() {
                        matrix[[row, idx]] /= norm;
                    }
                }
            }
        }

        matrix
    }

    /// Fit on the corpus and transform it in one pass
    pub fn fit_transform(&mut self, documents: &[String]) -> Array2<f64> {
        self.fit(documents);
        self.transform(documents)
    }
}
