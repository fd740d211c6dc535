//! Fitted classification pipeline
//!
//! A trained TF-IDF vectorizer + linear SVM pair, persisted as a single
//! serialized artifact. Once fit the pipeline is immutable and
//! deterministic for a given input.

use crate::model::svm::{LinearSvc, SvmError};
use crate::model::vectorizer::TfIdfVectorizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sentiment class names
pub const LABEL_NEGATIVE: &str = "Negatif";
pub const LABEL_POSITIVE: &str = "Positif";
pub const LABEL_UNKNOWN: &str = "Unknown";

/// Map a predicted class to its display label.
///
/// Training is strictly binary, so the fallback arm is defensive only.
pub fn label_name(class: i64) -> &'static str {
    match class {
        0 => LABEL_NEGATIVE,
        1 => LABEL_POSITIVE,
        _ => LABEL_UNKNOWN,
    }
}

/// Trained vectorizer + classifier artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: LinearSvc,
}

impl SentimentPipeline {
    /// Fit a new pipeline on preprocessed texts and their {0, 1} labels
    pub fn fit(texts: &[String], labels: &[i64]) -> Result<Self, SvmError> {
        let mut vectorizer = TfIdfVectorizer::new();
        let features = vectorizer.fit_transform(texts);

        let mut classifier = LinearSvc::default();
        let y = ndarray::Array1::from_vec(labels.to_vec());
        classifier.fit(&features, &y)?;

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Classify preprocessed texts, one class per input, order-preserving
    pub fn predict(&self, texts: &[String]) -> Result<Vec<i64>, SvmError> {
        let features = self.vectorizer.transform(texts);
        Ok(self.classifier.predict(&features)?.to_vec())
    }

    /// Persist the artifact, overwriting any prior file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let bytes = bincode::serialize(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a previously persisted artifact
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let bytes = fs::read(path)?;
        let pipeline = bincode::deserialize(&bytes)?;
        Ok(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn toy_corpus() -> (Vec<String>, Vec<i64>) {
        (
            vec![
                "senang ajar".to_string(),
                "sedih bosan".to_string(),
                "senang sekolah".to_string(),
                "sedih kecewa".to_string(),
            ],
            vec![1, 0, 1, 0],
        )
    }

    #[test]
    fn test_fit_predict_round_trip() {
        let (texts, labels) = toy_corpus();
        let pipeline = SentimentPipeline::fit(&texts, &labels).unwrap();

        let predictions = pipeline.predict(&texts).unwrap();
        assert_eq!(predictions, labels);
    }

    #[test]
    fn test_predict_is_order_preserving() {
        let (texts, labels) = toy_corpus();
        let pipeline = SentimentPipeline::fit(&texts, &labels).unwrap();

        let reversed: Vec<String> = texts.iter().rev().cloned().collect();
        let predictions = pipeline.predict(&reversed).unwrap();
        let expected: Vec<i64> = labels.into_iter().rev().collect();
        assert_eq!(predictions, expected);
    }

    #[test]
    fn test_save_load_round_trip() {
        let (texts, labels) = toy_corpus();
        let pipeline = SentimentPipeline::fit(&texts, &labels).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("model.bin");
        pipeline.save(&path).unwrap();

        let loaded = SentimentPipeline::load(&path).unwrap();
        assert_eq!(loaded.predict(&texts).unwrap(), pipeline.predict(&texts).unwrap());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(SentimentPipeline::load("no-such-model.bin").is_err());
    }

    #[test]
    fn test_fit_on_empty_corpus_fails() {
        assert!(SentimentPipeline::fit(&[], &[]).is_err());
    }

    #[test]
    fn test_label_names() {
        assert_eq!(label_name(0), "Negatif");
        assert_eq!(label_name(1), "Positif");
        assert_eq!(label_name(7), "Unknown");
        assert_eq!(label_name(-1), "Unknown");
    }
}
