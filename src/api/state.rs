//! Application state
//!
//! Owns the loaded normalization dictionary, the preprocessing pipeline,
//! and the active classification pipeline. The active pipeline sits behind
//! a read-write lock: predict takes a read guard, train fits outside the
//! lock and swaps the new artifact in under a short write guard.

use crate::api::response::PredictionRecord;
use crate::config::ServiceConfig;
use crate::dataset::{reshape_for_prediction, reshape_for_training, WideTable};
use crate::error::{ServiceError, ServiceResult};
use crate::model::{label_name, SentimentPipeline};
use crate::preprocess::{NormalizationDict, Preprocessor};
use parking_lot::RwLock;
use std::path::PathBuf;
use tracing::{info, warn};

/// Shared service state, one instance per process
pub struct AppState {
    preprocessor: Preprocessor,
    pipeline: RwLock<Option<SentimentPipeline>>,
    model_path: PathBuf,
}

impl AppState {
    /// Load startup resources.
    ///
    /// Both the dictionary file and the model artifact may be missing:
    /// normalization degrades to identity, and predict stays unavailable
    /// until the first successful train call.
    pub fn initialize(config: &ServiceConfig) -> Self {
        let dictionary = NormalizationDict::load_or_default(&config.dictionary_path);
        let preprocessor = Preprocessor::new(dictionary);

        let pipeline = if config.model_path.exists() {
            match SentimentPipeline::load(&config.model_path) {
                Ok(p) => {
                    info!(path = %config.model_path.display(), "model loaded");
                    Some(p)
                }
                Err(e) => {
                    warn!(
                        path = %config.model_path.display(),
                        error = %e,
                        "model artifact unreadable, predict unavailable until retrain"
                    );
                    None
                }
            }
        } else {
            info!(
                path = %config.model_path.display(),
                "no model artifact found, predict unavailable until first train"
            );
            None
        };

        Self {
            preprocessor,
            pipeline: RwLock::new(pipeline),
            model_path: config.model_path.clone(),
        }
    }

    /// Build a state around an explicit preprocessor and model path
    pub fn with_preprocessor(preprocessor: Preprocessor, model_path: PathBuf) -> Self {
        Self {
            preprocessor,
            pipeline: RwLock::new(None),
            model_path,
        }
    }

    /// Whether a trained pipeline is currently active
    pub fn is_model_ready(&self) -> bool {
        self.pipeline.read().is_some()
    }

    /// Train a new pipeline from a wide spreadsheet and activate it.
    ///
    /// The previous pipeline stays authoritative until the new one has
    /// been fitted and persisted; a failure anywhere leaves it untouched.
    pub fn train(&self, table: &WideTable) -> ServiceResult<()> {
        let records = reshape_for_training(table)?;

        let texts: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        let labels: Vec<i64> = records.iter().map(|r| r.label).collect();
        let processed = self.preprocessor.process_batch(&texts);

        let pipeline = SentimentPipeline::fit(&processed, &labels)
            .map_err(|e| ServiceError::Fit(format!("An error occurred during training: {e}")))?;

        pipeline
            .save(&self.model_path)
            .map_err(|e| ServiceError::Io(e.to_string()))?;

        info!(samples = records.len(), "model trained and activated");
        *self.pipeline.write() = Some(pipeline);
        Ok(())
    }

    /// Classify every question cell of a wide spreadsheet.
    ///
    /// Output order matches the reshaped input order exactly.
    pub fn predict(&self, table: &WideTable) -> ServiceResult<Vec<PredictionRecord>> {
        let guard = self.pipeline.read();
        let pipeline = guard.as_ref().ok_or(ServiceError::NotReady)?;

        let records = reshape_for_prediction(table)?;
        let texts: Vec<String> = records.iter().map(|r| r.text.clone()).collect();
        let processed = self.preprocessor.process_batch(&texts);

        let classes = pipeline.predict(&processed).map_err(|e| {
            ServiceError::Internal(format!("An error occurred during prediction: {e}"))
        })?;

        Ok(records
            .into_iter()
            .zip(classes)
            .map(|(record, class)| PredictionRecord {
                text: record.text,
                sentimen_label: label_name(class).to_string(),
                source_question: record.source_question,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;
    use tempfile::tempdir;

    fn state(dir: &tempfile::TempDir) -> AppState {
        let preprocessor = Preprocessor::new(NormalizationDict::default());
        AppState::with_preprocessor(preprocessor, dir.path().join("model.bin"))
    }

    fn training_table() -> WideTable {
        WideTable::new(
            vec!["pertanyaan 1".into(), "label 1".into()],
            vec![
                vec![CellValue::Text("saya senang".into()), CellValue::Number(1.0)],
                vec![CellValue::Text("saya sedih".into()), CellValue::Number(0.0)],
            ],
        )
    }

    fn prediction_table() -> WideTable {
        WideTable::new(
            vec!["pertanyaan 1".into()],
            vec![
                vec![CellValue::Text("saya senang".into())],
                vec![CellValue::Text("saya sedih".into())],
            ],
        )
    }

    #[test]
    fn test_predict_before_train_is_not_ready() {
        let dir = tempdir().unwrap();
        let state = state(&dir);
        let err = state.predict(&prediction_table()).unwrap_err();
        assert!(matches!(err, ServiceError::NotReady));
    }

    #[test]
    fn test_train_then_predict_round_trip() {
        let dir = tempdir().unwrap();
        let state = state(&dir);

        state.train(&training_table()).unwrap();
        assert!(state.is_model_ready());
        assert!(dir.path().join("model.bin").exists());

        let results = state.predict(&prediction_table()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sentimen_label, "Positif");
        assert_eq!(results[1].sentimen_label, "Negatif");
        assert_eq!(results[0].text, "saya senang");
        assert_eq!(results[0].source_question, "pertanyaan 1");
    }

    #[test]
    fn test_failed_train_keeps_previous_model() {
        let dir = tempdir().unwrap();
        let state = state(&dir);
        state.train(&training_table()).unwrap();

        let bad_table = WideTable::new(
            vec!["unrelated".into()],
            vec![vec![CellValue::Text("x".into())]],
        );
        let err = state.train(&bad_table).unwrap_err();
        assert!(matches!(err, ServiceError::Schema(_)));

        // Previous model still answers
        let results = state.predict(&prediction_table()).unwrap();
        assert_eq!(results[0].sentimen_label, "Positif");
    }

    #[test]
    fn test_prediction_order_matches_input_order() {
        let dir = tempdir().unwrap();
        let state = state(&dir);
        state.train(&training_table()).unwrap();

        let shuffled = WideTable::new(
            vec!["pertanyaan 1".into()],
            vec![
                vec![CellValue::Text("saya sedih".into())],
                vec![CellValue::Text("saya senang".into())],
                vec![CellValue::Text("saya sedih".into())],
            ],
        );
        let results = state.predict(&shuffled).unwrap();
        let labels: Vec<&str> = results.iter().map(|r| r.sentimen_label.as_str()).collect();
        assert_eq!(labels, ["Negatif", "Positif", "Negatif"]);
    }

    #[test]
    fn test_initialize_reloads_persisted_model() {
        let dir = tempdir().unwrap();
        let config = ServiceConfig {
            model_path: dir.path().join("model.bin"),
            dictionary_path: dir.path().join("missing_dict.txt"),
            ..ServiceConfig::default()
        };

        let first = AppState::initialize(&config);
        assert!(!first.is_model_ready());
        first.train(&training_table()).unwrap();

        let second = AppState::initialize(&config);
        assert!(second.is_model_ready());
        let results = second.predict(&prediction_table()).unwrap();
        assert_eq!(results[0].sentimen_label, "Positif");
    }
}
