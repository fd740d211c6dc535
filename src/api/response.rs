//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Body of both the train and predict requests
#[derive(Debug, Deserialize)]
pub struct FilePayload {
    /// Base64-encoded xlsx file content
    pub file_content: Option<String>,
}

/// Train acknowledgment
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub message: String,
}

/// One classified observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub text: String,
    pub sentimen_label: String,
    pub source_question: String,
}

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub version: &'static str,
}
