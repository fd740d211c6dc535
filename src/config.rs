//! Service configuration

use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";

    /// Bind port
    pub const PORT: u16 = 5001;

    /// Serialized model artifact path
    pub const MODEL_FILE: &str = "svm_model.bin";

    /// Tab-separated normalization dictionary path
    pub const DICTIONARY_FILE: &str = "kamus_norm.txt";
}

/// Runtime configuration for the sentiment service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host to bind the HTTP server to
    pub host: String,
    /// Port to bind the HTTP server to
    pub port: u16,
    /// Where the fitted pipeline is persisted
    pub model_path: PathBuf,
    /// Slang/abbreviation normalization dictionary
    pub dictionary_path: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            model_path: PathBuf::from(defaults::MODEL_FILE),
            dictionary_path: PathBuf::from(defaults::DICTIONARY_FILE),
        }
    }
}
