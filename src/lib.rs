//! # Survey Sentiment Service
//!
//! HTTP service for training and serving a binary Indonesian sentiment
//! classifier over wide survey spreadsheets.
//!
//! ## Modules
//!
//! - `preprocess` - Text cleaning, normalization, stopword removal,
//!   lemmatization
//! - `dataset` - Spreadsheet decoding and wide-to-long reshaping
//! - `model` - TF-IDF vectorizer, linear SVM, persisted pipeline artifact
//! - `api` - HTTP endpoints and shared application state
//!
//! ## Example Usage
//!
//! ```no_run
//! use survey_sentiment::api::AppState;
//! use survey_sentiment::config::ServiceConfig;
//! use survey_sentiment::dataset::parse_workbook;
//!
//! let config = ServiceConfig::default();
//! let state = AppState::initialize(&config);
//!
//! let bytes = std::fs::read("survey.xlsx").unwrap();
//! let table = parse_workbook(&bytes).unwrap();
//! state.train(&table).unwrap();
//!
//! let results = state.predict(&table).unwrap();
//! for record in results {
//!     println!("{} -> {}", record.text, record.sentimen_label);
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod preprocess;

pub use api::{AppState, PredictionRecord};
pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use model::SentimentPipeline;
pub use preprocess::Preprocessor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
