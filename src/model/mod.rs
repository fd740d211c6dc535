//! Classification model
//!
//! TF-IDF features, a linear-kernel binary classifier, and the persisted
//! pipeline artifact combining the two.

mod pipeline;
mod svm;
mod vectorizer;

pub use pipeline::{label_name, SentimentPipeline, LABEL_NEGATIVE, LABEL_POSITIVE, LABEL_UNKNOWN};
pub use svm::{LinearSvc, SvmError};
pub use vectorizer::TfIdfVectorizer;
