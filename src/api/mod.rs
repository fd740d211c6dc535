//! HTTP endpoint layer
//!
//! Request/response adapters for the train and predict operations plus the
//! shared application state they run against.

mod handlers;
mod response;
mod state;

pub use handlers::configure_routes;
pub use response::{FilePayload, HealthResponse, PredictionRecord, TrainResponse};
pub use state::AppState;
