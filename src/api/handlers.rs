//! HTTP request handlers
//!
//! Thin adapters over [`AppState`]: decode the payload, hand the table to
//! the trainer/predictor, convert errors into structured JSON responses.

use crate::api::response::{FilePayload, HealthResponse, TrainResponse};
use crate::api::state::AppState;
use crate::dataset::parse_workbook;
use crate::error::{ServiceError, ServiceResult};
use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Register the service routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/train", web::post().to(train))
        .route("/predict", web::post().to(predict))
        .route("/health", web::get().to(health));
}

fn decode_payload(payload: Option<web::Json<FilePayload>>) -> ServiceResult<Vec<u8>> {
    let content = payload
        .and_then(|body| body.into_inner().file_content)
        .ok_or(ServiceError::MissingPayload)?;

    BASE64
        .decode(content.as_bytes())
        .map_err(|e| ServiceError::Payload(format!("file_content is not valid base64: {e}")))
}

async fn train(
    state: web::Data<AppState>,
    payload: Option<web::Json<FilePayload>>,
) -> ServiceResult<HttpResponse> {
    let bytes = decode_payload(payload)?;
    let table = parse_workbook(&bytes)?;
    state.train(&table)?;

    Ok(HttpResponse::Ok().json(TrainResponse {
        message: "Model trained and saved successfully.".to_string(),
    }))
}

async fn predict(
    state: web::Data<AppState>,
    payload: Option<web::Json<FilePayload>>,
) -> ServiceResult<HttpResponse> {
    // Model availability is checked before the payload, matching the
    // operation's contract: no model means no work.
    if !state.is_model_ready() {
        return Err(ServiceError::NotReady);
    }

    let bytes = decode_payload(payload)?;
    let table = parse_workbook(&bytes)?;
    let results = state.predict(&table)?;

    Ok(HttpResponse::Ok().json(results))
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        model_loaded: state.is_model_ready(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
