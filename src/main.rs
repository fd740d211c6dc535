//! Survey sentiment service entry point
//!
//! ```bash
//! cargo run -- --host 127.0.0.1 --port 5001
//! cargo run -- --model-path svm_model.bin --dict-path kamus_norm.txt
//! ```

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use survey_sentiment::api::{configure_routes, AppState};
use survey_sentiment::config::{defaults, ServiceConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "survey-sentiment")]
#[command(version)]
#[command(about = "Sentiment classification service for survey spreadsheets", long_about = None)]
struct Cli {
    /// Host to bind to
    #[arg(long, default_value = defaults::HOST)]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = defaults::PORT)]
    port: u16,

    /// Path of the persisted model artifact
    #[arg(long, default_value = defaults::MODEL_FILE)]
    model_path: PathBuf,

    /// Path of the tab-separated normalization dictionary
    #[arg(long, default_value = defaults::DICTIONARY_FILE)]
    dict_path: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = ServiceConfig {
        host: cli.host,
        port: cli.port,
        model_path: cli.model_path,
        dictionary_path: cli.dict_path,
    };

    let state = web::Data::new(AppState::initialize(&config));

    info!(host = %config.host, port = config.port, "starting server");
    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure_routes))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    Ok(())
}
