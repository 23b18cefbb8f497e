pub mod config;
pub mod handlers;
pub mod models;

use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::api::config::ApiConfig;
use crate::api::handlers::{analyze_handler, health_check};
use crate::api::models::ErrorResponse;
use crate::fraud_detector::FraudDetector;

/// Slack on top of the content limit for the JSON envelope
const JSON_OVERHEAD_BYTES: usize = 4096;

/// Process-wide facts exposed by the health endpoint
#[derive(Debug, Clone)]
pub struct ServerState {
    pub started_at: Instant,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the API routes
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/analyze").route(web::post().to(analyze_handler)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}

/// JSON extractor settings; malformed bodies get the standard error envelope
fn json_config(config: &ApiConfig) -> web::JsonConfig {
    // characters can take up to four bytes each in UTF-8
    let limit = config.max_content_length.saturating_mul(4) + JSON_OVERHEAD_BYTES;
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        warn!("Rejected malformed request body: {}", err);
        let message = format!("Invalid request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
        InternalError::from_response(err, response).into()
    })
}

/// Starts the HTTP server
///
/// Builds the shared detector once and serves it to every worker until the
/// server is stopped.
///
/// # Arguments
/// * `config` - API configuration
pub async fn start_server(config: ApiConfig) -> Result<()> {
    info!("Starting InvestGuard API server on {}:{}", config.host, config.port);
    debug!("Using configuration: {:?}", config);

    let detector = Arc::new(FraudDetector::new());
    let detector_data = web::Data::new(detector);
    let config_data = web::Data::new(config.clone());
    let state_data = web::Data::new(ServerState::new());

    let server_result = HttpServer::new(move || {
        App::new()
            .app_data(json_config(config_data.get_ref()))
            .app_data(detector_data.clone())
            .app_data(config_data.clone())
            .app_data(state_data.clone())
            .configure(routes)
    })
    .workers(config.workers.max(1))
    .bind((config.host.as_str(), config.port))
    .map_err(|e| {
        error!("Failed to bind to {}:{}: {}", config.host, config.port, e);
        e
    })?
    .run()
    .await;

    if let Err(e) = server_result {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
