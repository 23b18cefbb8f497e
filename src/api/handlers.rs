use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::api::config::ApiConfig;
use crate::api::models::{AnalysisResponse, AnalyzeRequest, ErrorResponse, HealthStatus};
use crate::api::ServerState;
use crate::fraud_detector::{ContentType, FraudDetector, Language};

/// HTTP handler for analysis requests
///
/// Validates the request, scores the content on the blocking pool and wraps
/// the result in an `AnalysisResponse`.
///
/// # Arguments
/// * `request` - JSON request with content, content type and language
/// * `detector` - Shared fraud detector
/// * `config` - API configuration
///
/// # Returns
/// * HTTP response with the analysis or error information
#[instrument(skip_all)]
pub async fn analyze_handler(
    request: web::Json<AnalyzeRequest>,
    detector: web::Data<Arc<FraudDetector>>,
    config: web::Data<ApiConfig>,
) -> impl Responder {
    let request = request.into_inner();

    let content = match request.content {
        Some(content) if !content.trim().is_empty() => content,
        _ => {
            warn!("Rejected analysis request without content");
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("Please provide content to analyze."));
        }
    };

    let requested_type = request.content_type.as_deref().unwrap_or("text");
    let content_type = match requested_type.parse::<ContentType>() {
        Ok(content_type) => content_type,
        Err(e) => {
            warn!("Rejected analysis request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string()));
        }
    };

    let length = content.chars().count();
    if length > config.max_content_length {
        warn!("Rejected content of {} characters (limit {})", length, config.max_content_length);
        return HttpResponse::PayloadTooLarge().json(ErrorResponse::new(format!(
            "Content exceeds maximum length of {} characters",
            config.max_content_length
        )));
    }

    let language = request
        .language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or(config.default_language);

    info!(
        "Received {} analysis request ({} characters, language {})",
        content_type, length, language
    );

    let detector = detector.get_ref().clone();
    let start = Instant::now();
    let scored = web::block(move || detector.analyze(&content, content_type, language)).await;
    let analysis = match scored {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("Analysis task failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new("Analysis failed."));
        }
    };
    let processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!("Analysis finished in {:.3} ms", processing_time_ms);

    HttpResponse::Ok().json(AnalysisResponse::new(
        content_type,
        language,
        analysis,
        processing_time_ms,
    ))
}

/// Health check endpoint for monitoring service status
#[instrument(skip_all)]
pub async fn health_check(
    state: web::Data<ServerState>,
    detector: web::Data<Arc<FraudDetector>>,
) -> impl Responder {
    let uptime_secs = state.started_at.elapsed().as_secs();
    debug!("Health check: uptime={}s", uptime_secs);
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs,
        languages: detector.keywords().languages(),
    })
}
