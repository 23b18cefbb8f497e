use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fraud_detector::classifier::{AlertSeverity, AnalysisInsights};
use crate::fraud_detector::{AnalysisResult, ContentType, Language};

/// Request to analyze a piece of content
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzeRequest {
    /// Text or URL to analyze
    pub content: Option<String>,

    /// Content type tag; "text" when absent
    pub content_type: Option<String>,

    /// Language tag for keyword matching
    pub language: Option<String>,
}

/// Response for an analysis request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisResponse {
    /// Identifier callers can use to store or reference this analysis
    pub analysis_id: Uuid,

    pub content_type: ContentType,

    /// Keyword set actually used
    pub language: Language,

    /// Scorer output, unchanged
    pub analysis: AnalysisResult,

    /// Derived fraud type, confidence and platform risk
    pub insights: AnalysisInsights,

    /// Alert a caller should raise, if any
    pub alert_severity: Option<AlertSeverity>,

    /// Time spent scoring, in milliseconds
    pub processing_time_ms: f64,

    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResponse {
    pub fn new(
        content_type: ContentType,
        language: Language,
        analysis: AnalysisResult,
        processing_time_ms: f64,
    ) -> Self {
        let insights = AnalysisInsights::from_result(&analysis, content_type);
        let alert_severity = crate::fraud_detector::classifier::alert_severity(analysis.risk_score);
        Self {
            analysis_id: Uuid::new_v4(),
            content_type,
            language,
            analysis,
            insights,
            alert_severity,
            processing_time_ms,
            analyzed_at: Utc::now(),
        }
    }
}

/// Health status response for the /health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: always "healthy" while the server answers
    pub status: String,

    pub version: String,

    /// Seconds since the server started
    pub uptime_secs: u64,

    /// Languages with a dedicated keyword set
    pub languages: Vec<Language>,
}

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Status indicator: error
    pub status: String,

    /// Error message details
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
