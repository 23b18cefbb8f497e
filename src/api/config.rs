use serde::Deserialize;

use crate::fraud_detector::Language;

/// Default upper bound on submitted content, in characters
pub const MAX_CONTENT_LENGTH: usize = 100_000;

/// Configuration for the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory for log files
    pub log_dir: String,

    /// Longest content accepted by /analyze, in characters
    pub max_content_length: usize,

    /// Keyword set used when a request names no language
    pub default_language: Language,

    /// Number of HTTP worker threads
    pub workers: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_dir: "logs".to_string(),
            max_content_length: MAX_CONTENT_LENGTH,
            default_language: Language::English,
            workers: 4,
        }
    }
}
