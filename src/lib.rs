//! InvestGuard: heuristic fraud-risk scoring for investment content
//!
//! The [`fraud_detector`] module holds the scoring engine. [`api`] wraps it
//! in a small actix-web service.

pub mod api;
pub mod fraud_detector;
pub mod utils;

pub use fraud_detector::{
    AnalysisResult, ContentType, DetectorError, FraudDetector, Language, Recommendation, Sentiment,
    UrgencyLevel,
};
