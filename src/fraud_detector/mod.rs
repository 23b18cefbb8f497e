pub mod keywords;
pub mod patterns;
pub mod text_analyzer;
pub mod url_analyzer;
pub mod classifier;
pub mod detector;
#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use detector::FraudDetector;

/// Upper bound of the risk scale
pub const MAX_RISK_SCORE: f64 = 10.0;

/// Indicator emitted for every media submission
pub const MEDIA_REVIEW_INDICATOR: &str = "Media content requires manual review";

/// Fixed score given to media submissions
pub const MEDIA_RISK_SCORE: f64 = 3.0;

/// Errors raised when a caller breaks the detector's input contract
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Kind of content submitted for analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Url,
    Image,
    Video,
    Audio,
    Media,
}

impl ContentType {
    /// Image, video and audio are not analyzed, only flagged for review
    pub fn is_media(&self) -> bool {
        !matches!(self, ContentType::Text | ContentType::Url)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Url => "url",
            ContentType::Image => "image",
            ContentType::Video => "video",
            ContentType::Audio => "audio",
            ContentType::Media => "media",
        }
    }
}

impl FromStr for ContentType {
    type Err = DetectorError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ContentType::Text),
            "url" => Ok(ContentType::Url),
            "image" => Ok(ContentType::Image),
            "video" => Ok(ContentType::Video),
            "audio" => Ok(ContentType::Audio),
            "media" => Ok(ContentType::Media),
            other => Err(DetectorError::InvalidArgument(format!(
                "unrecognized content type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages with a dedicated keyword list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Tamil];

    /// Resolves a language tag, falling back to English for anything unknown
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hindi" | "hi" => Language::Hindi,
            "tamil" | "ta" => Language::Tamil,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    #[default]
    Neutral,
    OverlyPositive,
    Cautious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Action label derived from the final risk score
///
/// Text content maps onto `Safe`, `ModerateCaution`, `HighCaution` and
/// `BlockImmediately`; URLs map onto `Safe`, `CautionAdvised` and `BlockUrl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    #[default]
    Safe,
    ModerateCaution,
    HighCaution,
    BlockImmediately,
    CautionAdvised,
    BlockUrl,
}

/// Outcome of a single analysis call
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Score between 0.0 and 10.0
    pub risk_score: f64,

    /// One entry per rule match, in evaluation order
    pub indicators: Vec<String>,

    pub sentiment: Sentiment,

    pub urgency_level: UrgencyLevel,

    /// Whether the content pushes the reader towards a private channel
    pub contact_pressure: bool,

    /// Raw substrings matched by the pattern table
    pub suspicious_patterns: Vec<String>,

    pub recommendation: Recommendation,
}

impl AnalysisResult {
    /// Fixed low-confidence result for content the detector cannot inspect
    pub fn media_review() -> Self {
        Self {
            risk_score: MEDIA_RISK_SCORE,
            indicators: vec![MEDIA_REVIEW_INDICATOR.to_string()],
            ..Self::default()
        }
    }
}

/// Clamps an accumulated score onto the 0-10 scale
pub(crate) fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, MAX_RISK_SCORE)
}

/// Shortens content for log lines
pub(crate) fn preview(value: &str) -> String {
    const PREVIEW_CHARS: usize = 40;
    if value.chars().count() > PREVIEW_CHARS {
        let head: String = value.chars().take(PREVIEW_CHARS).collect();
        format!("{}... (length: {})", head, value.chars().count())
    } else {
        value.to_string()
    }
}
