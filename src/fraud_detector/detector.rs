use tracing::{debug, info, instrument, warn};

use super::keywords::KeywordTable;
use super::patterns::PatternTable;
use super::text_analyzer::TextAnalyzer;
use super::url_analyzer::analyze_url;
use super::{preview, AnalysisResult, ContentType, DetectorError, Language};

/// Heuristic fraud scorer for text and URL submissions
///
/// The detector holds only read-only tables, so a single instance can be
/// shared across threads behind an `Arc` and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct FraudDetector {
    keywords: KeywordTable,
    patterns: PatternTable,
}

impl FraudDetector {
    /// Creates a detector with the built-in keyword and pattern tables
    pub fn new() -> Self {
        Self::with_tables(KeywordTable::new(), PatternTable::new())
    }

    pub fn with_tables(keywords: KeywordTable, patterns: PatternTable) -> Self {
        debug!(
            "Fraud detector ready: {} languages, {} patterns",
            keywords.languages().len(),
            patterns.len()
        );
        Self { keywords, patterns }
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    fn text_analyzer(&self) -> TextAnalyzer<'_> {
        TextAnalyzer::new(self.keywords(), self.patterns())
    }

    /// Analyzes content and returns its risk assessment
    ///
    /// Text and URLs are scored; every media type yields the fixed
    /// manual-review result. This never fails.
    ///
    /// # Arguments
    /// * `content` - Text or URL to analyze
    /// * `content_type` - How to interpret `content`
    /// * `language` - Keyword set to use for text content
    #[instrument(
        level = "debug",
        skip_all,
        fields(content_type = %content_type, language = %language)
    )]
    pub fn analyze(
        &self,
        content: &str,
        content_type: ContentType,
        language: Language,
    ) -> AnalysisResult {
        debug!("Analyzing content: {}", preview(content));
        let result = match content_type {
            media if media.is_media() => AnalysisResult::media_review(),
            ContentType::Url => analyze_url(content),
            _ => self.text_analyzer().analyze(content, language),
        };
        info!(
            "Analysis complete: score={}, indicators={}, recommendation={:?}",
            result.risk_score,
            result.indicators.len(),
            result.recommendation
        );
        result
    }

    /// Analyzes untyped caller input
    ///
    /// Resolves the content type and language tags before scoring. Missing
    /// content and unrecognized content types are rejected; an unknown or
    /// missing language falls back to English.
    pub fn analyze_raw(
        &self,
        content: Option<&str>,
        content_type: &str,
        language: Option<&str>,
    ) -> Result<AnalysisResult, DetectorError> {
        let content = content.ok_or_else(|| {
            warn!("Rejected analysis request without content");
            DetectorError::InvalidArgument("content is required".to_string())
        })?;
        let content_type: ContentType = content_type.parse().map_err(|e| {
            warn!("Rejected analysis request: {}", e);
            e
        })?;
        let language = language.map(Language::from_tag).unwrap_or_default();
        Ok(self.analyze(content, content_type, language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraud_detector::keywords::{KeywordSet, TierBounds};

    #[test]
    fn test_media_short_circuit() {
        let detector = FraudDetector::new();
        let media = [
            ContentType::Image,
            ContentType::Video,
            ContentType::Audio,
            ContentType::Media,
        ];
        for content_type in media {
            assert!(content_type.is_media());
            let result =
                detector.analyze("GUARANTEED RETURNS act now", content_type, Language::English);
            assert_eq!(result, AnalysisResult::media_review());
        }
    }

    #[test]
    fn test_custom_tables_drive_text_scoring() {
        let set = KeywordSet::new(
            &["moonshot"],
            TierBounds { high: 1, medium: 0, urgency: 0, contact_pressure: 0 },
        );
        let keywords = KeywordTable::new().with_set(Language::English, set);
        let patterns = PatternTable::new().with_rule("ponzi", r"ponzi").unwrap();
        let detector = FraudDetector::with_tables(keywords, patterns);
        assert_eq!(detector.patterns().len(), PatternTable::new().len() + 1);

        let result = detector.analyze("a moonshot ponzi", ContentType::Text, Language::English);
        assert_eq!(
            result.indicators,
            vec!["High-risk keyword: 'moonshot'", "Suspicious pattern found: ponzi"]
        );
        assert_eq!(result.risk_score, 3.0);

        let replaced = detector.analyze("guaranteed returns", ContentType::Text, Language::English);
        assert!(replaced.indicators.is_empty());
    }

    #[test]
    fn test_analyze_raw_rejects_missing_content() {
        let detector = FraudDetector::new();
        let err = detector.analyze_raw(None, "text", None).unwrap_err();
        assert!(matches!(err, DetectorError::InvalidArgument(_)));
        assert!(err.to_string().contains("content is required"));
    }

    #[test]
    fn test_analyze_raw_rejects_unknown_type() {
        let detector = FraudDetector::new();
        let err = detector.analyze_raw(Some("hello"), "pdf", None).unwrap_err();
        assert_eq!(
            err,
            DetectorError::InvalidArgument("unrecognized content type 'pdf'".to_string())
        );
    }

    #[test]
    fn test_analyze_raw_accepts_tags_loosely() {
        let detector = FraudDetector::new();
        let result = detector.analyze_raw(Some("example.com"), " URL ", Some("klingon")).unwrap();
        assert_eq!(result.indicators, vec!["Non-standard URL format"]);
    }
}
