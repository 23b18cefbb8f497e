use super::classifier::{alert_severity, AlertSeverity, AnalysisInsights, FraudType};
use super::text_analyzer::text_recommendation;
use super::url_analyzer::url_recommendation;
use super::*;

const SCAM_MESSAGE: &str = "GUARANTEED RETURNS! Act now, limited time offer! \
                            WhatsApp me at +919999999999 for ₹5 lakh profit!";
const SHORTENER_URL: &str = "bit.ly/xyz123?password=abc&otp=123";

fn has(result: &AnalysisResult, indicator: &str) -> bool {
    result.indicators.iter().any(|i| i == indicator)
}

#[test]
fn test_scam_message_blocks_immediately() {
    let detector = FraudDetector::new();
    let result = detector.analyze(SCAM_MESSAGE, ContentType::Text, Language::English);

    assert!(has(&result, "High-risk keyword: 'guaranteed returns'"));
    assert!(has(&result, "Urgency indicator: 'act now'"));
    assert!(has(&result, "Urgency indicator: 'limited time'"));
    assert!(has(&result, "Contact pressure: 'whatsapp'"));
    assert!(has(&result, "Suspicious pattern found: phone number"));
    assert!(has(&result, "Suspicious pattern found: amount in lakhs"));
    assert!(has(&result, "Shouted phrase in capital letters: 'GUARANTEED RETURNS'"));

    assert!(result.suspicious_patterns.contains(&"+919999999999".to_string()));
    assert!(result.suspicious_patterns.contains(&"₹5 lakh".to_string()));
    assert_eq!(result.urgency_level, UrgencyLevel::High);
    assert!(result.contact_pressure);
    assert_eq!(result.risk_score, 10.0);
    assert_eq!(result.recommendation, Recommendation::BlockImmediately);
}

#[test]
fn test_indicator_order_follows_evaluation_order() {
    let detector = FraudDetector::new();
    let result = detector.analyze(SCAM_MESSAGE, ContentType::Text, Language::English);
    let position = |needle: &str| {
        result
            .indicators
            .iter()
            .position(|i| i.starts_with(needle))
            .unwrap()
    };

    assert!(position("High-risk keyword") < position("Urgency indicator"));
    assert!(position("Urgency indicator") < position("Contact pressure"));
    assert!(position("Contact pressure") < position("Suspicious pattern found"));
    assert!(position("Suspicious pattern found") < position("Shouted phrase"));
}

#[test]
fn test_shortener_url_with_credentials_is_blocked() {
    let detector = FraudDetector::new();
    let result = detector.analyze(SHORTENER_URL, ContentType::Url, Language::English);

    assert_eq!(
        result.indicators,
        vec![
            "Suspicious domain: bit.ly",
            "Non-standard URL format",
            "Suspicious URL parameter: 'password'",
            "Suspicious URL parameter: 'otp'",
            "Use of URL shortener detected",
        ]
    );
    assert_eq!(result.risk_score, 6.5);
    assert_eq!(result.recommendation, Recommendation::BlockUrl);
    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert!(result.suspicious_patterns.is_empty());
}

#[test]
fn test_empty_text_is_safe() {
    let detector = FraudDetector::new();
    let result = detector.analyze("", ContentType::Text, Language::English);
    assert!(result.risk_score <= 1.0);
    assert_eq!(result.recommendation, Recommendation::Safe);
    assert!(!result.contact_pressure);
    assert_eq!(result.urgency_level, UrgencyLevel::Low);
    assert_eq!(result.sentiment, Sentiment::Neutral);
}

#[test]
fn test_degenerate_inputs_never_panic() {
    let detector = FraudDetector::new();
    let inputs = [
        "",
        "          ",
        "!!!???...,,,",
        "\u{0}\u{1}\u{2}",
        "😀😀😀😀😀😀😀😀",
        "١٢٣٤٥٦٧٨٩٠١٢",
        "ÀÉÎÕÜ ÀÉÎÕÜ ÀÉÎÕÜ",
        "𝔘𝔫𝔦𝔠𝔬𝔡𝔢 ☃ ❄ 🜁",
    ];
    for input in inputs {
        for content_type in [ContentType::Text, ContentType::Url] {
            let result = detector.analyze(input, content_type, Language::English);
            assert!((0.0..=MAX_RISK_SCORE).contains(&result.risk_score), "{input:?}");
        }
    }
}

#[test]
fn test_score_bounds_and_recommendation_mapping() {
    let detector = FraudDetector::new();
    let samples = [
        SCAM_MESSAGE,
        "Join our pyramid downline matrix for referral bonus and high returns",
        "Be careful of fraud and scam offers, there is always risk of loss",
        "Amazing fantastic incredible unbelievable extraordinary growth 🚀🚀🚀🚀🚀🚀",
        "Quarterly results were in line with analyst expectations.",
        "deepfake ai generated synthetic media generated by ai video of the CEO",
    ];
    for sample in samples {
        let text = detector.analyze(sample, ContentType::Text, Language::English);
        assert!((0.0..=MAX_RISK_SCORE).contains(&text.risk_score));
        assert_eq!(text.recommendation, text_recommendation(text.risk_score));

        let url = detector.analyze(sample, ContentType::Url, Language::English);
        assert!((0.0..=MAX_RISK_SCORE).contains(&url.risk_score));
        assert_eq!(url.recommendation, url_recommendation(url.risk_score));
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let detector = FraudDetector::new();
    let first = detector.analyze(SCAM_MESSAGE, ContentType::Text, Language::Hindi);
    let second = detector.analyze(SCAM_MESSAGE, ContentType::Text, Language::Hindi);
    assert_eq!(first, second);
}

#[test]
fn test_media_ignores_content() {
    let detector = FraudDetector::new();
    for content in ["", SCAM_MESSAGE, "https://bit.ly/x"] {
        let result = detector.analyze(content, ContentType::Video, Language::Tamil);
        assert_eq!(result.risk_score, 3.0);
        assert_eq!(result.indicators, vec![MEDIA_REVIEW_INDICATOR]);
    }
}

#[test]
fn test_unknown_language_uses_english() {
    let detector = FraudDetector::new();
    let language = Language::from_tag("french");
    assert_eq!(language, Language::English);
    let fallback = detector.analyze("guaranteed returns", ContentType::Text, language);
    let english = detector.analyze("guaranteed returns", ContentType::Text, Language::English);
    assert_eq!(fallback, english);
    assert_eq!(fallback.risk_score, 2.5);
}

#[test]
fn test_hindi_keywords() {
    let detector = FraudDetector::new();
    let result = detector.analyze(
        "गारंटीशुदा रिटर्न पाएं, व्हाट्सएप ग्रुप में जुड़ें",
        ContentType::Text,
        Language::Hindi,
    );
    assert!(has(&result, "High-risk keyword: 'गारंटीशुदा रिटर्न'"));
    assert!(has(&result, "Contact pressure: 'व्हाट्सएप ग्रुप'"));
    assert!(result.contact_pressure);
    assert_eq!(result.risk_score, 4.0);
    assert_eq!(result.recommendation, Recommendation::ModerateCaution);
}

#[test]
fn test_regional_text_also_checks_english_pressure_phrases() {
    let detector = FraudDetector::new();
    let text = "सीमित समय ऑफर, whatsapp करें";
    let result = detector.analyze(text, ContentType::Text, Language::Hindi);
    assert!(has(&result, "Urgency indicator: 'सीमित समय'"));
    assert!(has(&result, "Contact pressure: 'whatsapp'"));
    assert_eq!(result.urgency_level, UrgencyLevel::Medium);
    assert_eq!(result.risk_score, 2.5);
}

#[test]
fn test_tamil_keywords() {
    let detector = FraudDetector::new();
    let result = detector.analyze(
        "உத்தரவாதமான வருமானம் உடனே செயல்படுங்கள்",
        ContentType::Text,
        Language::Tamil,
    );
    assert!(has(&result, "High-risk keyword: 'உத்தரவாதமான வருமானம்'"));
    assert!(has(&result, "Urgency indicator: 'உடனே செயல்படுங்கள்'"));
    assert_eq!(result.risk_score, 3.5);
    assert_eq!(result.recommendation, Recommendation::Safe);
}

#[test]
fn test_every_pattern_match_is_recorded() {
    let detector = FraudDetector::new();
    let result = detector.analyze(
        "Call 9876543210 or 9123456780 today",
        ContentType::Text,
        Language::English,
    );
    assert_eq!(result.suspicious_patterns, vec!["9876543210", "9123456780"]);
    let pattern_lines = result
        .indicators
        .iter()
        .filter(|i| i.starts_with("Suspicious pattern found"))
        .count();
    assert_eq!(pattern_lines, 1);
    assert_eq!(result.risk_score, 1.0);
}

#[test]
fn test_payment_references_are_not_phone_numbers() {
    let detector = FraudDetector::new();
    for text in [
        "Your UPI ref 482913570264 and card 4111111111111111",
        "order ABC1234567890 shipped",
    ] {
        let result = detector.analyze(text, ContentType::Text, Language::English);
        assert!(result.suspicious_patterns.is_empty(), "{:?}", result.suspicious_patterns);
        assert!(result.indicators.is_empty(), "{:?}", result.indicators);
        assert_eq!(result.risk_score, 0.0);
    }
}

#[test]
fn test_insights_for_scam_message() {
    let detector = FraudDetector::new();
    let result = detector.analyze(SCAM_MESSAGE, ContentType::Text, Language::English);
    let insights = AnalysisInsights::from_result(&result, ContentType::Text);
    assert_eq!(insights.fraud_type, FraudType::InvestmentScam);
    assert_eq!(insights.confidence_level, 95.0);
    assert!(insights.language_analysis.contact_requests);
    assert_eq!(alert_severity(result.risk_score), Some(AlertSeverity::Critical));
}

#[test]
fn test_result_serializes_with_expected_field_names() {
    let detector = FraudDetector::new();
    let result = detector.analyze(SHORTENER_URL, ContentType::Url, Language::English);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["risk_score"], 6.5);
    assert_eq!(json["recommendation"], "block_url");
    assert_eq!(json["sentiment"], "neutral");
    assert_eq!(json["urgency_level"], "low");
    assert_eq!(json["contact_pressure"], false);
    assert!(json["indicators"].is_array());
    assert!(json["suspicious_patterns"].is_array());
    assert_eq!(json.as_object().unwrap().len(), 7);
}
