use tracing::{debug, trace};

use super::patterns::LONG_DIGIT_RUN_REGEX;
use super::{clamp_score, AnalysisResult, Recommendation};

/// Domain fragments associated with scams, shorteners included
pub const SUSPICIOUS_DOMAINS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "short.link",
    "t.co",
    "invest-now",
    "quick-money",
    "easy-profit",
    "get-rich-quick",
    "secure-login",
    "verify-account",
    "update-details",
];

/// Link shortening services that hide the real destination
pub const SHORTENING_SERVICES: &[&str] = &["bit.ly", "goo.gl", "tinyurl.com", "ow.ly", "is.gd"];

/// Query parameter names that ask for credentials or account details
pub const SENSITIVE_PARAMS: &[&str] = &["user_id", "account_no", "password", "pin", "otp"];

const SUSPICIOUS_DOMAIN_WEIGHT: f64 = 2.0;
const SHORTENER_WEIGHT: f64 = 1.0;
const DIGIT_RUN_WEIGHT: f64 = 1.0;
const HYPHEN_WEIGHT: f64 = 0.5;
const MAX_HYPHENS: usize = 3;
const NON_STANDARD_SCHEME_WEIGHT: f64 = 1.5;
const SENSITIVE_PARAM_WEIGHT: f64 = 1.0;

/// Scores a URL string by its shape; no network access is involved
pub fn analyze_url(url: &str) -> AnalysisResult {
    let url_lower = url.to_lowercase();
    let mut result = AnalysisResult::default();
    let mut score = 0.0;

    for domain in SUSPICIOUS_DOMAINS {
        if url_lower.contains(domain) {
            debug!("Suspicious domain fragment: {}", domain);
            score += SUSPICIOUS_DOMAIN_WEIGHT;
            result.indicators.push(format!("Suspicious domain: {}", domain));
        }
    }

    if LONG_DIGIT_RUN_REGEX.is_match(url) {
        score += DIGIT_RUN_WEIGHT;
        result.indicators.push("Suspicious number pattern in URL".to_string());
    }

    if url_lower.matches('-').count() > MAX_HYPHENS {
        score += HYPHEN_WEIGHT;
        result.indicators.push("Excessive hyphens in URL".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        score += NON_STANDARD_SCHEME_WEIGHT;
        result.indicators.push("Non-standard URL format".to_string());
    }

    for param in SENSITIVE_PARAMS {
        if url_lower.contains(&format!("{}=", param)) {
            debug!("Sensitive parameter in URL: {}", param);
            score += SENSITIVE_PARAM_WEIGHT;
            result
                .indicators
                .push(format!("Suspicious URL parameter: '{}'", param));
        }
    }

    // counted on top of the domain hit above
    if SHORTENING_SERVICES.iter().any(|s| url_lower.contains(s)) {
        score += SHORTENER_WEIGHT;
        result.indicators.push("Use of URL shortener detected".to_string());
    }

    trace!("Raw URL score before clamping: {}", score);
    result.risk_score = clamp_score(score);
    result.recommendation = url_recommendation(result.risk_score);
    result
}

/// Maps a clamped URL score onto its recommendation
pub fn url_recommendation(score: f64) -> Recommendation {
    if score >= 6.0 {
        Recommendation::BlockUrl
    } else if score >= 3.0 {
        Recommendation::CautionAdvised
    } else {
        Recommendation::Safe
    }
}
