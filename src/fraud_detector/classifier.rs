use serde::{Deserialize, Serialize};

use super::{AnalysisResult, ContentType};

const ALERT_THRESHOLD: f64 = 5.0;

/// Broad scam family suggested by the fired indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudType {
    InvestmentScam,
    PonziScheme,
    UrgencyTactic,
    ContactPressure,
    AiDeepfakeScam,
    MarketManipulation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformRisk {
    Low,
    Medium,
    High,
}

/// Severity of the alert a caller should raise for a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageAnalysis {
    pub emotional_pressure: bool,
    pub financial_promises: bool,
    pub contact_requests: bool,
}

/// Presentation-level reading of a finished analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInsights {
    pub fraud_type: FraudType,
    pub confidence_level: f64,
    pub platform_risk: PlatformRisk,
    pub language_analysis: LanguageAnalysis,
}

impl AnalysisInsights {
    pub fn from_result(result: &AnalysisResult, content_type: ContentType) -> Self {
        let lowered: Vec<String> = result.indicators.iter().map(|i| i.to_lowercase()).collect();
        Self {
            fraud_type: fraud_type(&lowered),
            confidence_level: confidence_level(result.risk_score),
            platform_risk: platform_risk(content_type),
            language_analysis: LanguageAnalysis {
                emotional_pressure: any_mentions(&lowered, &["pressure", "urgency"]),
                financial_promises: any_mentions(&lowered, &["return", "guarantee"]),
                contact_requests: result.contact_pressure,
            },
        }
    }
}

fn any_mentions(indicators: &[String], needles: &[&str]) -> bool {
    indicators
        .iter()
        .any(|i| needles.iter().any(|n| i.contains(n)))
}

/// First rule that matches wins; rules are checked most specific first
pub fn fraud_type(indicators: &[String]) -> FraudType {
    let keyword_promise = indicators.iter().any(|i| {
        i.contains("keyword")
            && (i.contains("return") || i.contains("guaranteed") || i.contains("risk-free"))
    });
    if keyword_promise {
        FraudType::InvestmentScam
    } else if any_mentions(indicators, &["pyramid", "multi-level", "downline"]) {
        FraudType::PonziScheme
    } else if any_mentions(indicators, &["act now", "limited spots", "deadline", "hurry"]) {
        FraudType::UrgencyTactic
    } else if any_mentions(indicators, &["whatsapp", "telegram"]) {
        FraudType::ContactPressure
    } else if any_mentions(indicators, &["deepfake", "ai generated"]) {
        FraudType::AiDeepfakeScam
    } else if any_mentions(indicators, &["pump and dump", "wash trading", "market manipulation"]) {
        FraudType::MarketManipulation
    } else {
        FraudType::Unknown
    }
}

/// Score scaled to a percentage, bounded to 60-95
pub fn confidence_level(risk_score: f64) -> f64 {
    (risk_score * 10.0).clamp(60.0, 95.0)
}

pub fn platform_risk(content_type: ContentType) -> PlatformRisk {
    match content_type {
        ContentType::Url => PlatformRisk::High,
        ContentType::Text => PlatformRisk::Medium,
        _ => PlatformRisk::Low,
    }
}

/// Alert severity for a score, or None when no alert is warranted
pub fn alert_severity(risk_score: f64) -> Option<AlertSeverity> {
    if risk_score >= 8.0 {
        Some(AlertSeverity::Critical)
    } else if risk_score >= 7.0 {
        Some(AlertSeverity::High)
    } else if risk_score >= ALERT_THRESHOLD {
        Some(AlertSeverity::Medium)
    } else {
        None
    }
}
