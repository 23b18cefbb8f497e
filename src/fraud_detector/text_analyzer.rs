use tracing::{debug, trace};

use super::keywords::{
    KeywordSet, KeywordTable, Tier, AI_PHRASES, NEGATIVE_WORDS, POSITIVE_WORDS,
};
use super::patterns::PatternTable;
use super::{clamp_score, AnalysisResult, Language, Recommendation, Sentiment, UrgencyLevel};

const PATTERN_MATCH_WEIGHT: f64 = 0.5;
const OVERLY_POSITIVE_WEIGHT: f64 = 1.0;
const CAUTIOUS_ADJUSTMENT: f64 = -0.5;
const EMOJI_WEIGHT: f64 = 0.5;
const EMOJI_THRESHOLD: usize = 5;
const CAPS_WEIGHT: f64 = 1.0;
const CAPS_RATIO_THRESHOLD: f64 = 0.5;
const CAPS_MIN_LENGTH: usize = 10;
const AI_PHRASE_WEIGHT: f64 = 2.0;

/// Characters that on their own never trigger the capital-letters check
const CAPS_IGNORED_CHARS: &str = " .,!?";

/// Shortest word, in letters, that counts towards a shouted phrase
const SHOUT_MIN_LETTERS: usize = 4;

/// Exchange and regulator names that are conventionally written in capitals
const MARKET_ACRONYMS: &[&str] = &[
    "SEBI", "NSDL", "CDSL", "NIFTY", "SENSEX", "NASDAQ", "FINRA", "IRDAI", "PFRDA",
];

/// Emoji blocks counted for density: emoticons, pictographs, transport, dingbat dice
const EMOJI_RANGES: [(u32, u32); 4] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x2680, 0x26BF),
];

/// Scores free text against the keyword and pattern tables
pub struct TextAnalyzer<'a> {
    keywords: &'a KeywordTable,
    patterns: &'a PatternTable,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(keywords: &'a KeywordTable, patterns: &'a PatternTable) -> Self {
        Self { keywords, patterns }
    }

    pub fn analyze(&self, text: &str, language: Language) -> AnalysisResult {
        let text_lower = text.to_lowercase();
        let mut result = AnalysisResult::default();
        let mut score = 0.0;

        let set = self.keywords.for_language(language);
        score += self.score_keywords(set, &text_lower, &mut result);
        if language != Language::English {
            // regional messages still lean on English urgency and contact phrases
            let english = self.keywords.english();
            score += score_tier(english, Tier::Urgency, &text_lower, &mut result);
            score += score_tier(english, Tier::ContactPressure, &text_lower, &mut result);
        }
        result.urgency_level = urgency_level(&result.indicators);

        score += self.score_patterns(text, &mut result);
        score += score_sentiment(&text_lower, &mut result);
        score += score_emojis(text, &mut result);
        score += score_capitals(text, &mut result);
        score += score_ai_phrases(&text_lower, &mut result);

        trace!("Raw text score before clamping: {}", score);
        result.risk_score = clamp_score(score);
        result.recommendation = text_recommendation(result.risk_score);
        result
    }

    fn score_keywords(
        &self,
        set: &KeywordSet,
        text_lower: &str,
        result: &mut AnalysisResult,
    ) -> f64 {
        Tier::ALL
            .iter()
            .map(|tier| score_tier(set, *tier, text_lower, result))
            .sum()
    }

    fn score_patterns(&self, text: &str, result: &mut AnalysisResult) -> f64 {
        let mut score = 0.0;
        for rule in self.patterns.rules() {
            let matches: Vec<String> = rule
                .regex
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect();
            if matches.is_empty() {
                continue;
            }
            debug!("Pattern '{}' matched {} time(s)", rule.label, matches.len());
            score += matches.len() as f64 * PATTERN_MATCH_WEIGHT;
            result.suspicious_patterns.extend(matches);
            result.indicators.push(rule.indicator());
        }
        score
    }
}

fn score_tier(set: &KeywordSet, tier: Tier, text_lower: &str, result: &mut AnalysisResult) -> f64 {
    let mut score = 0.0;
    for phrase in set.tier(tier) {
        if !text_lower.contains(phrase) {
            continue;
        }
        debug!("Keyword hit: tier={:?}, phrase='{}'", tier, phrase);
        score += tier.weight();
        result.indicators.push(tier.indicator(phrase));
        if tier == Tier::ContactPressure {
            result.contact_pressure = true;
        }
    }
    score
}

fn urgency_level(indicators: &[String]) -> UrgencyLevel {
    let hits = indicators
        .iter()
        .filter(|i| i.starts_with("Urgency indicator:"))
        .count();
    match hits {
        0 => UrgencyLevel::Low,
        1 => UrgencyLevel::Medium,
        _ => UrgencyLevel::High,
    }
}

fn score_sentiment(text_lower: &str, result: &mut AnalysisResult) -> f64 {
    let positive = POSITIVE_WORDS.iter().filter(|w| text_lower.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| text_lower.contains(*w)).count();
    trace!("Sentiment words: positive={}, negative={}", positive, negative);

    if positive > negative + 2 {
        result.sentiment = Sentiment::OverlyPositive;
        result.indicators.push("Overly positive sentiment detected".to_string());
        OVERLY_POSITIVE_WEIGHT
    } else if negative > 0 {
        result.sentiment = Sentiment::Cautious;
        CAUTIOUS_ADJUSTMENT
    } else {
        0.0
    }
}

fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES.iter().any(|(lo, hi)| (*lo..=*hi).contains(&code))
}

fn score_emojis(text: &str, result: &mut AnalysisResult) -> f64 {
    let count = text.chars().filter(|c| is_emoji(*c)).count();
    if count > EMOJI_THRESHOLD {
        result.indicators.push(format!("Excessive emoji usage: {} emojis", count));
        EMOJI_WEIGHT
    } else {
        0.0
    }
}

fn caps_check_applies(text: &str) -> bool {
    text.chars().count() > CAPS_MIN_LENGTH
        && !text.chars().all(char::is_numeric)
        && !text.chars().all(|c| CAPS_IGNORED_CHARS.contains(c))
}

/// Word of cased letters written entirely in capitals
fn is_shouted_word(word: &str) -> bool {
    if MARKET_ACRONYMS.contains(&word) {
        return false;
    }
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= SHOUT_MIN_LETTERS && letters.iter().all(|c| c.is_uppercase())
}

/// First run of two or more consecutive all-capital words
fn shouted_phrase(text: &str) -> Option<String> {
    let mut run: Vec<&str> = Vec::new();
    for token in text.split_whitespace() {
        let word = token.trim_matches(|c: char| !c.is_alphanumeric());
        if is_shouted_word(word) {
            run.push(word);
            continue;
        }
        if run.len() >= 2 {
            break;
        }
        run.clear();
    }
    (run.len() >= 2).then(|| run.join(" "))
}

fn score_capitals(text: &str, result: &mut AnalysisResult) -> f64 {
    if !caps_check_applies(text) {
        return 0.0;
    }
    let caps = text.chars().filter(|c| c.is_uppercase()).count();
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if letters == 0 {
        return 0.0;
    }

    if caps as f64 / letters as f64 > CAPS_RATIO_THRESHOLD {
        result.indicators.push("Excessive use of capital letters".to_string());
        return CAPS_WEIGHT;
    }
    if let Some(phrase) = shouted_phrase(text) {
        result
            .indicators
            .push(format!("Shouted phrase in capital letters: '{}'", phrase));
        return CAPS_WEIGHT;
    }
    0.0
}

fn score_ai_phrases(text_lower: &str, result: &mut AnalysisResult) -> f64 {
    let mut score = 0.0;
    for phrase in AI_PHRASES {
        if text_lower.contains(phrase) {
            score += AI_PHRASE_WEIGHT;
            result
                .indicators
                .push(format!("AI-generated content detected: '{}'", phrase));
        }
    }
    score
}

/// Maps a clamped text score onto its recommendation
pub fn text_recommendation(score: f64) -> Recommendation {
    if score >= 8.0 {
        Recommendation::BlockImmediately
    } else if score >= 6.0 {
        Recommendation::HighCaution
    } else if score >= 4.0 {
        Recommendation::ModerateCaution
    } else {
        Recommendation::Safe
    }
}
