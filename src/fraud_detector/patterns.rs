use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A structural red flag recognised by regular expression
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Human-readable name used in indicators
    pub label: &'static str,
    pub regex: Regex,
}

impl PatternRule {
    pub fn indicator(&self) -> String {
        format!("Suspicious pattern found: {}", self.label)
    }
}

// (label, expression); every expression is compiled case-insensitive
const PATTERN_SOURCES: &[(&str, &str)] = &[
    ("phone number", r"(?:\+\d{2}[\s-]?|\b)\d{10}\b"),
    ("amount in lakhs", r"₹\s*\d+\s*lakh"),
    ("amount in crores", r"₹\s*\d+\s*crore"),
    ("percentage return claim", r"\b\d+%\s*return"),
    ("whatsapp number", r"whatsapp.*\+\d+"),
    ("telegram handle", r"telegram.*@\w+"),
    ("ai-generated mention", r"ai-generated"),
    ("deepfake mention", r"deepfake"),
    ("pump and dump", r"pump and dump"),
    ("wash trading", r"wash trading"),
    ("market manipulation", r"market manipulation"),
    ("coordinated buying", r"coordinated buying"),
    ("insider trading", r"insider trading"),
];

pub static DEFAULT_PATTERNS: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    PATTERN_SOURCES
        .iter()
        .map(|&(label, source)| PatternRule {
            label,
            regex: RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .unwrap(),
        })
        .collect()
});

/// Eight or more consecutive digits inside a URL
pub static LONG_DIGIT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8,}").unwrap());

/// Ordered pattern rules evaluated against text content
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTable {
    /// Built-in rule set
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Appends a custom rule, compiled case-insensitive
    pub fn with_rule(mut self, label: &'static str, source: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source).case_insensitive(true).build()?;
        self.rules.push(PatternRule { label, regex });
        Ok(self)
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
