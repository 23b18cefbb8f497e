use std::collections::HashMap;

use super::Language;

/// Weight class of a keyword phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Medium,
    Urgency,
    ContactPressure,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::High, Tier::Medium, Tier::Urgency, Tier::ContactPressure];

    /// Score added per matched phrase
    pub fn weight(&self) -> f64 {
        match self {
            Tier::High => 2.5,
            Tier::Medium => 1.5,
            Tier::Urgency => 1.0,
            Tier::ContactPressure => 1.5,
        }
    }

    /// Indicator line recorded when `phrase` matches
    pub fn indicator(&self, phrase: &str) -> String {
        match self {
            Tier::High => format!("High-risk keyword: '{}'", phrase),
            Tier::Medium => format!("Medium-risk keyword: '{}'", phrase),
            Tier::Urgency => format!("Urgency indicator: '{}'", phrase),
            Tier::ContactPressure => format!("Contact pressure: '{}'", phrase),
        }
    }
}

/// Number of phrases in each tier, counted from the start of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBounds {
    pub high: usize,
    pub medium: usize,
    pub urgency: usize,
    pub contact_pressure: usize,
}

impl TierBounds {
    pub const fn total(&self) -> usize {
        self.high + self.medium + self.urgency + self.contact_pressure
    }
}

/// Ordered phrase list for one language, partitioned into tiers by position
#[derive(Debug, Clone)]
pub struct KeywordSet {
    phrases: Vec<&'static str>,
    bounds: TierBounds,
}

impl KeywordSet {
    /// Builds a set; phrases past the last tier boundary are ignored
    pub fn new(phrases: &[&'static str], bounds: TierBounds) -> Self {
        let len = phrases.len().min(bounds.total());
        Self {
            phrases: phrases[..len].to_vec(),
            bounds,
        }
    }

    /// Phrases belonging to `tier`, in table order
    pub fn tier(&self, tier: Tier) -> &[&'static str] {
        let b = &self.bounds;
        let (start, width) = match tier {
            Tier::High => (0, b.high),
            Tier::Medium => (b.high, b.medium),
            Tier::Urgency => (b.high + b.medium, b.urgency),
            Tier::ContactPressure => (b.high + b.medium + b.urgency, b.contact_pressure),
        };
        let start = start.min(self.phrases.len());
        let end = (start + width).min(self.phrases.len());
        &self.phrases[start..end]
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

const ENGLISH_PHRASES: &[&str] = &[
    // High risk: investment scams
    "guaranteed returns",
    "risk-free investment",
    "double your money",
    "limited time offer",
    "exclusive opportunity",
    "secret strategy",
    "insider information",
    "pre-ipo",
    "binary options",
    "forex trading",
    // Medium risk: ponzi schemes, false authority, manipulation
    "high returns",
    "no risk",
    "referral bonus",
    "pyramid",
    "multi-level marketing",
    "downline",
    "matrix",
    "sebi approved",
    "rbi certified",
    "government backed",
    "tax free returns",
    "black money",
    "demonetization profit",
    "pump and dump",
    "wash trading",
    // Urgency
    "act now",
    "limited time",
    "limited spots",
    "deadline",
    "hurry",
    "expires soon",
    "one-time offer",
    "closing today",
    "final warning",
    "last chance",
    // Contact pressure
    "whatsapp",
    "telegram",
    "private group",
    "delete after reading",
    "confidential",
    "dont share",
    "dm me",
    "call now",
];

const ENGLISH_BOUNDS: TierBounds = TierBounds {
    high: 10,
    medium: 15,
    urgency: 10,
    contact_pressure: 8,
};

const HINDI_PHRASES: &[&str] = &[
    "गारंटीशुदा रिटर्न",
    "जोखिम मुक्त निवेश",
    "पैसा दोगुना",
    "गुप्त रणनीति",
    "अंदरूनी जानकारी",
    "विशेष अवसर",
    "सेबी अप्रूवड",
    "आरबीआई सर्टिफाइड",
    "सरकारी समर्थन",
    "सीमित समय",
    "तुरंत कार्य करें",
    "व्हाट्सएप ग्रुप",
];

const HINDI_BOUNDS: TierBounds = TierBounds {
    high: 5,
    medium: 4,
    urgency: 2,
    contact_pressure: 1,
};

const TAMIL_PHRASES: &[&str] = &[
    "உத்தரவாதமான வருமானம்",
    "ஆபத்து இல்லாத முதலீடு",
    "பணம் இரட்டிப்பாக்கம்",
    "இரகசிய உத்தி",
    "உள்ளக தகவல்",
    "சிறப்பு வாய்ப்பு",
    "வரையறுக்கப்பட்ட நேரம்",
    "உடனே செயல்படுங்கள்",
    "வாட்ஸ்அப் குழு",
];

const TAMIL_BOUNDS: TierBounds = TierBounds {
    high: 5,
    medium: 1,
    urgency: 2,
    contact_pressure: 1,
};

/// Words that push the sentiment towards "overly positive"
pub const POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "fantastic",
    "incredible",
    "unbelievable",
    "extraordinary",
    "profit",
    "growth",
    "opportunity",
];

/// Words that mark the content as cautious
pub const NEGATIVE_WORDS: &[&str] =
    &["loss", "risk", "danger", "careful", "warning", "scam", "fraud"];

/// Phrases that admit synthetic or AI-generated material
pub const AI_PHRASES: &[&str] = &["deepfake", "ai generated", "synthetic media", "generated by ai"];

/// Keyword sets for every supported language
#[derive(Debug, Clone)]
pub struct KeywordTable {
    sets: HashMap<Language, KeywordSet>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordTable {
    /// Built-in multilingual table
    pub fn new() -> Self {
        let mut sets = HashMap::new();
        sets.insert(Language::English, KeywordSet::new(ENGLISH_PHRASES, ENGLISH_BOUNDS));
        sets.insert(Language::Hindi, KeywordSet::new(HINDI_PHRASES, HINDI_BOUNDS));
        sets.insert(Language::Tamil, KeywordSet::new(TAMIL_PHRASES, TAMIL_BOUNDS));
        Self { sets }
    }

    /// Replaces or adds the set for one language
    pub fn with_set(mut self, language: Language, set: KeywordSet) -> Self {
        self.sets.insert(language, set);
        self
    }

    /// Set for `language`, or the English set when the language has none
    pub fn for_language(&self, language: Language) -> &KeywordSet {
        self.sets
            .get(&language)
            .or_else(|| self.sets.get(&Language::English))
            .unwrap_or(&EMPTY_SET)
    }

    pub fn english(&self) -> &KeywordSet {
        self.for_language(Language::English)
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = self.sets.keys().copied().collect();
        langs.sort_by_key(|l| l.as_str());
        langs
    }
}

static EMPTY_SET: KeywordSet = KeywordSet {
    phrases: Vec::new(),
    bounds: TierBounds {
        high: 0,
        medium: 0,
        urgency: 0,
        contact_pressure: 0,
    },
};
