use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analysis::lexicon::{NEGATIVE_TERMS, POWER_WORDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Neutral,
    Good,
    Warning,
    Danger,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Neutral => "neutral",
            Status::Good => "good",
            Status::Warning => "warning",
            Status::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharAnalysis {
    pub count: usize,
    pub status: Status,
    pub message: &'static str,
}

// The 1,300-1,700 sweet spot and the ~3,000 truncation point come from
// LinkedIn feed behavior; branches are checked in this exact order.
pub fn classify_length(text: &str) -> CharAnalysis {
    let count = text.chars().count();
    let (status, message) = if count == 0 {
        (Status::Neutral, "Start typing...")
    } else if count < 200 {
        (Status::Warning, "Too short — aim for 1,300+ characters")
    } else if count < 800 {
        (Status::Warning, "Getting there — sweet spot is 1,300-1,700")
    } else if (1300..=1700).contains(&count) {
        (Status::Good, "🎯 Perfect length for max engagement!")
    } else if count > 1700 && count <= 3000 {
        (Status::Warning, "Slightly long — consider trimming")
    } else if count > 3000 {
        (Status::Danger, "Too long — LinkedIn truncates at ~3,000")
    } else {
        (Status::Good, "Good length")
    };

    CharAnalysis {
        count,
        status,
        message,
    }
}

fn is_emoji(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1F600..=0x1F64F // emoticons
            | 0x1F300..=0x1F5FF // misc symbols and pictographs
            | 0x1F680..=0x1F6FF // transport and map
            | 0x1F1E0..=0x1F1FF // regional indicators (flags)
            | 0x2600..=0x26FF // misc symbols
            | 0x2700..=0x27BF // dingbats
            | 0xFE00..=0xFE0F // variation selectors
            | 0x1F900..=0x1F9FF // supplemental symbols and pictographs
            | 0x1FA00..=0x1FA6F
            | 0x1FA70..=0x1FAFF
            | 0x200D // zero width joiner
            | 0x20E3 // combining enclosing keycap
    )
}

pub fn count_emojis(text: &str) -> usize {
    text.chars().filter(|ch| is_emoji(*ch)).count()
}

static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

pub fn count_hashtags(text: &str) -> usize {
    HASHTAG_RE.find_iter(text).count()
}

static CTA_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)what do you think",
        r"(?i)agree\??",
        r"(?i)share your",
        r"(?i)comment below",
        r"(?i)let me know",
        r"(?i)drop a",
        r"(?i)thoughts\??",
        r"(?i)have you",
        r"(?i)what's your",
        r"(?i)tag someone",
        r"(?i)repost",
        r"(?i)follow for",
        r"(?i)save this",
        r"(?i)bookmark",
        r"(?i)would you",
        r"(?i)do you agree",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

pub fn has_cta(text: &str) -> bool {
    CTA_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}

pub fn count_paragraph_breaks(text: &str) -> usize {
    text.matches("\n\n").count()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn power_words_in(text_lower: &str) -> Vec<&'static str> {
    POWER_WORDS
        .iter()
        .filter(|word| text_lower.contains(*word))
        .copied()
        .collect()
}

pub fn negative_terms_in(text_lower: &str) -> Vec<&'static str> {
    NEGATIVE_TERMS
        .iter()
        .filter(|term| text_lower.contains(*term))
        .copied()
        .collect()
}
