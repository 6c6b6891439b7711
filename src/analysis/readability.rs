use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    Easy,
    Standard,
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ReadabilityLevel {
    pub fn label(self) -> &'static str {
        match self {
            ReadabilityLevel::VeryEasy => "Very Easy",
            ReadabilityLevel::Easy => "Easy",
            ReadabilityLevel::Standard => "Standard",
            ReadabilityLevel::Difficult => "Difficult",
            ReadabilityLevel::VeryDifficult => "Very Difficult",
            ReadabilityLevel::NotApplicable => "N/A",
        }
    }

    fn from_score(score: i64) -> Self {
        if score >= 80 {
            ReadabilityLevel::VeryEasy
        } else if score >= 60 {
            ReadabilityLevel::Easy
        } else if score >= 40 {
            ReadabilityLevel::Standard
        } else if score >= 20 {
            ReadabilityLevel::Difficult
        } else {
            ReadabilityLevel::VeryDifficult
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    pub score: u32,
    pub level: ReadabilityLevel,
}

impl Readability {
    pub fn empty() -> Self {
        Self {
            score: 0,
            level: ReadabilityLevel::NotApplicable,
        }
    }
}

// Flesch reading-ease over sentence and syllable estimates.
pub fn score_readability(text: &str) -> Readability {
    if text.trim().is_empty() {
        return Readability::empty();
    }

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.is_empty() || sentences == 0 {
        return Readability::empty();
    }

    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();

    let raw = 206.835
        - 1.015 * (words.len() as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words.len() as f64);
    let score = (raw.round() as i64).clamp(0, 100);

    Readability {
        score: score as u32,
        level: ReadabilityLevel::from_score(score),
    }
}

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z]").unwrap());
static SILENT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static VOWEL_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

pub fn count_syllables(word: &str) -> usize {
    let word = NON_LETTER.replace_all(&word.to_lowercase(), "").to_string();
    if word.len() <= 3 {
        return 1;
    }
    let word = SILENT_SUFFIX.replace(&word, "").to_string();
    let word = word.strip_prefix('y').unwrap_or(&word);

    let groups = VOWEL_GROUPS.find_iter(word).count();
    groups.max(1)
}
