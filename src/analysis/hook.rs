use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analysis::lexicon::POWER_WORDS;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookAnalysis {
    pub score: u32,
    pub tips: Vec<String>,
    pub hook: String,
}

impl HookAnalysis {
    pub fn empty() -> Self {
        Self {
            score: 0,
            tips: Vec::new(),
            hook: String::new(),
        }
    }
}

static STRONG_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(I |Here's|Stop|Don't|The truth|Unpopular|Hot take|Controversial|Nobody|Most people|Everyone)")
        .unwrap()
});

// Hook emoji bonus only looks at the common pictograph blocks, a narrower
// set than the full emoji counter.
fn is_hook_emoji(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1F600..=0x1F64F | 0x1F300..=0x1F5FF | 0x1F680..=0x1F6FF
    )
}

// Scores the first non-blank line. Base 50, every adjustment is additive
// and independent; only the upper bound needs clamping.
pub fn analyze_hook(text: &str) -> HookAnalysis {
    let hook = match text
        .split('\n')
        .find(|line| !line.trim().is_empty())
    {
        Some(line) => line,
        None => return HookAnalysis::empty(),
    };

    let mut score: u32 = 50;
    let mut tips = Vec::new();

    let length = hook.chars().count();
    if (60..=150).contains(&length) {
        score += 10;
    } else if length < 40 {
        tips.push("Hook is too short — expand it".to_string());
    }

    if hook.chars().take(2).any(is_hook_emoji) {
        score += 5;
    }

    if hook.chars().any(|ch| ch.is_ascii_digit()) {
        score += 10;
        tips.push("✅ Includes a number — great for credibility".to_string());
    }

    if hook.contains('?') {
        score += 10;
        tips.push("✅ Question hook — drives engagement".to_string());
    }

    let hook_lower = hook.to_lowercase();
    let power_hits = POWER_WORDS
        .iter()
        .filter(|word| hook_lower.contains(*word))
        .count();
    score += power_hits as u32 * 5;

    if STRONG_OPENER.is_match(hook) {
        score += 10;
        tips.push("✅ Strong opening pattern".to_string());
    }

    HookAnalysis {
        score: score.min(100),
        tips,
        hook: hook.chars().take(100).collect(),
    }
}
