pub mod analysis;
pub mod history;
pub mod suggest;

use serde::Serialize;

use crate::analysis::{CharAnalysis, HookAnalysis, Readability, Status};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub char_analysis: CharAnalysis,
    pub readability: Readability,
    pub hook_analysis: HookAnalysis,
    pub emoji_count: usize,
    pub emoji_status: Status,
    pub hashtag_count: usize,
    pub hashtag_status: Status,
    pub has_cta: bool,
    pub line_breaks: usize,
    pub word_count: usize,
    pub power_words: Vec<&'static str>,
    pub negative_terms: Vec<&'static str>,
    pub tips: Vec<String>,
}

impl AnalysisReport {
    fn empty() -> Self {
        Self {
            overall_score: 0,
            char_analysis: analysis::classify_length(""),
            readability: Readability::empty(),
            hook_analysis: HookAnalysis::empty(),
            emoji_count: 0,
            emoji_status: Status::Warning,
            hashtag_count: 0,
            hashtag_status: Status::Warning,
            has_cta: false,
            line_breaks: 0,
            word_count: 0,
            power_words: Vec::new(),
            negative_terms: Vec::new(),
            tips: Vec::new(),
        }
    }
}

// Full post analysis. Pure and total: every input, including empty text,
// yields a valid report. Tips follow check execution order.
pub fn analyze_post(text: &str) -> AnalysisReport {
    if text.trim().is_empty() {
        return AnalysisReport::empty();
    }

    let char_analysis = analysis::classify_length(text);
    let readability = analysis::score_readability(text);
    let hook_analysis = analysis::analyze_hook(text);
    let emoji_count = analysis::count_emojis(text);
    let hashtag_count = analysis::count_hashtags(text);
    let has_cta = analysis::has_cta(text);
    let line_breaks = analysis::count_paragraph_breaks(text);
    let word_count = analysis::count_words(text);

    let text_lower = text.to_lowercase();
    let power_words = analysis::power_words_in(&text_lower);
    let negative_terms = analysis::negative_terms_in(&text_lower);

    let emoji_status = if (1..=8).contains(&emoji_count) {
        Status::Good
    } else {
        Status::Warning
    };

    let hashtag_status = if (3..=5).contains(&hashtag_count) {
        Status::Good
    } else if hashtag_count > 8 {
        Status::Danger
    } else {
        Status::Warning
    };

    let mut score: i64 = 0;
    let mut tips: Vec<String> = Vec::new();

    // Character length (20 pts)
    if char_analysis.status == Status::Good {
        score += 20;
    } else if char_analysis.count >= 800 {
        score += 12;
    } else if char_analysis.count >= 200 {
        score += 6;
    } else {
        tips.push("Write more — aim for 1,300-1,700 characters".to_string());
    }

    // Hook quality (25 pts)
    score += (f64::from(hook_analysis.score) * 0.25).round() as i64;
    if hook_analysis.score < 60 {
        tips.push("Strengthen your hook — first line is everything".to_string());
    }

    // Readability (15 pts)
    if readability.score >= 60 {
        score += 15;
    } else if readability.score >= 40 {
        score += 10;
    } else {
        score += 5;
        tips.push("Simplify language — use shorter sentences".to_string());
    }

    // Emojis (10 pts)
    if (1..=8).contains(&emoji_count) {
        score += 10;
    } else if emoji_count == 0 {
        tips.push("Add 3-5 emojis for visual breaks & engagement".to_string());
    } else {
        tips.push("Too many emojis — keep it under 8".to_string());
    }

    // Hashtags (10 pts): 3-5 is ideal, moderately off-band counts earn
    // partial credit, every non-max case carries a tip.
    if (3..=5).contains(&hashtag_count) {
        score += 10;
    } else if hashtag_count == 0 {
        tips.push("Add 3-5 relevant hashtags".to_string());
    } else if hashtag_count > 8 {
        tips.push("Reduce hashtags to 3-5 max".to_string());
    } else if hashtag_count > 5 {
        score += 5;
        tips.push("Reduce hashtags to 3-5 max".to_string());
    } else {
        score += 5;
        tips.push("Add 3-5 relevant hashtags".to_string());
    }

    // CTA (10 pts)
    if has_cta {
        score += 10;
    } else {
        tips.push("End with a question or call-to-action".to_string());
    }

    // Line breaks / formatting (5 pts)
    if line_breaks >= 3 {
        score += 5;
    } else {
        tips.push("Add more line breaks for readability".to_string());
    }

    // Power words (5 pts)
    if power_words.len() >= 2 {
        score += 5;
    } else {
        tips.push("Use power words: \"proven\", \"breakthrough\", \"lesson\"...".to_string());
    }

    // Negative terms penalty
    if !negative_terms.is_empty() {
        score -= negative_terms.len() as i64 * 5;
        tips.push(format!("Avoid salesy language: \"{}\"", negative_terms[0]));
    }

    AnalysisReport {
        overall_score: score.clamp(0, 100) as u32,
        char_analysis,
        readability,
        hook_analysis,
        emoji_count,
        emoji_status,
        hashtag_count,
        hashtag_status,
        has_cta,
        line_breaks,
        word_count,
        power_words,
        negative_terms,
        tips,
    }
}
