use postcraft::analysis::{
    analyze_hook, classify_length, count_emojis, count_hashtags, count_paragraph_breaks, has_cta,
    score_readability, ReadabilityLevel, Status,
};
use postcraft::analyze_post;

#[test]
fn empty_text_returns_zero_report() {
    for text in ["", "   ", "\n\n\t "] {
        let report = analyze_post(text);
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.char_analysis.status, Status::Neutral);
        assert_eq!(report.hook_analysis.score, 0);
        assert!(report.tips.is_empty());
        assert_eq!(report.word_count, 0);
        assert!(!report.has_cta);
    }
}

#[test]
fn score_stays_in_bounds() {
    let long = "long word ".repeat(500);
    let samples = [
        "short",
        "A post with #one #two #three #four #five #six #seven #eight #nine #ten hashtags",
        "🚀🔥💡🎯⭐✨💥🌟💎😊🙌💪 all the emojis",
        long.as_str(),
        "What do you think?\n\nProven results.\n\nShare your story below!\n\n#Growth #Success #Leadership",
    ];
    for text in samples {
        let report = analyze_post(text);
        assert!(report.overall_score <= 100, "score out of range for {:?}", text);
    }
}

#[test]
fn char_count_boundaries() {
    assert_eq!(classify_length("").status, Status::Neutral);
    assert_eq!(classify_length(&"a".repeat(100)).status, Status::Warning);
    assert_eq!(classify_length(&"a".repeat(500)).status, Status::Warning);
    assert_eq!(classify_length(&"a".repeat(1000)).status, Status::Good);
    assert_eq!(classify_length(&"a".repeat(1000)).message, "Good length");
    assert_eq!(classify_length(&"a".repeat(1300)).status, Status::Good);
    assert_eq!(classify_length(&"a".repeat(1700)).status, Status::Good);
    assert_eq!(classify_length(&"a".repeat(1701)).status, Status::Warning);
    assert_eq!(classify_length(&"a".repeat(3000)).status, Status::Warning);
    assert_eq!(classify_length(&"a".repeat(3001)).status, Status::Danger);
}

#[test]
fn readability_simple_sentence_is_easy() {
    let result = score_readability("The cat sat.");
    assert!(result.score >= 80, "got {}", result.score);
    assert_eq!(result.level, ReadabilityLevel::VeryEasy);
}

#[test]
fn readability_polysyllabic_text_is_hard() {
    let result = score_readability("Incomprehensibilities administratively.");
    assert_eq!(result.score, 0);
    assert_eq!(result.level, ReadabilityLevel::VeryDifficult);
}

#[test]
fn readability_empty_is_not_applicable() {
    let result = score_readability("  ");
    assert_eq!(result.score, 0);
    assert_eq!(result.level, ReadabilityLevel::NotApplicable);
}

#[test]
fn readability_pins_known_value() {
    // "hello": 1 word, 1 sentence, 2 syllables.
    // 206.835 - 1.015 - 169.2 = 36.62 -> 37.
    let result = score_readability("hello");
    assert_eq!(result.score, 37);
    assert_eq!(result.level, ReadabilityLevel::Difficult);
}

#[test]
fn hashtag_counting() {
    assert_eq!(count_hashtags("Check #AI and #MachineLearning today"), 2);
    assert_eq!(count_hashtags("no tags here"), 0);
    let report = analyze_post("Check #AI and #MachineLearning today");
    assert_eq!(report.hashtag_count, 2);
    assert_eq!(report.hashtag_status, Status::Warning);
}

#[test]
fn hashtag_status_bands() {
    assert_eq!(analyze_post("#a #b #c").hashtag_status, Status::Good);
    assert_eq!(analyze_post("#a #b #c #d #e").hashtag_status, Status::Good);
    assert_eq!(
        analyze_post("#a #b #c #d #e #f").hashtag_status,
        Status::Warning
    );
    assert_eq!(
        analyze_post("#a #b #c #d #e #f #g #h #i").hashtag_status,
        Status::Danger
    );
}

#[test]
fn cta_detection() {
    assert!(has_cta("What do you think about this?"));
    assert!(has_cta("Drop a comment below"));
    assert!(has_cta("Would you try it?"));
    assert!(has_cta("TAG SOMEONE who needs this"));
    assert!(!has_cta("Buy my course now"));
    assert!(!has_cta("Just a plain statement."));
}

#[test]
fn negative_terms_only_match_fixed_list() {
    let report = analyze_post("Buy my course now");
    assert!(!report.has_cta);
    assert!(report.negative_terms.is_empty());

    let report = analyze_post("Buy now and subscribe for my proven results");
    assert_eq!(report.negative_terms, vec!["buy now", "subscribe"]);
    assert!(report
        .tips
        .iter()
        .any(|tip| tip == "Avoid salesy language: \"buy now\""));
}

#[test]
fn emoji_counting_covers_pictograph_ranges() {
    assert_eq!(count_emojis("no emoji"), 0);
    assert_eq!(count_emojis("🚀"), 1);
    assert_eq!(count_emojis("🔥🔥🔥"), 3);
    // Dingbats and misc symbols count too.
    assert_eq!(count_emojis("✅ and ☀"), 2);
}

#[test]
fn paragraph_break_counting() {
    assert_eq!(count_paragraph_breaks("one\n\ntwo\n\nthree"), 2);
    assert_eq!(count_paragraph_breaks("one\ntwo"), 0);
    assert_eq!(count_paragraph_breaks(""), 0);
}

#[test]
fn hook_base_score_and_short_tip() {
    let result = analyze_hook("Hello");
    assert_eq!(result.score, 50);
    assert_eq!(result.tips, vec!["Hook is too short — expand it"]);
    assert_eq!(result.hook, "Hello");
}

#[test]
fn hook_digit_bonus() {
    let result = analyze_hook("We grew 10x this year and it changed everything for us");
    assert_eq!(result.score, 60);
    assert!(result.tips.iter().any(|tip| tip.contains("number")));
}

#[test]
fn hook_question_bonus() {
    let result = analyze_hook("Why do most managers avoid giving feedback?");
    assert_eq!(result.score, 60);
    assert!(result.tips.iter().any(|tip| tip.contains("Question")));
}

#[test]
fn hook_strong_opener_bonus() {
    let result = analyze_hook("Unpopular opinion about meetings");
    assert_eq!(result.score, 60);
    assert!(result.tips.iter().any(|tip| tip.contains("Strong opening")));

    let lowercase = analyze_hook("stop doing this in every meeting you join today folks");
    assert!(lowercase
        .tips
        .iter()
        .any(|tip| tip.contains("Strong opening")));
}

#[test]
fn hook_length_and_power_word_bonus() {
    // 63 chars, in the 60-150 band (+10), plus "proven" and "framework" (+5 each).
    let result = analyze_hook("This proven framework changed how our whole team ships software");
    assert_eq!(result.score, 70);
}

#[test]
fn hook_emoji_start_bonus() {
    let result = analyze_hook("🚀 Launch day.");
    assert_eq!(result.score, 55);
}

#[test]
fn hook_score_clamps_at_100() {
    let result = analyze_hook(
        "Here's the proven secret framework: 7 breakthrough lessons I learned to unlock growth, impact and success?",
    );
    assert_eq!(result.score, 100);
}

#[test]
fn hook_uses_first_non_blank_line() {
    let result = analyze_hook("\n\nFirst real line\nsecond line");
    assert_eq!(result.hook, "First real line");
}

#[test]
fn hook_truncates_to_100_chars() {
    let long_line = "x".repeat(250);
    let result = analyze_hook(&long_line);
    assert_eq!(result.hook.chars().count(), 100);
}

#[test]
fn composite_pins_small_input() {
    // "hello": length 0 pts + tip, hook 50 -> 13 pts + tip, readability 37
    // -> 5 pts + tip, then emoji/hashtag/cta/line-break/power tips.
    let report = analyze_post("hello");
    assert_eq!(report.overall_score, 18);
    assert_eq!(report.tips.len(), 8);
}

#[test]
fn composite_clamps_to_zero_under_penalties() {
    let report = analyze_post(
        "buy now subscribe dm me follow me sign up free trial click here limited offer link in bio check out my",
    );
    assert_eq!(report.negative_terms.len(), 10);
    assert_eq!(report.overall_score, 0);
}

#[test]
fn analysis_is_idempotent() {
    let text = "Here's what 5 years of remote work taught me.\n\nProven results matter.\n\nWhat do you think? 🚀\n\n#RemoteWork #Leadership #Growth";
    let first = analyze_post(text);
    let second = analyze_post(text);
    assert_eq!(first, second);
}

#[test]
fn emoji_status_follows_scoring_band() {
    assert_eq!(analyze_post("plain text").emoji_status, Status::Warning);
    assert_eq!(analyze_post("some 🚀 text").emoji_status, Status::Good);
    assert_eq!(
        analyze_post("🚀🔥💡🎯😊✨💥🌟💎 nine of them").emoji_status,
        Status::Warning
    );
}
