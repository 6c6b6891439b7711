use postcraft::analysis::{suggest_keywords, Industry};
use postcraft::suggest::{detect_hashtags, suggest_emojis, trending_hashtags, Category};

#[test]
fn empty_text_yields_no_hashtags() {
    assert!(detect_hashtags("").is_empty());
    assert!(detect_hashtags("   \n").is_empty());
}

#[test]
fn unmatched_text_backfills_general_hashtags() {
    let result = detect_hashtags("zxqv blorp unrelated waffle");
    assert_eq!(
        result,
        vec!["#LinkedIn", "#Networking", "#PersonalBranding", "#CareerGrowth"]
    );
}

#[test]
fn keyword_hits_come_first_in_map_order() {
    let result = detect_hashtags("We used machine learning at our startup");
    assert_eq!(result[0], "#MachineLearning");
    assert_eq!(result[1], "#StartupLife");
    // Fewer than 3 map hits, so the general backfill follows.
    assert!(result.contains(&"#LinkedIn"));
    assert!(result.len() >= 3);
}

#[test]
fn hashtag_suggestions_are_deduped_and_capped() {
    let text = "artificial intelligence machine learning data science software startup \
                founder leadership hiring career marketing remote team culture mentor innovation";
    let result = detect_hashtags(text);
    assert_eq!(result.len(), 10);
    assert_eq!(result[0], "#AI");
    let mut unique = result.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), result.len());
}

#[test]
fn non_empty_input_always_gets_three_hashtags() {
    for text in ["a", "hello world", "carrots and peas"] {
        assert!(detect_hashtags(text).len() >= 3, "too few for {:?}", text);
    }
}

#[test]
fn trending_hashtags_return_full_category_table() {
    assert_eq!(trending_hashtags(Category::General).len(), 10);
    assert_eq!(trending_hashtags(Category::Tech)[0], "#Technology");
    assert_eq!(Category::from_str("productivity"), Some(Category::Productivity));
    assert_eq!(Category::from_str("bogus"), None);
}

#[test]
fn emoji_suggestions_always_include_seeds() {
    let result = suggest_emojis("");
    assert_eq!(result, vec!["🚀", "💡", "⚡", "✅", "👍"]);
}

#[test]
fn emoji_suggestions_add_matched_themes() {
    let result = suggest_emojis("We learn from every mistake and celebrate success");
    // learning, failure and success themes all fire; 💡 dedupes against the
    // seeds and 🎊 against nothing, so the total hits the cap.
    assert_eq!(result.len(), 15);
    assert_eq!(&result[..5], &["🚀", "💡", "⚡", "✅", "👍"]);
    assert!(result.contains(&"📚"));
    assert!(result.contains(&"⚠️"));
    assert!(result.contains(&"🏆"));
}

#[test]
fn emoji_suggestions_never_exceed_cap_or_duplicate() {
    let text = "learn money team mistake success idea journey";
    let result = suggest_emojis(text);
    assert!(result.len() <= 15);
    let mut unique = result.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), result.len());
}

#[test]
fn keyword_checklist_preserves_table_order() {
    let matches = suggest_keywords("We ship AI and cloud products", Industry::Tech);
    assert_eq!(matches.len(), 20);
    assert_eq!(matches[0].keyword, "AI");
    assert!(matches[0].present);
    let cloud = matches.iter().find(|entry| entry.keyword == "cloud").unwrap();
    assert!(cloud.present);
    let devops = matches.iter().find(|entry| entry.keyword == "DevOps").unwrap();
    assert!(!devops.present);
}

#[test]
fn keyword_match_is_case_insensitive() {
    let matches = suggest_keywords("all about MACHINE LEARNING", Industry::Tech);
    let ml = matches
        .iter()
        .find(|entry| entry.keyword == "machine learning")
        .unwrap();
    assert!(ml.present);
}

#[test]
fn unknown_industry_falls_back_to_tech() {
    assert_eq!(Industry::parse_or_default("underwater basket weaving"), Industry::Tech);
    assert_eq!(Industry::parse_or_default("finance"), Industry::Finance);
    assert_eq!(Industry::from_str("marketing"), Some(Industry::Marketing));
    assert_eq!(Industry::from_str("nope"), None);
}
