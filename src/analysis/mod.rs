pub mod features;
pub mod hook;
pub mod keywords;
pub mod lexicon;
pub mod readability;

pub use features::{
    classify_length, count_emojis, count_hashtags, count_paragraph_breaks, count_words, has_cta,
    negative_terms_in, power_words_in, CharAnalysis, Status,
};
pub use hook::{analyze_hook, HookAnalysis};
pub use keywords::{suggest_keywords, Industry, KeywordMatch};
pub use readability::{score_readability, Readability, ReadabilityLevel};
