// Fixed word lists the scoring heuristics match against. Order matters
// for negative terms: the first one found (list order) is named in the tip.

pub const POWER_WORDS: [&str; 36] = [
    "proven",
    "exclusive",
    "insider",
    "breakthrough",
    "secret",
    "transform",
    "discover",
    "unlock",
    "master",
    "essential",
    "ultimate",
    "critical",
    "game-changer",
    "lesson",
    "mistake",
    "truth",
    "framework",
    "strategy",
    "impact",
    "results",
    "growth",
    "success",
    "journey",
    "challenge",
    "opportunity",
    "insight",
    "experience",
    "learned",
    "sharing",
    "story",
    "authentic",
    "genuine",
    "real",
    "honest",
    "vulnerable",
    "grateful",
];

pub const NEGATIVE_TERMS: [&str; 10] = [
    "click here",
    "buy now",
    "limited offer",
    "subscribe",
    "link in bio",
    "dm me",
    "follow me",
    "check out my",
    "sign up",
    "free trial",
];
