use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    Tech,
    Marketing,
    Leadership,
    Career,
    Entrepreneurship,
    Productivity,
}

impl Category {
    // Scan order matters: ties on match count keep the earlier category.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Tech,
        Category::Marketing,
        Category::Leadership,
        Category::Career,
        Category::Entrepreneurship,
        Category::Productivity,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "general" => Some(Category::General),
            "tech" => Some(Category::Tech),
            "marketing" => Some(Category::Marketing),
            "leadership" => Some(Category::Leadership),
            "career" => Some(Category::Career),
            "entrepreneurship" => Some(Category::Entrepreneurship),
            "productivity" => Some(Category::Productivity),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Tech => "tech",
            Category::Marketing => "marketing",
            Category::Leadership => "leadership",
            Category::Career => "career",
            Category::Entrepreneurship => "entrepreneurship",
            Category::Productivity => "productivity",
        }
    }

    pub fn hashtags(self) -> &'static [&'static str] {
        match self {
            Category::General => &[
                "#LinkedIn",
                "#Networking",
                "#PersonalBranding",
                "#CareerGrowth",
                "#ProfessionalDevelopment",
                "#Motivation",
                "#Success",
                "#Leadership",
                "#Inspiration",
                "#LessonsLearned",
            ],
            Category::Tech => &[
                "#Technology",
                "#AI",
                "#MachineLearning",
                "#DataScience",
                "#CloudComputing",
                "#DevOps",
                "#CyberSecurity",
                "#Innovation",
                "#DigitalTransformation",
                "#SoftwareEngineering",
                "#Programming",
                "#TechCareers",
                "#StartupLife",
                "#ProductManagement",
                "#Agile",
            ],
            Category::Marketing => &[
                "#Marketing",
                "#DigitalMarketing",
                "#ContentMarketing",
                "#SEO",
                "#SocialMediaMarketing",
                "#BrandStrategy",
                "#GrowthHacking",
                "#MarketingTips",
                "#ContentCreation",
                "#Branding",
            ],
            Category::Leadership => &[
                "#Leadership",
                "#Management",
                "#TeamWork",
                "#Culture",
                "#Mentorship",
                "#ExecutiveLeadership",
                "#ChangeManagement",
                "#LeadershipDevelopment",
                "#WorkCulture",
                "#PeopleFirst",
            ],
            Category::Career => &[
                "#JobSearch",
                "#Hiring",
                "#Recruitment",
                "#CareerAdvice",
                "#InterviewTips",
                "#Resume",
                "#JobHunting",
                "#CareerChange",
                "#Upskilling",
                "#WorkLifeBalance",
            ],
            Category::Entrepreneurship => &[
                "#Entrepreneurship",
                "#StartupLife",
                "#Founder",
                "#SmallBusiness",
                "#BusinessGrowth",
                "#Hustle",
                "#Entrepreneur",
                "#VentureCapital",
                "#BusinessStrategy",
                "#ScaleUp",
            ],
            Category::Productivity => &[
                "#Productivity",
                "#TimeManagement",
                "#RemoteWork",
                "#WorkFromHome",
                "#Efficiency",
                "#Habits",
                "#GrowthMindset",
                "#SelfImprovement",
                "#Performance",
                "#Goals",
            ],
        }
    }
}

pub fn trending_hashtags(category: Category) -> &'static [&'static str] {
    category.hashtags()
}

// Phrase-to-hashtag associations, scanned in table order.
const KEYWORD_HASHTAGS: [(&str, &str); 30] = [
    ("artificial intelligence", "#AI"),
    ("machine learning", "#MachineLearning"),
    ("data science", "#DataScience"),
    ("product manager", "#ProductManagement"),
    ("software", "#SoftwareEngineering"),
    ("startup", "#StartupLife"),
    ("founder", "#Founder"),
    ("leadership", "#Leadership"),
    ("hiring", "#Hiring"),
    ("career", "#CareerGrowth"),
    ("marketing", "#Marketing"),
    ("remote", "#RemoteWork"),
    ("team", "#TeamWork"),
    ("culture", "#WorkCulture"),
    ("mentor", "#Mentorship"),
    ("innovation", "#Innovation"),
    ("digital", "#DigitalTransformation"),
    ("growth", "#GrowthMindset"),
    ("productivity", "#Productivity"),
    ("brand", "#PersonalBranding"),
    ("content", "#ContentCreation"),
    ("developer", "#Programming"),
    ("cloud", "#CloudComputing"),
    ("security", "#CyberSecurity"),
    ("resume", "#Resume"),
    ("interview", "#InterviewTips"),
    ("entrepreneur", "#Entrepreneurship"),
    ("business", "#BusinessGrowth"),
    ("work-life", "#WorkLifeBalance"),
    ("success", "#Success"),
];

const MAX_HASHTAG_SUGGESTIONS: usize = 10;

pub fn detect_hashtags(text: &str) -> Vec<&'static str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let mut detected: Vec<&'static str> = Vec::new();

    for (keyword, hashtag) in KEYWORD_HASHTAGS {
        if text_lower.contains(keyword) && !detected.contains(&hashtag) {
            detected.push(hashtag);
        }
    }

    // Thin results get padded with evergreen general tags.
    if detected.len() < 3 {
        for &hashtag in &Category::General.hashtags()[..3] {
            if !detected.contains(&hashtag) {
                detected.push(hashtag);
            }
        }
    }

    let mut best_category = Category::General;
    let mut max_matches = 0;
    for category in Category::ALL {
        let matches = category
            .hashtags()
            .iter()
            .filter(|tag| text_lower.contains(&tag.trim_start_matches('#').to_lowercase()))
            .count();
        if matches > max_matches {
            max_matches = matches;
            best_category = category;
        }
    }

    for &hashtag in &best_category.hashtags()[..4] {
        if !detected.contains(&hashtag) {
            detected.push(hashtag);
        }
    }

    detected.truncate(MAX_HASHTAG_SUGGESTIONS);
    detected
}

const ATTENTION_EMOJIS: [&str; 10] = ["🚀", "💡", "⚡", "🔥", "✨", "💥", "🎯", "⭐", "🌟", "💎"];
const APPROVAL_EMOJIS: [&str; 10] = ["✅", "👍", "✔️", "🙏", "💯", "🤞", "👌", "🫡", "🤲", "🎊"];

const MAX_EMOJI_SUGGESTIONS: usize = 15;

// Content themes with their emoji sets. A text can match several themes;
// each match contributes its whole set.
static EMOJI_THEMES: Lazy<Vec<(Regex, [&'static str; 4])>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"learn|lesson|education|teach|course|tip").unwrap(),
            ["📚", "🎓", "💡", "🧠"],
        ),
        (
            Regex::new(r"money|revenue|profit|income|salary").unwrap(),
            ["💰", "📈", "💲", "🏦"],
        ),
        (
            Regex::new(r"team|collaborate|together|culture").unwrap(),
            ["🤝", "👥", "🫂", "💪"],
        ),
        (
            Regex::new(r"mistake|fail|wrong|error").unwrap(),
            ["⚠️", "❌", "🙈", "💭"],
        ),
        (
            Regex::new(r"success|achieve|win|celebrate|proud").unwrap(),
            ["🏆", "🎉", "🥇", "🎊"],
        ),
        (
            Regex::new(r"idea|creative|think|brain|innovat").unwrap(),
            ["💡", "🧠", "🎨", "✨"],
        ),
        (
            Regex::new(r"story|journey|path|experience").unwrap(),
            ["📖", "🛤️", "🌅", "🎬"],
        ),
    ]
});

fn push_unique(suggestions: &mut Vec<&'static str>, items: &[&'static str]) {
    for &item in items {
        if !suggestions.contains(&item) {
            suggestions.push(item);
        }
    }
}

pub fn suggest_emojis(text: &str) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();

    push_unique(&mut suggestions, &ATTENTION_EMOJIS[..3]);
    push_unique(&mut suggestions, &APPROVAL_EMOJIS[..2]);

    let text_lower = text.to_lowercase();
    for (pattern, emojis) in EMOJI_THEMES.iter() {
        if pattern.is_match(&text_lower) {
            push_unique(&mut suggestions, emojis);
        }
    }

    suggestions.truncate(MAX_EMOJI_SUGGESTIONS);
    suggestions
}
