use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Marketing,
    Leadership,
    Career,
    Sales,
    Finance,
}

impl Industry {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "tech" | "technology" => Some(Industry::Tech),
            "marketing" => Some(Industry::Marketing),
            "leadership" => Some(Industry::Leadership),
            "career" => Some(Industry::Career),
            "sales" => Some(Industry::Sales),
            "finance" => Some(Industry::Finance),
            _ => None,
        }
    }

    // Unknown tags fall back to the tech table.
    pub fn parse_or_default(value: &str) -> Self {
        Industry::from_str(value).unwrap_or(Industry::Tech)
    }

    pub fn label(self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Marketing => "marketing",
            Industry::Leadership => "leadership",
            Industry::Career => "career",
            Industry::Sales => "sales",
            Industry::Finance => "finance",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Industry::Tech => &[
                "AI",
                "machine learning",
                "data",
                "cloud",
                "DevOps",
                "agile",
                "API",
                "SaaS",
                "automation",
                "digital transformation",
                "cybersecurity",
                "blockchain",
                "scalable",
                "innovation",
                "software",
                "engineering",
                "development",
                "startup",
                "product",
                "tech",
            ],
            Industry::Marketing => &[
                "brand",
                "content",
                "SEO",
                "analytics",
                "engagement",
                "conversion",
                "strategy",
                "growth",
                "ROI",
                "campaign",
                "social media",
                "funnel",
                "audience",
                "storytelling",
                "community",
            ],
            Industry::Leadership => &[
                "leadership",
                "team",
                "culture",
                "vision",
                "growth",
                "mentorship",
                "strategy",
                "impact",
                "collaboration",
                "resilience",
                "accountability",
                "empowerment",
                "transformation",
                "purpose",
                "values",
            ],
            Industry::Career => &[
                "career",
                "hiring",
                "job",
                "resume",
                "interview",
                "skills",
                "networking",
                "opportunity",
                "professional development",
                "growth mindset",
                "workplace",
                "talent",
                "promotion",
                "mentor",
                "upskilling",
            ],
            Industry::Sales => &[
                "revenue",
                "pipeline",
                "prospecting",
                "closing",
                "relationship",
                "solution",
                "value",
                "customer",
                "negotiation",
                "quota",
                "B2B",
                "B2C",
                "CRM",
                "forecast",
                "deal",
            ],
            Industry::Finance => &[
                "investment",
                "portfolio",
                "risk",
                "compliance",
                "fintech",
                "valuation",
                "equity",
                "ROI",
                "capital",
                "market",
                "strategy",
                "growth",
                "revenue",
                "profit",
                "budget",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub keyword: &'static str,
    pub present: bool,
}

pub fn suggest_keywords(text: &str, industry: Industry) -> Vec<KeywordMatch> {
    let text_lower = text.to_lowercase();
    industry
        .keywords()
        .iter()
        .map(|&keyword| KeywordMatch {
            keyword,
            present: text_lower.contains(&keyword.to_lowercase()),
        })
        .collect()
}
