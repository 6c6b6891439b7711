use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::{Duration, Instant};

use crate::config::GeneratorConfig;
use postcraft::analysis::Industry;

#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    models: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DraftRequest {
    pub topic: String,
    pub tone: String,
    pub length: String,
    pub industry: Industry,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftTrace {
    pub model: String,
    pub latency_ms: u128,
    pub attempts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftOutcome {
    pub text: String,
    pub trace: DraftTrace,
}

impl LlmClient {
    pub fn from_env(config: &GeneratorConfig, model_override: Option<String>) -> Option<Self> {
        let api_key = env::var("OPENROUTER_API_KEY").ok()?;
        let mut models = vec![model_override.unwrap_or_else(|| config.model.clone())];
        for model in &config.fallback_models {
            if !models.contains(model) {
                models.push(model.clone());
            }
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .ok()?;
        Some(Self {
            client,
            api_key,
            api_base: config.api_base.clone(),
            models,
        })
    }

    // Tries the selected model first, then each fallback, with a short
    // pause between failed attempts. First success wins.
    pub async fn draft_post(&self, request: &DraftRequest) -> Result<DraftOutcome, String> {
        let messages = vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt().to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: build_user_prompt(request),
            },
        ];

        let started = Instant::now();
        let mut last_error = String::new();
        for (attempt, model) in self.models.iter().enumerate() {
            match self.try_model(model, &messages).await {
                Ok(text) => {
                    return Ok(DraftOutcome {
                        text,
                        trace: DraftTrace {
                            model: model.clone(),
                            latency_ms: started.elapsed().as_millis(),
                            attempts: attempt + 1,
                        },
                    });
                }
                Err(err) => {
                    tracing::warn!(model = %model, error = %err, "draft model failed, falling back");
                    last_error = err;
                    tokio::time::sleep(Duration::from_millis(300)).await;
                }
            }
        }

        if last_error.is_empty() {
            last_error = "no draft models configured".to_string();
        }
        Err(last_error)
    }

    async fn try_model(&self, model: &str, messages: &[ChatMessage]) -> Result<String, String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let request = ChatRequest {
            model: model.to_string(),
            temperature: 0.9,
            messages: messages.to_vec(),
        };

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| format!("{} request failed: {}", model, err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("{} failed: {}", model, status));
            }
            return Err(format!("{} failed: {} {}", model, status, detail));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| format!("{} response parse failed: {}", model, err))?;

        let content = body
            .choices
            .first()
            .ok_or_else(|| format!("{} response missing choices", model))?
            .message
            .content
            .trim()
            .to_string();

        let cleaned = strip_think_blocks(&content).trim_start().to_string();
        if cleaned.is_empty() {
            return Err(format!("{} returned an empty draft", model));
        }
        Ok(cleaned)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Clone, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

static THINK_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").unwrap());

fn strip_think_blocks(text: &str) -> String {
    THINK_BLOCK.replace_all(text, "").to_string()
}

fn system_prompt() -> &'static str {
    r#"You are an elite LinkedIn content strategist. You craft high-performing posts that drive engagement and spark conversations.
Rules:
1. Start with a powerful hook: the first 2-3 lines must stop the scroll.
2. Use short paragraphs (1-3 lines) with strategic line breaks.
3. Use 3-6 emojis, placed at key transition points, never clumped.
4. End with 3-5 relevant hashtags, mixing broad and niche.
5. Close with a compelling question or repost prompt.
6. No markdown formatting; plain text with Unicode symbols only.
7. Output ONLY the post text, no quotes, no meta-commentary, no thinking tags."#
}

pub fn build_user_prompt(request: &DraftRequest) -> String {
    let tone = match request.tone.as_str() {
        "casual" => "Write in a warm, conversational, approachable voice.",
        "inspirational" => "Write in a motivating, uplifting voice that sparks action.",
        "thought-leader" => "Write with bold conviction and contrarian viewpoints.",
        "storytelling" => "Write as a narrative with a clear arc: setup, conflict, resolution, lesson.",
        "humorous" => "Write with sharp wit that still delivers genuine business insight.",
        _ => "Write in a polished, credible, authoritative voice.",
    };

    let length = match request.length.as_str() {
        "short" => "Keep the post under 500 characters. Be punchy and concise.",
        "medium" => "Write 500-1,300 characters. Balance depth with readability.",
        "long" => "Write 1,700-2,500 characters with detailed insights and examples.",
        _ => "Write 1,300-1,700 characters. This is the engagement sweet spot.",
    };

    let industry = match request.industry {
        Industry::Tech => "technology, software, AI, startups, and engineering",
        Industry::Marketing => "marketing, branding, content, growth, and digital strategy",
        Industry::Leadership => "management, team building, and organizational culture",
        Industry::Career => "career development, job search, and workplace skills",
        Industry::Sales => "sales strategy, B2B, pipeline, negotiation, and revenue growth",
        Industry::Finance => "finance, fintech, investing, and financial planning",
    };

    format!(
        "Write a LinkedIn post about: \"{}\"\n\nTone: {}\nLength: {}\nIndustry context: {}\n\nOutput ONLY the post. No quotes, no explanations, no thinking tags.",
        request.topic, tone, length, industry
    )
}
