use serde::{Deserialize, Serialize};

use crate::llm::{DraftRequest, DraftTrace};
use postcraft::analysis::{Industry, KeywordMatch};
use postcraft::AnalysisReport;

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
    pub industry: Option<String>,
}

impl ApiAnalyzeRequest {
    pub fn into_parts(self) -> Result<(String, Industry), String> {
        let text = self.text.unwrap_or_default();
        if text.trim().is_empty() {
            return Err("text is required".to_string());
        }
        let industry = Industry::parse_or_default(self.industry.as_deref().unwrap_or("tech"));
        Ok((text, industry))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiAnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub industry: Industry,
    pub keywords: Vec<KeywordMatch>,
}

#[derive(Debug, Deserialize)]
pub struct ApiSuggestRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiSuggestResponse {
    pub hashtags: Vec<&'static str>,
    pub emojis: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct ApiDraftRequest {
    pub topic: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub industry: Option<String>,
    pub model: Option<String>,
    pub request_id: Option<String>,
}

impl ApiDraftRequest {
    pub fn into_draft(self) -> Result<(DraftRequest, Option<String>), String> {
        let topic = self.topic.unwrap_or_default().trim().to_string();
        if topic.is_empty() {
            return Err("topic is required".to_string());
        }
        let request = DraftRequest {
            topic,
            tone: self.tone.unwrap_or_else(|| "professional".to_string()),
            length: self.length.unwrap_or_else(|| "optimal".to_string()),
            industry: Industry::parse_or_default(self.industry.as_deref().unwrap_or("tech")),
        };
        Ok((request, self.model))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiDraftResponse {
    pub request_id: String,
    pub text: String,
    pub trace: DraftTrace,
    pub report: AnalysisReport,
}
