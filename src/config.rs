use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use postcraft::history::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub api_base: String,
    pub model: String,
    pub fallback_models: Vec<String>,
    pub timeout_ms: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_base: "https://openrouter.ai/api/v1".to_string(),
            model: "nvidia/nemotron-nano-12b-v2-vl:free".to_string(),
            fallback_models: vec![
                "google/gemma-3-27b-it:free".to_string(),
                "qwen/qwen3-next-80b-a3b-instruct:free".to_string(),
                "deepseek/deepseek-r1:free".to_string(),
                "meta-llama/llama-3.3-70b-instruct:free".to_string(),
                "mistralai/mistral-small-3.1-24b-instruct:free".to_string(),
                "qwen/qwen-2.5-72b-instruct:free".to_string(),
            ],
            timeout_ms: 60_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/history.json"),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub history: HistoryConfig,
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AppConfig::default()
            }
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_base) = env::var("OPENROUTER_API_BASE") {
            if !api_base.trim().is_empty() {
                self.generator.api_base = api_base;
            }
        }
        if let Ok(model) = env::var("OPENROUTER_MODEL") {
            if !model.trim().is_empty() {
                self.generator.model = model;
            }
        }
        if let Ok(timeout) = env::var("GENERATOR_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.generator.timeout_ms = value;
            }
        }
        if let Ok(path) = env::var("HISTORY_PATH") {
            if !path.trim().is_empty() {
                self.history.path = PathBuf::from(path);
            }
        }
        if let Ok(limit) = env::var("HISTORY_LIMIT") {
            if let Ok(value) = limit.parse::<usize>() {
                self.history.limit = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("POSTCRAFT_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/postcraft.toml")))
}
