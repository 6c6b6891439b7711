use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub content: String,
    pub topic: String,
    pub tone: String,
    pub score: u32,
    pub created_at_ms: u128,
    pub updated_at_ms: Option<u128>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostDraft {
    pub content: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub score: u32,
}

pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
    records: Mutex<Vec<PostRecord>>,
}

impl HistoryStore {
    pub async fn load(path: PathBuf, limit: usize) -> Result<Self, String> {
        let records = if path.exists() {
            let data = tokio::fs::read_to_string(&path)
                .await
                .map_err(|err| format!("failed to read history: {}", err))?;
            if data.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&data)
                    .map_err(|err| format!("failed to parse history: {}", err))?
            }
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            limit: limit.max(1),
            records: Mutex::new(records),
        })
    }

    pub async fn list(&self) -> Vec<PostRecord> {
        let guard = self.records.lock().await;
        guard.clone()
    }

    // Newest first, oldest entries dropped past the limit.
    pub async fn save(&self, draft: PostDraft) -> Result<PostRecord, String> {
        let record = PostRecord {
            id: new_record_id(),
            content: draft.content,
            topic: draft.topic,
            tone: draft.tone,
            score: draft.score,
            created_at_ms: now_ms(),
            updated_at_ms: None,
        };

        let mut guard = self.records.lock().await;
        guard.insert(0, record.clone());
        if guard.len() > self.limit {
            guard.truncate(self.limit);
        }
        self.persist(&guard).await?;
        Ok(record)
    }

    pub async fn update_content(&self, record_id: &str, content: String) -> Result<bool, String> {
        let mut guard = self.records.lock().await;
        let mut updated = false;
        for record in guard.iter_mut() {
            if record.id == record_id {
                record.content = content.clone();
                record.updated_at_ms = Some(now_ms());
                updated = true;
            }
        }
        if updated {
            self.persist(&guard).await?;
        }
        Ok(updated)
    }

    pub async fn delete(&self, record_id: &str) -> Result<bool, String> {
        let mut guard = self.records.lock().await;
        let before = guard.len();
        guard.retain(|record| record.id != record_id);
        let removed = guard.len() != before;
        if removed {
            self.persist(&guard).await?;
        }
        Ok(removed)
    }

    pub async fn clear(&self) -> Result<(), String> {
        let mut guard = self.records.lock().await;
        guard.clear();
        self.persist(&guard).await
    }

    async fn persist(&self, records: &[PostRecord]) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent).await?;
        }
        let payload = serde_json::to_string_pretty(records)
            .map_err(|err| format!("failed to serialize history: {}", err))?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, payload)
            .await
            .map_err(|err| format!("failed to write history: {}", err))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| format!("failed to finalize history: {}", err))?;
        Ok(())
    }
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create history dir: {}", err))
}

pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}

fn new_record_id() -> String {
    format!("{:x}-{:x}", now_ms(), rand::random::<u32>())
}
