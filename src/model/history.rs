//! Watch history kept in a local JSON file

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::error::{ApiResult, GeneralError};

use super::types::{VideoIds, VideoKind};

/// Receives "mark watched" signals and answers whether an item was watched
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn add_to_history(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<()>;

    async fn is_watched(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<bool>;
}

/// History entries keyed by `"movie:550"` / `"tv:1396"`, persisted on every add
#[derive(Clone)]
pub struct LocalHistoryStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
    save_lock: Arc<Mutex<()>>,
}

fn history_key(kind: VideoKind, ids: &VideoIds) -> Option<String> {
    match (ids.tmdb_id, ids.imdb_id.as_deref()) {
        (Some(id), _) => Some(format!("{}:{}", kind.tmdb_path(), id)),
        (None, Some(imdb)) => Some(format!("imdb:{}", imdb)),
        (None, None) => None,
    }
}

impl LocalHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Arc::new(RwLock::new(HashMap::new())),
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Open the store at `path`, reading existing entries if the file exists
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.load_from_disk().await?;
        Ok(store)
    }

    pub async fn load_from_disk(&self) -> Result<()> {
        if self.path.exists() {
            let content = tokio::fs::read_to_string(&self.path).await?;
            let stored: HashMap<String, DateTime<Utc>> = serde_json::from_str(&content)?;
            let mut entries = self.entries.write().await;
            *entries = stored;
            tracing::debug!(path = %self.path.display(), count = entries.len(), "Loaded watch history");
        }
        Ok(())
    }

    /// Write all entries to disk. Saves run one at a time and each one
    /// snapshots the entries after taking its turn, so the last write wins
    /// with everything recorded so far.
    pub async fn save_to_disk(&self) -> Result<()> {
        let _turn = self.save_lock.lock().await;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let content = {
            let entries = self.entries.read().await;
            serde_json::to_string_pretty(&*entries)?
        };
        // Write beside the target and rename so readers never see a partial file
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    pub async fn watched_at(&self, kind: VideoKind, ids: &VideoIds) -> Option<DateTime<Utc>> {
        let key = history_key(kind, ids)?;
        self.entries.read().await.get(&key).copied()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl HistoryRepository for LocalHistoryStore {
    async fn add_to_history(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<()> {
        let key = history_key(kind, ids).ok_or(GeneralError::NotFound)?;
        self.entries.write().await.insert(key.clone(), Utc::now());
        tracing::info!(key = %key, "Marked as watched");

        self.save_to_disk()
            .await
            .map_err(|e| GeneralError::Unknown(format!("failed to save history: {}", e)))
    }

    async fn is_watched(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<bool> {
        Ok(self.watched_at(kind, ids).await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let store = LocalHistoryStore::new(&path);
        store.add_to_history(VideoKind::Movie, &VideoIds::tmdb(550)).await.unwrap();
        assert!(path.exists());

        let reopened = LocalHistoryStore::open(&path).await.unwrap();
        assert!(reopened.is_watched(VideoKind::Movie, &VideoIds::tmdb(550)).await.unwrap());
        assert!(!reopened.is_watched(VideoKind::Show, &VideoIds::tmdb(550)).await.unwrap());
        assert_eq!(reopened.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_all_reach_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = LocalHistoryStore::new(&path);

        let adds = (1..=20u32).map(|id| {
            let store = store.clone();
            tokio::spawn(async move { store.add_to_history(VideoKind::Movie, &VideoIds::tmdb(id)).await })
        });
        for result in futures::future::join_all(adds).await {
            result.unwrap().unwrap();
        }

        let reopened = LocalHistoryStore::open(&path).await.unwrap();
        assert_eq!(reopened.len().await, 20);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalHistoryStore::open(dir.path().join("history.json")).await.unwrap();
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_item_without_ids_cannot_be_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalHistoryStore::new(dir.path().join("history.json"));
        let result = store.add_to_history(VideoKind::Movie, &VideoIds::default()).await;
        assert_eq!(result, Err(GeneralError::NotFound));
    }

    #[test]
    fn test_history_key_prefers_tmdb_id() {
        let ids = VideoIds { tmdb_id: Some(1396), imdb_id: Some("tt0903747".to_string()) };
        assert_eq!(history_key(VideoKind::Show, &ids).as_deref(), Some("tv:1396"));

        let imdb_only = VideoIds { tmdb_id: None, imdb_id: Some("tt0903747".to_string()) };
        assert_eq!(history_key(VideoKind::Show, &imdb_only).as_deref(), Some("imdb:tt0903747"));
    }
}
