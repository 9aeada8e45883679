//! Key-value persistence for markdays.
//!
//! Storage is addressed in two levels: a backend opens a named store
//! (a file), and a store maps keys to sequences of strings. Handles are
//! opened per operation and dropped afterwards.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// An open key-value store. `set` changes are only durable after `save`.
#[async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<String>>>;

    async fn set(&mut self, key: &str, values: Vec<String>) -> StoreResult<()>;

    async fn save(&mut self) -> StoreResult<()>;
}

/// Opens stores by name.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    type Store: Store;

    async fn open(&self, name: &str) -> StoreResult<Self::Store>;
}

/// Backend keeping each store as a JSON object file inside `dir`.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileBackend { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn store_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

#[async_trait]
impl StoreBackend for JsonFileBackend {
    type Store = JsonFileStore;

    async fn open(&self, name: &str) -> StoreResult<JsonFileStore> {
        JsonFileStore::load(self.store_path(name)).await
    }
}

/// A store backed by one JSON file, e.g. `{"markedDays": ["2024-01-01"]}`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Read the file at `path`. A missing file is an empty store.
    pub async fn load(path: PathBuf) -> StoreResult<Self> {
        let entries: Map<String, Value> = match tokio::fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => Map::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                StoreError::new(format!("Failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(StoreError::new(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), keys = entries.len(), "opened store");
        Ok(JsonFileStore { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Store for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<String>>> {
        match self.entries.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| StoreError::new(format!("Invalid value for '{key}': {e}"))),
        }
    }

    async fn set(&mut self, key: &str, values: Vec<String>) -> StoreResult<()> {
        self.entries.insert(key.to_string(), Value::from(values));
        Ok(())
    }

    async fn save(&mut self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::new(format!(
                    "Failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        tokio::fs::write(&temp, content).await.map_err(|e| {
            StoreError::new(format!("Failed to write {}: {e}", temp.display()))
        })?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(StoreError::new(format!(
                "Failed to write {}: {e}",
                self.path.display()
            )));
        }

        debug!(path = %self.path.display(), "saved store");
        Ok(())
    }
}
