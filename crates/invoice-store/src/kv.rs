//! # Key-Value Backends
//!
//! Persisted state is a handful of opaque string values under fixed keys.
//! Two backends implement [`KeyValueStore`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KeyValueStore                                      │
//! │                                                                         │
//! │   MemoryStore                         FileStore                         │
//! │   ┌──────────────────────┐            ┌──────────────────────────────┐ │
//! │   │ RwLock<HashMap>      │            │ <data_dir>/                  │ │
//! │   │  tests, previews     │            │   last_draft_ske.json        │ │
//! │   └──────────────────────┘            │   ske_master_products.json   │ │
//! │                                       │   ske_saved_customers.json   │ │
//! │                                       └──────────────────────────────┘ │
//! │                                                                         │
//! │   put(): write <key>.json.tmp ──► rename over <key>.json               │
//! │          a crash mid-write leaves the previous value intact            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A string-valued key-value store.
///
/// A missing key is `Ok(None)`, never an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn put(&self, key: &str, value: String) -> StoreResult<()>;

    /// Deletes `key`. Deleting a missing key succeeds.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Keys double as file names, so they are restricted to `[A-Za-z0-9_-]`.
fn check_key(key: &str) -> StoreResult<()> {
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-process store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        check_key(key)?;
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> StoreResult<()> {
        check_key(key)?;
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        check_key(key)?;
        self.values.write().await.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// One `<key>.json` file per key under a directory.
///
/// ## Example
/// ```rust,ignore
/// let store = FileStore::new("/home/me/.local/share/invoice-desk");
/// store.put("last_draft_ske", json).await?;
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Directory holding the value files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        check_key(key)?;
        let path = self.path_for(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                debug!(key = %key, bytes = contents.len(), "Read stored value");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 bytes are a corrupt value, not an I/O failure
            Err(e) if e.kind() == ErrorKind::InvalidData => Ok(Some(String::new())),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    async fn put(&self, key: &str, value: String) -> StoreResult<()> {
        check_key(key)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io(key, e))?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{}.json.tmp", key));

        tokio::fs::write(&tmp, value.as_bytes())
            .await
            .map_err(|e| StoreError::io(key, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(key, e))?;

        debug!(key = %key, bytes = value.len(), "Wrote stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        check_key(key)?;
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").await.unwrap(), None);

        store.put("a", "1".to_string()).await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));

        store.remove("a").await.unwrap();
        store.remove("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get("../secret").await,
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.put("", String::new()).await.is_err());
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("last_draft_ske").await.unwrap(), None);

        store
            .put("last_draft_ske", "{\"invoiceNo\":\"1\"}".to_string())
            .await
            .unwrap();
        store
            .put("last_draft_ske", "{\"invoiceNo\":\"2\"}".to_string())
            .await
            .unwrap();

        let value = store.get("last_draft_ske").await.unwrap().unwrap();
        assert_eq!(value, "{\"invoiceNo\":\"2\"}");
        assert!(store.dir().join("last_draft_ske.json").exists());
        assert!(!store.dir().join("last_draft_ske.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.put("k", "v".to_string()).await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.remove("k").await.unwrap();
    }
}
