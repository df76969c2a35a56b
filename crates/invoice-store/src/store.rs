//! # Store Handle
//!
//! Owns the key-value backend and hands out repositories.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::kv::{FileStore, KeyValueStore, MemoryStore};
use crate::repository::customer::CustomerRepository;
use crate::repository::draft::DraftRepository;
use crate::repository::product::ProductRepository;

/// Persisted-state handle.
///
/// ## Why a Handle + Repositories?
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Store (cheap to clone, shares one backend)                            │
/// │    ├── drafts()    → DraftRepository     key: last_draft_ske           │
/// │    ├── products()  → ProductRepository   key: ske_master_products      │
/// │    └── customers() → CustomerRepository  key: ske_saved_customers      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust,ignore
/// let store = Store::file(config.data_dir.clone());
/// let products = store.products().load().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    kv: Arc<dyn KeyValueStore>,
}

impl Store {
    /// Wraps any backend.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Store { kv }
    }

    /// Store backed by one JSON file per key under `dir`.
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        let backend = FileStore::new(dir);
        info!(dir = %backend.dir().display(), "Using file store");
        Store::new(Arc::new(backend))
    }

    /// Store that forgets everything when dropped.
    pub fn in_memory() -> Self {
        Store::new(Arc::new(MemoryStore::new()))
    }

    /// Raw backend access, for values no repository covers.
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.kv
    }

    pub fn drafts(&self) -> DraftRepository {
        DraftRepository::new(self.kv.clone())
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.kv.clone())
    }

    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(self.kv.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
