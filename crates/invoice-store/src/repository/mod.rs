//! # Repository Module
//!
//! Typed access to the persisted records.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Load / Save Contract                                 │
//! │                                                                         │
//! │  desk command                                                          │
//! │       │  store.drafts().load()                                         │
//! │       ▼                                                                 │
//! │  DraftRepository / ProductRepository / CustomerRepository              │
//! │       │                                                                 │
//! │       │  key missing        ──► built-in default                       │
//! │       │  value unparseable  ──► warn! + built-in default               │
//! │       │  storage I/O fails  ──► Err(StoreError)                        │
//! │       ▼                                                                 │
//! │  KeyValueStore (one JSON value per key)                                │
//! │                                                                         │
//! │  Saves always write the whole record.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`DraftRepository`](draft::DraftRepository) - the live invoice draft
//! - [`ProductRepository`](product::ProductRepository) - master catalog
//! - [`CustomerRepository`](customer::CustomerRepository) - saved customers

pub mod customer;
pub mod draft;
pub mod product;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{StoreError, StoreResult};
use crate::kv::KeyValueStore;

/// Key of the live invoice draft.
pub const DRAFT_KEY: &str = "last_draft_ske";

/// Key of the master product list.
pub const PRODUCTS_KEY: &str = "ske_master_products";

/// Key of the saved customer list.
pub const CUSTOMERS_KEY: &str = "ske_saved_customers";

/// Reads and decodes `key`.
///
/// Returns `Ok(None)` when the key is missing or its value does not decode;
/// the latter is logged.
async fn load_record<T: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Option<T>> {
    let Some(raw) = kv.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            warn!(key = %key, error = %e, "Discarding unreadable stored record");
            Ok(None)
        }
    }
}

/// Encodes and writes the whole record under `key`.
async fn save_record<T: Serialize + ?Sized>(
    kv: &dyn KeyValueStore,
    key: &str,
    record: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(record).map_err(|e| StoreError::serialize(key, e))?;
    kv.put(key, raw).await
}
