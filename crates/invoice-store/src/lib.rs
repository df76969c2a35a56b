//! # invoice-store: Persisted State for Tax Invoice Desk
//!
//! Saves and restores the live draft, the master product catalog and the
//! saved customers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tax Invoice Desk Data Flow                         │
//! │                                                                         │
//! │  Desk command (apply_edit)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  invoice-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────────┐                 │   │
//! │  │   │    Store      │    │    Repositories     │                 │   │
//! │  │   │  (store.rs)   │───►│ DraftRepository     │                 │   │
//! │  │   │               │    │ ProductRepository   │                 │   │
//! │  │   │ Arc<dyn KV>   │    │ CustomerRepository  │                 │   │
//! │  │   └───────────────┘    └─────────────────────┘                 │   │
//! │  │           │                                                     │   │
//! │  │           ▼                                                     │   │
//! │  │   ┌───────────────────────────────────────┐                    │   │
//! │  │   │ KeyValueStore: MemoryStore | FileStore │                   │   │
//! │  │   └───────────────────────────────────────┘                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/invoice-desk/*.json                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared handle
//! - [`kv`] - Key-value backends
//! - [`repository`] - Typed load/save per record
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use invoice_store::Store;
//!
//! let store = Store::file("/path/to/data");
//! let draft = store.drafts().load().await?;
//! store.products().save(&products).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::draft::DraftRepository;
pub use repository::product::ProductRepository;
