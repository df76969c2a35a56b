//! # State Module
//!
//! Application state for the desk, one focused type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  StoreState  │ │  DraftState  │ │ CatalogState │ │ ExportState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Store       │ │  Mutex<      │ │  RwLock<     │ │  AtomicBool  │   │
//! │  │  (Arc<KV>)   │ │   Invoice>   │ │   Vec<..>>   │ │  in flight   │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  AppConfig: read-only after startup                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod draft;
mod export;
mod store;

pub use catalog::CatalogState;
pub use config::AppConfig;
pub use draft::{fresh_draft, random_draft_no, today, DraftState};
pub use export::{ExportGuard, ExportState};
pub use store::StoreState;
