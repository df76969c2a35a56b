//! # Commands Module
//!
//! Every operation the editor can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── invoice.rs  ◄─── Draft edits, new draft, render
//! ├── catalog.rs  ◄─── Master products, saved customers
//! ├── search.rs   ◄─── Product ranking, customer filter
//! ├── export.rs   ◄─── PDF export through a rasterizer
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! async fn search_products(catalog: &CatalogState, ...)
//!
//! // Needs the draft and the store it persists to
//! async fn apply_edit(draft: &DraftState, store: &StoreState, ...)
//! ```
//!
//! Commands return `ApiResult<T>`; both `T` and `ApiError` serialize to
//! camelCase JSON for the editor.

pub mod catalog;
pub mod config;
pub mod export;
pub mod invoice;
pub mod search;
