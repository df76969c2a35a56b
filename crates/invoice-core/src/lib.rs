//! # invoice-core: Pure Business Logic for GST Tax Invoices
//!
//! This crate holds everything that decides what a printed tax invoice
//! says. It performs no I/O: storage, clocks, environment and rasterizing
//! all live in the outer layers.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Tax Invoice Desk Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Editor (web form)                            │   │
//! │  │   Parties ──► Items ──► Adjustments ──► Terms ──► Export        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InvoiceEdit                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    invoice-desk commands                        │   │
//! │  │    apply_edit, render_draft, search_products, export_pdf        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ invoice-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │  totals  │ │  words   │ │ document/format  │  │   │
//! │  │   │ Invoice  │ │ GST split│ │ lakh/    │ │ rows, terms,     │  │   │
//! │  │   │ LineItem │ │ rounding │ │ crore    │ │ ₹ grouping       │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 invoice-store (Persistence Layer)               │   │
//! │  │          key-value store, draft/product/customer repos          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Invoice, LineItem, Party, Product, ...)
//! - [`money`] - Amount type and rounding
//! - [`totals`] - Totals Engine and tax split
//! - [`words`] - Amount in words, Indian scale
//! - [`format`] - Currency, rate and date rendering
//! - [`document`] - Printable document projection
//! - [`editor`] - Editor actions as snapshot deltas
//! - [`catalog`] - Master product and customer list operations
//! - [`search`] - Product ranking and customer filtering
//! - [`validation`] - Master-data entry rules
//! - [`export`] - Export request parameters
//! - [`defaults`] - Built-in company, bank, terms and catalog
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same invoice in, same document out
//! 2. **Total Functions**: totals, words and rendering never fail
//! 3. **Snapshots**: editor actions return a new invoice, never mutate
//! 4. **Explicit Errors**: catalog entry errors are typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use invoice_core::{amount_in_words, Invoice, LineItem};
//!
//! let mut invoice = Invoice::default();
//! invoice.items.push(LineItem {
//!     unit_rate: 200.0,
//!     quantity: 2.0,
//!     gst_rate_percent: 18.0,
//!     ..LineItem::default()
//! });
//!
//! let totals = invoice.totals();
//! assert_eq!(totals.grand_total, 472);
//! assert_eq!(
//!     amount_in_words(totals.grand_total as u64),
//!     "Four hundred and seventy-two ONLY"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod defaults;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod format;
mod lenient;
pub mod money;
pub mod search;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use invoice_core::Invoice` instead of
// `use invoice_core::types::Invoice`

pub use document::{LayoutPolicy, TaxInvoiceDocument};
pub use editor::InvoiceEdit;
pub use error::{CoreError, CoreResult, ValidationError};
pub use export::ExportRequest;
pub use money::Amount;
pub use totals::{compute_totals, ComputedTotals, TaxBreakdown};
pub use types::*;
pub use words::{amount_in_words, grand_total_in_words};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Rows the item table always shows, padding with blank rows.
///
/// ## Why a constant?
/// Keeps the totals panel, bank block and signatures at the same place on
/// the printed page for any short invoice. [`LayoutPolicy`] lets the app
/// override it.
pub const MIN_TABLE_ROWS: usize = 23;

/// Upper bound on the padded table height a [`LayoutPolicy`] may ask for.
///
/// Invoices with more items than this still print every item.
pub const MAX_TABLE_ROWS: usize = 500;

/// Terms shown on the printed page; more may be stored.
pub const MAX_DISPLAYED_TERMS: usize = 4;

/// Short company code used in export file names.
pub const DEFAULT_COMPANY_CODE: &str = "SKE";

/// Product reference of a hand-entered line item.
pub const MANUAL_PRODUCT_REF: &str = "manual";
