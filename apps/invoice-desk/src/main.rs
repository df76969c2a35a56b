//! # Invoice Desk Entry Point
//!
//! Restores the saved draft and prints its rendered tax invoice as JSON.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tax Invoice Desk                                 │
//! │                                                                         │
//! │  main.rs ────► tokio runtime, exit code                                │
//! │                                                                         │
//! │  lib.rs ─────► logging, AppConfig, Desk::open, render                  │
//! │                                                                         │
//! │  commands/ ──► apply_edit, render_draft, search_products, export_pdf   │
//! │                                                                         │
//! │  state/ ─────► StoreState, DraftState, CatalogState, ExportState       │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  <data_dir>/last_draft_ske.json, ske_master_products.json, ...         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match invoice_desk_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = ?e.code, "{}", e.message);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
