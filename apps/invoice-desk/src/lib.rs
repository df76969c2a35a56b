//! # Invoice Desk Library
//!
//! Application layer of the Tax Invoice Desk: configuration, logging,
//! live state and the commands an editor front end invokes.
//!
//! ## Module Organization
//! ```text
//! invoice_desk_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── AppConfig (env + platform dirs)
//! │   ├── store.rs    ◄─── Store wrapper
//! │   ├── draft.rs    ◄─── Live invoice snapshot
//! │   ├── catalog.rs  ◄─── Products & saved customers
//! │   └── export.rs   ◄─── Single in-flight export flag
//! ├── commands/
//! │   ├── invoice.rs  ◄─── Edits, new draft, render
//! │   ├── catalog.rs  ◄─── Master data maintenance
//! │   ├── search.rs   ◄─── Pickers
//! │   ├── export.rs   ◄─── PDF export
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{ApiError, ApiResult};
use invoice_store::Store;
use state::{today, AppConfig, CatalogState, DraftState, ExportState, StoreState};

/// Everything a running desk holds.
#[derive(Debug)]
pub struct Desk {
    pub config: AppConfig,
    pub store: StoreState,
    pub draft: DraftState,
    pub catalog: CatalogState,
    pub exports: ExportState,
}

impl Desk {
    /// Restores persisted state from `store`.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Draft ──► saved draft, or a fresh one (random no., today's date)   │
    /// │  2. Catalog ──► saved products (or the built-in 42), saved customers   │
    /// │  3. Export flag ──► idle                                               │
    /// │                                                                         │
    /// │  Unreadable saved values were already replaced by defaults in the      │
    /// │  store layer; only I/O failures stop startup.                          │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub async fn open(config: AppConfig, store: Store) -> ApiResult<Self> {
        let draft = DraftState::load(&store, today()).await?;
        let catalog = CatalogState::load(&store).await?;

        Ok(Desk {
            config,
            store: StoreState::new(store),
            draft,
            catalog,
            exports: ExportState::new(),
        })
    }
}

/// Runs the desk: restores state and prints the current draft's
/// rendered document as JSON on stdout.
pub async fn run() -> ApiResult<()> {
    init_tracing();

    let config = AppConfig::from_env();
    info!(
        data_dir = %config.data_dir.display(),
        output_dir = %config.output_dir.display(),
        "Starting Tax Invoice Desk"
    );

    let store = Store::file(config.data_dir.clone());
    let desk = Desk::open(config, store).await?;

    let document = commands::invoice::render_draft(&desk.draft, &desk.config.layout).await;
    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| ApiError::internal(format!("Failed to encode document: {}", e)))?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)
        .map_err(|e| ApiError::internal(format!("Failed to write document: {}", e)))?;

    info!(
        invoice_no = %document.meta.invoice_no,
        grand_total = document.totals.grand_total,
        "Draft rendered"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=invoice_store=trace` - Trace the store only
/// - Default: INFO, DEBUG for the invoice crates
///
/// Logs go to stderr so stdout stays clean JSON.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,invoice=debug"));

    // A second call (tests, embedding shells) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::InvoiceEdit;

    #[tokio::test]
    async fn test_open_fresh_desk() {
        let desk = Desk::open(AppConfig::default(), Store::in_memory())
            .await
            .unwrap();

        let draft = desk.draft.snapshot().await;
        assert_eq!(draft.invoice_no.len(), 3);
        assert!(!desk.exports.is_exporting());
        assert_eq!(desk.catalog.with_products(|p| p.len()).await, 42);
    }

    #[tokio::test]
    async fn test_reopen_restores_edits() {
        let dir = tempfile::tempdir().unwrap();

        let desk = Desk::open(AppConfig::default(), Store::file(dir.path()))
            .await
            .unwrap();
        commands::invoice::apply_edit(
            &desk.draft,
            &desk.store,
            InvoiceEdit::SetVehicleNo {
                value: "ts09ab1234".to_string(),
            },
        )
        .await
        .unwrap();
        drop(desk);

        let desk = Desk::open(AppConfig::default(), Store::file(dir.path()))
            .await
            .unwrap();
        let document =
            commands::invoice::render_draft(&desk.draft, &desk.config.layout).await;
        assert_eq!(document.meta.vehicle_no, "TS09AB1234");
    }
}
