//! # Export Commands
//!
//! Turns the current draft into a PDF file.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    PDF Export                                           │
//! │                                                                         │
//! │  export_pdf()                                                          │
//! │       │                                                                 │
//! │       ├── ExportState::begin() ── busy? ──► EXPORT_IN_PROGRESS         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render current snapshot ──► ExportRequest                             │
//! │       │   A4 210×297 mm, #ffffff, scale 4                              │
//! │       │   SKE_Invoice_<no>.pdf                                         │
//! │       ▼                                                                 │
//! │  DocumentRasterizer::rasterize ──► PDF bytes                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write <output_dir>/<file_name>                                        │
//! │                                                                         │
//! │  Any failure: one error! event, one EXPORT_FAILED result, no retry.    │
//! │  The guard drops on every path, so the user can try again.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

use invoice_core::ExportRequest;

use crate::commands::invoice::render_invoice;
use crate::error::{ApiError, ApiResult};
use crate::state::{AppConfig, DraftState, ExportState};

/// Rasterizing failed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct RasterizeError(pub String);

/// Produces PDF bytes for a rendered document.
///
/// Implemented by the embedding shell (a webview capture, a headless
/// browser, a PDF library).
#[async_trait]
pub trait DocumentRasterizer: Send + Sync {
    async fn rasterize(&self, request: &ExportRequest) -> Result<Vec<u8>, RasterizeError>;
}

/// A finished export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Exports the current draft as a PDF.
///
/// ## Returns
/// * `Ok(ExportOutcome)` - file written
/// * `Err(EXPORT_IN_PROGRESS)` - another export is running
/// * `Err(EXPORT_FAILED)` - rasterizing or writing failed
pub async fn export_pdf(
    draft: &DraftState,
    config: &AppConfig,
    exports: &ExportState,
    rasterizer: &dyn DocumentRasterizer,
) -> ApiResult<ExportOutcome> {
    let _guard = exports.begin()?;

    let invoice = draft.snapshot().await;
    let document = render_invoice(&invoice, &config.layout);
    let request = ExportRequest::new(&config.company_code, &invoice.invoice_no, document);
    info!(file_name = %request.file_name, "Exporting invoice");

    let pdf = rasterizer
        .rasterize(&request)
        .await
        .map_err(|e| export_failure(&request.file_name, &e.to_string()))?;

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .map_err(|e| export_failure(&request.file_name, &e.to_string()))?;

    let path = config.output_dir.join(&request.file_name);
    tokio::fs::write(&path, &pdf)
        .await
        .map_err(|e| export_failure(&request.file_name, &e.to_string()))?;

    info!(path = %path.display(), bytes = pdf.len(), "Invoice exported");
    Ok(ExportOutcome {
        file_name: request.file_name,
        path,
        bytes: pdf.len(),
    })
}

fn export_failure(file_name: &str, cause: &str) -> ApiError {
    error!(file_name = %file_name, error = %cause, "Export failed");
    ApiError::export_failed(format!("Could not export {}", file_name))
}
