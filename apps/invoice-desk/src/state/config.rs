//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INVOICE_*`)
//! 2. Platform directories (`directories` crate)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no lock.

use directories::ProjectDirs;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use invoice_core::{LayoutPolicy, DEFAULT_COMPANY_CODE, MAX_TABLE_ROWS};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Where the draft, catalog and customers are stored.
    pub data_dir: PathBuf,

    /// Where exported PDFs are written.
    pub output_dir: PathBuf,

    /// Printed table height and terms window.
    pub layout: LayoutPolicy,

    /// Prefix of exported file names (`SKE_Invoice_482.pdf`).
    pub company_code: String,
}

impl Default for AppConfig {
    /// Platform directories when they can be determined, the working
    /// directory otherwise.
    fn default() -> Self {
        let (data_dir, output_dir) = match ProjectDirs::from("com", "invoice", "desk") {
            Some(dirs) => (
                dirs.data_dir().to_path_buf(),
                dirs.data_dir().join("exports"),
            ),
            None => (PathBuf::from("invoice-data"), PathBuf::from(".")),
        };

        AppConfig {
            data_dir,
            output_dir,
            layout: LayoutPolicy::default(),
            company_code: DEFAULT_COMPANY_CODE.to_string(),
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INVOICE_DATA_DIR`: Override the data directory
    /// - `INVOICE_OUTPUT_DIR`: Override the export directory
    /// - `INVOICE_MIN_TABLE_ROWS`: Minimum printed item rows (e.g., "23")
    /// - `INVOICE_MAX_DISPLAYED_TERMS`: Terms shown on the page (e.g., "4")
    /// - `INVOICE_COMPANY_CODE`: Export file name prefix (e.g., "SKE")
    pub fn from_env() -> Self {
        AppConfig::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(dir) = non_empty(lookup("INVOICE_DATA_DIR")) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(dir) = non_empty(lookup("INVOICE_OUTPUT_DIR")) {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(rows) = parse_count(
            "INVOICE_MIN_TABLE_ROWS",
            lookup("INVOICE_MIN_TABLE_ROWS"),
            MAX_TABLE_ROWS,
        ) {
            config.layout.min_table_rows = rows;
        }

        if let Some(terms) = parse_count(
            "INVOICE_MAX_DISPLAYED_TERMS",
            lookup("INVOICE_MAX_DISPLAYED_TERMS"),
            MAX_DISPLAYED_TERMS_SETTING,
        ) {
            config.layout.max_displayed_terms = terms;
        }

        if let Some(code) = non_empty(lookup("INVOICE_COMPANY_CODE")) {
            config.company_code = code;
        }

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Largest accepted `INVOICE_MAX_DISPLAYED_TERMS`.
const MAX_DISPLAYED_TERMS_SETTING: usize = 50;

/// Unparseable or out-of-range counts are ignored with a warning; the
/// default stays.
fn parse_count(name: &str, value: Option<String>, max: usize) -> Option<usize> {
    let raw = non_empty(value)?;
    match raw.parse::<usize>() {
        Ok(n) if n <= max => Some(n),
        Ok(_) => {
            warn!(variable = %name, value = %raw, max, "Ignoring out-of-range setting");
            None
        }
        Err(_) => {
            warn!(variable = %name, value = %raw, "Ignoring non-numeric setting");
            None
        }
    }
}
