//! # Export Parameters
//!
//! What the external rasterizer is asked to produce. Rasterizing and
//! writing the file happen in the app; this module only fixes the request.
//!
//! ```text
//!   TaxInvoiceDocument ──► ExportRequest ──► rasterizer ──► <CODE>_Invoice_<no>.pdf
//!                           A4 210×297 mm
//!                           background #ffffff
//!                           scale 4
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::document::TaxInvoiceDocument;

/// Page geometry and raster settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageSpec {
    pub width_mm: f64,
    pub height_mm: f64,
    pub background: String,
    /// Device pixels per CSS pixel when rasterizing.
    pub scale: u32,
}

impl PageSpec {
    /// Portrait A4, white, 4× scale.
    pub fn a4() -> Self {
        PageSpec {
            width_mm: 210.0,
            height_mm: 297.0,
            background: "#ffffff".to_string(),
            scale: 4,
        }
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        PageSpec::a4()
    }
}

/// One export job.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportRequest {
    pub file_name: String,
    pub page: PageSpec,
    pub document: TaxInvoiceDocument,
}

impl ExportRequest {
    pub fn new(company_code: &str, invoice_no: &str, document: TaxInvoiceDocument) -> Self {
        ExportRequest {
            file_name: export_file_name(company_code, invoice_no),
            page: PageSpec::a4(),
            document,
        }
    }
}

/// `<CODE>_Invoice_<invoiceNo>.pdf`.
///
/// Path separators in the invoice number are replaced so the name always
/// stays inside the output directory.
///
/// ## Example
/// ```rust
/// use invoice_core::export::export_file_name;
///
/// assert_eq!(export_file_name("SKE", "482"), "SKE_Invoice_482.pdf");
/// ```
pub fn export_file_name(company_code: &str, invoice_no: &str) -> String {
    let safe_no: String = invoice_no
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '-',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}_Invoice_{}.pdf", company_code, safe_no)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LayoutPolicy;
    use crate::types::Invoice;

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name("SKE", "482"), "SKE_Invoice_482.pdf");
        assert_eq!(export_file_name("ACME", "2024/17"), "ACME_Invoice_2024-17.pdf");
        assert_eq!(export_file_name("SKE", ""), "SKE_Invoice_.pdf");
    }

    #[test]
    fn test_request_uses_a4() {
        let mut invoice = Invoice::default();
        invoice.invoice_no = "101".to_string();
        let document = TaxInvoiceDocument::from_invoice(&invoice, &LayoutPolicy::default());
        let request = ExportRequest::new("SKE", &invoice.invoice_no, document);
        assert_eq!(request.file_name, "SKE_Invoice_101.pdf");
        assert_eq!(request.page.width_mm, 210.0);
        assert_eq!(request.page.height_mm, 297.0);
        assert_eq!(request.page.background, "#ffffff");
        assert_eq!(request.page.scale, 4);
    }
}
