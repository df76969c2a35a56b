//! # Domain Types
//!
//! The invoice record and everything it aggregates.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Invoice                                    │
//! │  invoice_no · date · po_no · vehicle_no · sale_type                     │
//! │                                                                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌──────────────────┐              │
//! │  │ billing Party │ │shipping Party │ │ CompanyDetails   │              │
//! │  └───────────────┘ └───────────────┘ └──────────────────┘              │
//! │                                                                         │
//! │  ┌───────────────────────────┐ ┌─────────────┐ ┌──────────────┐        │
//! │  │ items: Vec<LineItem>      │ │ Adjustments │ │ BankDetails  │        │
//! │  │  unit_rate × quantity     │ │  discount   │ └──────────────┘        │
//! │  │  gst_rate_percent         │ │  freight    │                          │
//! │  └───────────────────────────┘ └─────────────┘  terms · logo · qr      │
//! └─────────────────────────────────────────────────────────────────────────┘
//!
//!  Master data (separate persisted lists): Product, SavedCustomer
//! ```
//!
//! ## Persisted Layout
//! Every type serializes with camelCase keys (`invoiceNo`, `itemRate`,
//! `freightCharges`, ...) and decodes tolerantly: missing or `null` fields
//! take their documented default, numeric fields coerce strings and garbage
//! to numbers (garbage → 0). A draft written by any earlier editor version
//! therefore loads instead of being discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::defaults;
use crate::lenient;
use crate::money::Amount;
use crate::totals::{compute_totals, ComputedTotals};
use crate::MANUAL_PRODUCT_REF;

// =============================================================================
// Sale Type
// =============================================================================

/// Whether the sale crosses a state border.
///
/// Purely a display switch: the GST amount is identical either way, only
/// its presentation changes (one IGST line vs. CGST + SGST halves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SaleType {
    /// Inter-state sale, reported as a single IGST line.
    Central,
    /// Intra-state sale, reported as equal CGST and SGST halves.
    #[default]
    Local,
}

impl SaleType {
    /// Banner printed under the meta grid.
    pub fn banner(&self) -> &'static str {
        match self {
            SaleType::Central => "Inter-State Sale (Integrated GST)",
            SaleType::Local => "Intra-State Sale (Central & State GST)",
        }
    }
}

/// Anything other than `"Central"` is a local sale, the editor's default.
fn sale_type_or_local<'de, D>(deserializer: D) -> Result<SaleType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if s == "Central" => SaleType::Central,
        _ => SaleType::Local,
    })
}

// =============================================================================
// Parties
// =============================================================================

/// A billing or shipping party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Party {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::text")]
    pub gstin: String,
}

/// A customer kept in the reusable address book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct SavedCustomer {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::text")]
    pub gstin: String,
}

impl SavedCustomer {
    /// The party fields copied onto an invoice when this customer is picked.
    pub fn party(&self) -> Party {
        Party {
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            gstin: self.gstin.clone(),
        }
    }
}

// =============================================================================
// Company & Bank
// =============================================================================

/// Identity of the issuing business, printed in the header.
///
/// Missing fields in a persisted draft are filled from the built-in
/// company record, field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(deserialize_with = "lenient::text")]
    pub contact: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub mobile_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub website: String,
    #[serde(deserialize_with = "lenient::text")]
    pub gstin: String,
    /// Logo image reference (URL or data URI).
    #[serde(deserialize_with = "lenient::text")]
    pub logo: String,
    /// Signature image reference (URL or data URI).
    #[serde(deserialize_with = "lenient::text")]
    pub signature: String,
}

impl Default for CompanyDetails {
    fn default() -> Self {
        defaults::company_details()
    }
}

impl CompanyDetails {
    /// Mobile number when set, otherwise the general contact line.
    pub fn display_mobile(&self) -> &str {
        match self.mobile_number.as_deref() {
            Some(mobile) if !mobile.is_empty() => mobile,
            _ => &self.contact,
        }
    }
}

/// Bank account printed in the payment block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct BankDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub bank_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub account_holder: String,
    #[serde(deserialize_with = "lenient::text")]
    pub account_no: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub account_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub ifsc: String,
    #[serde(deserialize_with = "lenient::text")]
    pub branch: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub upi_id: Option<String>,
}

impl Default for BankDetails {
    fn default() -> Self {
        defaults::bank_details()
    }
}

// =============================================================================
// Product (master catalog)
// =============================================================================

/// A product in the master catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub hsn_code: String,
    /// Base rate per unit, before GST.
    #[serde(deserialize_with = "lenient::number")]
    pub rate: f64,
    /// GST rate in percent (18.0 = 18%).
    #[serde(deserialize_with = "lenient::number")]
    pub gst_rate: f64,
}

// =============================================================================
// Line Item
// =============================================================================

/// One billable line on the invoice.
///
/// ## Snapshot Pattern
/// Description, HSN code, rates are copied from the catalog when the line
/// is added; editing the catalog later never changes an existing invoice.
///
/// ## No Validation
/// Negative rates or quantities are a caller bug, not a recoverable state.
/// They flow through the totals unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    /// Catalog product id, or `"manual"` for hand-entered lines.
    #[serde(rename = "productId", deserialize_with = "lenient::text")]
    pub product_ref: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub hsn_code: String,
    #[serde(rename = "gstRate", deserialize_with = "lenient::number")]
    pub gst_rate_percent: f64,
    #[serde(rename = "itemRate", deserialize_with = "lenient::number")]
    pub unit_rate: f64,
    #[serde(rename = "qty", deserialize_with = "lenient::number")]
    pub quantity: f64,
}

impl LineItem {
    /// Creates a line from a catalog product, quantity 1.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: new_id(),
            product_ref: product.id.clone(),
            description: product.name.clone(),
            hsn_code: product.hsn_code.clone(),
            gst_rate_percent: product.gst_rate,
            unit_rate: product.rate,
            quantity: 1.0,
        }
    }

    /// Creates a blank hand-entered line, quantity 1.
    pub fn manual() -> Self {
        LineItem {
            id: new_id(),
            product_ref: MANUAL_PRODUCT_REF.to_string(),
            quantity: 1.0,
            ..LineItem::default()
        }
    }

    /// `unit_rate × quantity`, full precision.
    #[inline]
    pub fn taxable_amount(&self) -> Amount {
        Amount::line_total(self.unit_rate, self.quantity)
    }

    /// `unit_rate × quantity × gst_rate_percent / 100`, full precision.
    #[inline]
    pub fn gst_amount(&self) -> Amount {
        self.taxable_amount().gst_at(self.gst_rate_percent)
    }

    /// Taxable amount plus GST.
    #[inline]
    pub fn net_amount(&self) -> Amount {
        self.taxable_amount() + self.gst_amount()
    }
}

// =============================================================================
// Adjustments
// =============================================================================

/// Invoice-level flat adjustments (not per line).
///
/// Stored inline on the invoice record as `discount` / `freightCharges`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Adjustments {
    /// Subtracted from the total.
    #[serde(deserialize_with = "lenient::number")]
    pub discount: f64,
    /// Added to the total.
    #[serde(deserialize_with = "lenient::number")]
    pub freight_charges: f64,
}

// =============================================================================
// Invoice
// =============================================================================

/// The whole invoice record.
///
/// ## Lifecycle
/// ```text
/// Invoice::draft() ──► apply(edit) ──► apply(edit) ──► ... ──► render
///                          │               │
///                          ▼               ▼
///                       persist         persist      (whole snapshot each time)
/// ```
/// Every edit yields a new snapshot (see [`crate::editor`]); totals are
/// never stored, only recomputed with [`Invoice::totals`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub invoice_no: String,
    /// ISO date as entered (`2025-01-05`).
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub po_no: String,
    #[serde(deserialize_with = "lenient::text")]
    pub vehicle_no: String,
    #[serde(deserialize_with = "sale_type_or_local")]
    pub sale_type: SaleType,
    #[serde(deserialize_with = "lenient::or_default")]
    pub billing_address: Party,
    #[serde(deserialize_with = "lenient::or_default")]
    pub shipping_address: Party,
    #[serde(deserialize_with = "lenient::or_default")]
    pub company_details: CompanyDetails,
    #[serde(deserialize_with = "lenient::or_default")]
    pub items: Vec<LineItem>,
    #[serde(flatten)]
    pub adjustments: Adjustments,
    #[serde(deserialize_with = "lenient::or_default")]
    pub bank_details: BankDetails,
    #[serde(deserialize_with = "terms_or_default")]
    pub terms: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: String,
    /// Payment QR image reference; empty when none.
    #[serde(deserialize_with = "lenient::text")]
    pub qr_code: String,
    #[serde(deserialize_with = "lenient::text")]
    pub signature: String,
}

fn terms_or_default<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::text_list(deserializer)?.unwrap_or_else(defaults::default_terms))
}

impl Default for Invoice {
    /// The blank record every draft starts from.
    fn default() -> Self {
        let company = defaults::company_details();
        Invoice {
            id: String::new(),
            invoice_no: String::new(),
            date: String::new(),
            po_no: String::new(),
            vehicle_no: String::new(),
            sale_type: SaleType::Local,
            billing_address: Party::default(),
            shipping_address: Party::default(),
            logo: company.logo.clone(),
            signature: company.signature.clone(),
            company_details: company,
            items: Vec::new(),
            adjustments: Adjustments::default(),
            bank_details: defaults::bank_details(),
            terms: defaults::default_terms(),
            qr_code: String::new(),
        }
    }
}

impl Invoice {
    /// Starts a new draft with the given number and billing date.
    pub fn draft(invoice_no: impl Into<String>, date: NaiveDate) -> Self {
        Invoice {
            invoice_no: invoice_no.into(),
            date: date.format("%Y-%m-%d").to_string(),
            ..Invoice::default()
        }
    }

    /// Recomputes the totals for the current snapshot.
    pub fn totals(&self) -> ComputedTotals {
        compute_totals(&self.items, &self.adjustments)
    }

    /// Applies load-time fallbacks to a decoded draft.
    ///
    /// Empty logo or signature fall back to the built-in company images.
    /// Field-wise company/bank merging already happened during decoding.
    pub fn normalized(mut self) -> Self {
        if self.logo.is_empty() {
            self.logo = defaults::company_details().logo;
        }
        if self.signature.is_empty() {
            self.signature = defaults::company_details().signature;
        }
        self
    }

    /// Logo to print: the invoice's own, else the company's.
    pub fn effective_logo(&self) -> &str {
        if self.logo.is_empty() {
            &self.company_details.logo
        } else {
            &self.logo
        }
    }

    /// Signature to print: the invoice's own, else the company's.
    pub fn effective_signature(&self) -> &str {
        if self.signature.is_empty() {
            &self.company_details.signature
        } else {
            &self.signature
        }
    }

    /// Payment QR reference, if one is set.
    pub fn qr_code(&self) -> Option<&str> {
        if self.qr_code.is_empty() {
            None
        } else {
            Some(&self.qr_code)
        }
    }
}

/// Fresh random id for line items and master data.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sale_type_default() {
        assert_eq!(SaleType::default(), SaleType::Local);
    }

    #[test]
    fn test_invoice_default_carries_built_in_records() {
        let invoice = Invoice::default();
        assert_eq!(invoice.terms.len(), 4);
        assert_eq!(invoice.company_details, defaults::company_details());
        assert_eq!(invoice.logo, invoice.company_details.logo);
        assert!(invoice.items.is_empty());
        assert!(invoice.qr_code().is_none());
    }

    #[test]
    fn test_draft_formats_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let invoice = Invoice::draft("482", date);
        assert_eq!(invoice.invoice_no, "482");
        assert_eq!(invoice.date, "2025-01-05");
    }

    #[test]
    fn test_line_item_persisted_keys() {
        let item = LineItem {
            id: "a1".to_string(),
            product_ref: "7".to_string(),
            description: "BLUME (1 Lt)".to_string(),
            hsn_code: "3808:9340".to_string(),
            gst_rate_percent: 18.0,
            unit_rate: 466.11,
            quantity: 2.0,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["productId"], "7");
        assert_eq!(value["gstRate"], 18.0);
        assert_eq!(value["itemRate"], 466.11);
        assert_eq!(value["qty"], 2.0);
        assert_eq!(value["hsnCode"], "3808:9340");
    }

    #[test]
    fn test_adjustments_are_flattened() {
        let mut invoice = Invoice::default();
        invoice.adjustments.discount = 10.0;
        invoice.adjustments.freight_charges = 25.0;
        let value = serde_json::to_value(&invoice).unwrap();
        assert_eq!(value["discount"], 10.0);
        assert_eq!(value["freightCharges"], 25.0);
        assert!(value.get("adjustments").is_none());
    }

    #[test]
    fn test_partial_draft_falls_back_field_by_field() {
        let raw = json!({
            "invoiceNo": "101",
            "saleType": "Central",
            "companyDetails": { "name": "ACME TRADERS" },
            "bankDetails": null,
            "items": [{ "id": "x", "itemRate": "250", "qty": null, "gstRate": 5 }],
            "discount": "abc"
        });
        let invoice: Invoice = serde_json::from_value(raw).unwrap();

        assert_eq!(invoice.invoice_no, "101");
        assert_eq!(invoice.sale_type, SaleType::Central);
        assert_eq!(invoice.company_details.name, "ACME TRADERS");
        assert_eq!(
            invoice.company_details.gstin,
            defaults::company_details().gstin
        );
        assert_eq!(invoice.bank_details, defaults::bank_details());
        assert_eq!(invoice.items[0].unit_rate, 250.0);
        assert_eq!(invoice.items[0].quantity, 0.0);
        assert_eq!(invoice.adjustments.discount, 0.0);
        assert_eq!(invoice.terms, defaults::default_terms());
    }

    #[test]
    fn test_unknown_sale_type_is_local() {
        let invoice: Invoice = serde_json::from_value(json!({ "saleType": "Export" })).unwrap();
        assert_eq!(invoice.sale_type, SaleType::Local);
    }

    #[test]
    fn test_empty_terms_array_is_kept() {
        let invoice: Invoice = serde_json::from_value(json!({ "terms": [] })).unwrap();
        assert!(invoice.terms.is_empty());
    }

    #[test]
    fn test_normalized_restores_images() {
        let invoice: Invoice =
            serde_json::from_value(json!({ "logo": "", "signature": null })).unwrap();
        let invoice = invoice.normalized();
        assert_eq!(invoice.logo, defaults::company_details().logo);
        assert_eq!(invoice.signature, defaults::company_details().signature);
    }

    #[test]
    fn test_invoice_round_trips_through_json() {
        let mut invoice = Invoice::draft("9", NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        invoice.items.push(LineItem::manual());
        invoice.qr_code = "https://example.test/qr.png".to_string();
        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn test_display_mobile_falls_back_to_contact() {
        let mut company = defaults::company_details();
        company.mobile_number = None;
        company.contact = "040-1234".to_string();
        assert_eq!(company.display_mobile(), "040-1234");
    }
}
