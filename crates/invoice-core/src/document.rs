//! # Document Formatter
//!
//! Projects an [`Invoice`] and its [`ComputedTotals`] onto the fixed
//! single-page layout of a printed tax invoice.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ [logo]  TAX INVOICE   COMPANY NAME            Mobile / Email / Website  │  header
//! │                       tagline · address       GSTIN                     │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │ Invoice No · PO No / Ref · Billing Date · Vehicle No                    │  meta grid
//! │ Intra-State Sale (Central & State GST)                                  │  banner
//! ├────────────────────────────────────┬────────────────────────────────────┤
//! │ Bill To                            │ Ship To                            │  parties
//! ├────────────────────────────────────┴────────────────────────────────────┤
//! │ S.No │ Description │ HSN │ GST% │ Rate │ Qty │ Taxable │ Total          │
//! │  1   │ ...         │     │      │      │     │         │                │  ≥ min rows,
//! │  ..  │             │     │      │      │     │         │                │  padded blank
//! ├────────────────────────────────────┬────────────────────────────────────┤
//! │ Declaration & Certification        │ Taxable / (-) / (+) / tax lines    │
//! │ Receiver's Signature · GSTIN       │ Grand Total                        │
//! ├────────────────────────────────────┴────────────────────────────────────┤
//! │ Total In Words: ... ONLY                                                │
//! │ Bank Payment Details (QR)                    For COMPANY / Signatory    │
//! │ Terms & Conditions (first N)                 closing note               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The projection is total: any invoice produces a document. Blank fields
//! render as their placeholder, never as an empty cell.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::format::{
    format_inr, format_invoice_date, format_percent, format_quantity, format_rate,
    or_placeholder, BLANK_RULE, DEFAULT_ACCOUNT_TYPE, NOT_AVAILABLE, NO_REFERENCE,
};
use crate::money::Amount;
use crate::totals::ComputedTotals;
use crate::types::{Invoice, LineItem, Party};
use crate::words::grand_total_in_words;
use crate::{MAX_DISPLAYED_TERMS, MAX_TABLE_ROWS, MIN_TABLE_ROWS};

const TITLE: &str = "Tax Invoice";
const TAGLINE: &str = "Manufacturers & Suppliers of Organic Fertilizers";
const DECLARATION_TITLE: &str = "Declaration & Certification";
const DECLARATION_TEXT: &str = "We hereby certify that our registration certificate under the GST Act is in force on the date of sale. The transaction covered by this invoice is accounted for in the turnover of sales while filing returns and the due tax has been or shall be paid. Goods once sold will not be taken back.";
const CLOSING_MOTTO: &str = "Growing together with Organic Excellence";
const CLOSING_THANKS: &str = "Thank you for your business";

/// Column headings of the item table, left to right.
pub const TABLE_HEADERS: [&str; 8] = [
    "S.No",
    "Description of Goods",
    "HSN/SAC",
    "GST%",
    "Rate",
    "Qty",
    "Taxable",
    "Total",
];

// =============================================================================
// Layout Policy
// =============================================================================

/// Display policies that shape the page without touching the data.
///
/// ## Defaults
/// - `min_table_rows`: 23, enough to keep the footer at the page bottom
/// - `max_displayed_terms`: 4; longer term lists are stored but not printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LayoutPolicy {
    pub min_table_rows: usize,
    pub max_displayed_terms: usize,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        LayoutPolicy {
            min_table_rows: MIN_TABLE_ROWS,
            max_displayed_terms: MAX_DISPLAYED_TERMS,
        }
    }
}

// =============================================================================
// Document Blocks
// =============================================================================

/// Company identity at the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeaderBlock {
    pub title: String,
    pub logo: String,
    pub company_name: String,
    pub tagline: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub website: String,
    pub gstin: String,
}

/// Invoice number, reference, date and vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MetaGrid {
    pub invoice_no: String,
    pub po_no: String,
    pub billing_date: String,
    pub vehicle_no: String,
}

/// Bill-to or ship-to block.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PartyBlock {
    pub heading: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub gstin: String,
}

impl PartyBlock {
    fn new(heading: &str, party: &Party) -> Self {
        PartyBlock {
            heading: heading.to_string(),
            name: or_placeholder(&party.name, BLANK_RULE).to_uppercase(),
            address: or_placeholder(&party.address, BLANK_RULE).to_string(),
            phone: or_placeholder(&party.phone, NOT_AVAILABLE).to_string(),
            gstin: or_placeholder(&party.gstin, NOT_AVAILABLE).to_string(),
        }
    }
}

/// The populated cells of one item row.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemCells {
    pub description: String,
    pub hsn_code: String,
    pub gst_percent: String,
    pub rate: String,
    pub quantity: String,
    pub taxable: String,
    pub total: String,
}

impl ItemCells {
    fn new(item: &LineItem) -> Self {
        ItemCells {
            description: item.description.to_uppercase(),
            hsn_code: item.hsn_code.clone(),
            gst_percent: format_percent(item.gst_rate_percent),
            rate: format_rate(item.unit_rate),
            quantity: format_quantity(item.quantity),
            taxable: format_rate(item.taxable_amount().value()),
            total: format_rate(item.net_amount().value()),
        }
    }
}

/// One table row. Padding rows keep their serial number but have no cells.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemRow {
    pub serial: usize,
    pub cells: Option<ItemCells>,
}

impl ItemRow {
    pub fn is_blank(&self) -> bool {
        self.cells.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemTable {
    pub headers: Vec<String>,
    pub rows: Vec<ItemRow>,
}

/// A label and its formatted value in the totals panel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PanelLine {
    pub label: String,
    pub value: String,
}

impl PanelLine {
    fn new(label: &str, value: String) -> Self {
        PanelLine {
            label: label.to_string(),
            value,
        }
    }
}

/// Right-hand totals column.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TotalsPanel {
    pub taxable: PanelLine,
    pub discount: PanelLine,
    pub freight: PanelLine,
    /// One IGST line, or CGST then SGST.
    pub tax_lines: Vec<PanelLine>,
    pub grand_total: PanelLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeclarationBlock {
    pub title: String,
    pub text: String,
    pub receiver_signature_label: String,
    pub verified_gstin_label: String,
    pub gstin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BankBlock {
    pub heading: String,
    /// Payment QR image; the "Scan to Pay" caption only shows with it.
    pub qr_code: Option<String>,
    pub qr_caption: Option<String>,
    pub account_holder: String,
    pub bank_and_branch: String,
    pub account_type: String,
    pub account_no: String,
    pub ifsc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignatoryBlock {
    pub for_company: String,
    pub signature: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TermsBlock {
    pub heading: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClosingNote {
    pub motto: String,
    pub thanks: String,
}

// =============================================================================
// Tax Invoice Document
// =============================================================================

/// The printable document, block by block in page order.
///
/// ## Example
/// ```rust
/// use invoice_core::{Invoice, LayoutPolicy, LineItem, TaxInvoiceDocument};
///
/// let mut invoice = Invoice::default();
/// invoice.items.push(LineItem { unit_rate: 200.0, quantity: 2.0, gst_rate_percent: 18.0, ..LineItem::default() });
///
/// let doc = TaxInvoiceDocument::from_invoice(&invoice, &LayoutPolicy::default());
/// assert_eq!(doc.items.rows.len(), 23);
/// assert_eq!(doc.amount_in_words, "Four hundred and seventy-two ONLY");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaxInvoiceDocument {
    pub header: HeaderBlock,
    pub meta: MetaGrid,
    pub sale_banner: String,
    pub bill_to: PartyBlock,
    pub ship_to: PartyBlock,
    pub items: ItemTable,
    pub totals_panel: TotalsPanel,
    pub declaration: DeclarationBlock,
    pub amount_in_words_label: String,
    pub amount_in_words: String,
    /// Set when a negative grand total was spelled as zero.
    pub words_clamped: bool,
    pub bank: BankBlock,
    pub signatory: SignatoryBlock,
    pub terms: TermsBlock,
    pub closing: ClosingNote,
    pub totals: ComputedTotals,
}

impl TaxInvoiceDocument {
    /// Computes totals and renders in one step.
    pub fn from_invoice(invoice: &Invoice, policy: &LayoutPolicy) -> Self {
        render(invoice, &invoice.totals(), policy)
    }
}

/// Renders `invoice` with already computed `totals`.
pub fn render(invoice: &Invoice, totals: &ComputedTotals, policy: &LayoutPolicy) -> TaxInvoiceDocument {
    let company = &invoice.company_details;
    let bank = &invoice.bank_details;
    let (amount_in_words, words_clamped) = grand_total_in_words(totals.grand_total);

    TaxInvoiceDocument {
        header: HeaderBlock {
            title: TITLE.to_string(),
            logo: invoice.effective_logo().to_string(),
            company_name: company.name.to_uppercase(),
            tagline: TAGLINE.to_string(),
            address: company.address.clone(),
            mobile: company.display_mobile().to_string(),
            email: company.email.clone(),
            website: company.website.clone(),
            gstin: company.gstin.clone(),
        },
        meta: MetaGrid {
            invoice_no: invoice.invoice_no.clone(),
            po_no: or_placeholder(&invoice.po_no, NO_REFERENCE).to_string(),
            billing_date: format_invoice_date(&invoice.date),
            vehicle_no: or_placeholder(&invoice.vehicle_no, NO_REFERENCE).to_uppercase(),
        },
        sale_banner: invoice.sale_type.banner().to_string(),
        bill_to: PartyBlock::new("Details of Receiver | Bill To", &invoice.billing_address),
        ship_to: PartyBlock::new("Details of Consignee | Ship To", &invoice.shipping_address),
        items: item_table(&invoice.items, policy.min_table_rows),
        totals_panel: totals_panel(invoice, totals),
        declaration: DeclarationBlock {
            title: DECLARATION_TITLE.to_string(),
            text: DECLARATION_TEXT.to_string(),
            receiver_signature_label: "Receiver's Signature".to_string(),
            verified_gstin_label: "Verified GSTIN".to_string(),
            gstin: company.gstin.clone(),
        },
        amount_in_words_label: "Total In Words:".to_string(),
        amount_in_words,
        words_clamped,
        bank: BankBlock {
            heading: "Bank Payment Details (NEFT / RTGS)".to_string(),
            qr_code: invoice.qr_code().map(str::to_string),
            qr_caption: invoice.qr_code().map(|_| "Scan to Pay".to_string()),
            account_holder: bank.account_holder.to_uppercase(),
            bank_and_branch: format!("{}, {}", bank.bank_name, bank.branch),
            account_type: bank
                .account_type
                .as_deref()
                .map(|t| or_placeholder(t, DEFAULT_ACCOUNT_TYPE))
                .unwrap_or(DEFAULT_ACCOUNT_TYPE)
                .to_string(),
            account_no: bank.account_no.clone(),
            ifsc: bank.ifsc.clone(),
        },
        signatory: SignatoryBlock {
            for_company: format!("For {}", company.name.to_uppercase()),
            signature: invoice.effective_signature().to_string(),
            caption: "Authorised Signatory".to_string(),
        },
        terms: TermsBlock {
            heading: "Terms & Conditions:".to_string(),
            entries: invoice
                .terms
                .iter()
                .take(policy.max_displayed_terms)
                .cloned()
                .collect(),
        },
        closing: ClosingNote {
            motto: format!("\"{}\"", CLOSING_MOTTO),
            thanks: CLOSING_THANKS.to_string(),
        },
        totals: *totals,
    }
}

/// Serial numbers run 1..=max(items, min_rows); rows past the items are blank.
///
/// Padding stops at `MAX_TABLE_ROWS`; items are never dropped.
fn item_table(items: &[LineItem], min_rows: usize) -> ItemTable {
    let row_count = items.len().max(min_rows.min(MAX_TABLE_ROWS));
    let rows = (0..row_count)
        .map(|index| ItemRow {
            serial: index + 1,
            cells: items.get(index).map(ItemCells::new),
        })
        .collect();

    ItemTable {
        headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

fn totals_panel(invoice: &Invoice, totals: &ComputedTotals) -> TotalsPanel {
    let adjustments = &invoice.adjustments;
    TotalsPanel {
        taxable: PanelLine::new("Taxable Amount", format_inr(totals.taxable_total.value())),
        discount: PanelLine::new("Discount", format!("(-) {}", format_inr(adjustments.discount))),
        freight: PanelLine::new(
            "Freight Charges",
            format!("(+) {}", format_inr(adjustments.freight_charges)),
        ),
        tax_lines: totals
            .tax_breakdown(invoice.sale_type)
            .lines()
            .into_iter()
            .map(|line| PanelLine::new(line.label, line.amount.to_string()))
            .collect(),
        grand_total: PanelLine::new("Grand Total", Amount::new(totals.grand_total as f64).to_string()),
    }
}
