//! End-to-end scenarios: editor actions in, printed document out.

use chrono::NaiveDate;
use invoice_core::defaults::master_products;
use invoice_core::editor::{LineItemPatch, PartyRole};
use invoice_core::{
    amount_in_words, Invoice, InvoiceEdit, LayoutPolicy, LineItem, SaleType, SavedCustomer,
    TaxInvoiceDocument,
};

fn single_line_invoice(sale_type: SaleType) -> Invoice {
    let mut invoice = Invoice::draft("482", NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    invoice.sale_type = sale_type;
    invoice.items.push(LineItem {
        id: "l1".to_string(),
        description: "Acrid (250 ml)".to_string(),
        hsn_code: "3808:9910".to_string(),
        unit_rate: 200.0,
        quantity: 2.0,
        gst_rate_percent: 18.0,
        ..LineItem::default()
    });
    invoice
}

#[test]
fn test_local_sale_end_to_end() {
    let invoice = single_line_invoice(SaleType::Local);
    let totals = invoice.totals();

    assert_eq!(totals.taxable_total.value(), 400.0);
    assert_eq!(totals.gst_total.value(), 72.0);
    assert_eq!(totals.grand_total, 472);

    let doc = TaxInvoiceDocument::from_invoice(&invoice, &LayoutPolicy::default());
    let tax: Vec<(&str, &str)> = doc
        .totals_panel
        .tax_lines
        .iter()
        .map(|l| (l.label.as_str(), l.value.as_str()))
        .collect();
    assert_eq!(tax, vec![("CGST Output", "₹36.00"), ("SGST Output", "₹36.00")]);
    assert_eq!(doc.totals_panel.taxable.value, "₹400.00");
    assert_eq!(doc.totals_panel.grand_total.value, "₹472.00");
    assert_eq!(doc.amount_in_words, "Four hundred and seventy-two ONLY");
    assert!(!doc.words_clamped);
    assert_eq!(doc.meta.billing_date, "05 Jan 2025");
    assert_eq!(doc.items.rows.len(), 23);

    let cells = doc.items.rows[0].cells.as_ref().unwrap();
    assert_eq!(cells.description, "ACRID (250 ML)");
    assert_eq!(cells.gst_percent, "18%");
    assert_eq!(cells.rate, "200.00");
    assert_eq!(cells.quantity, "2");
    assert_eq!(cells.taxable, "400.00");
    assert_eq!(cells.total, "472.00");
}

#[test]
fn test_central_sale_shows_one_tax_line() {
    let invoice = single_line_invoice(SaleType::Central);
    let doc = TaxInvoiceDocument::from_invoice(&invoice, &LayoutPolicy::default());
    assert_eq!(doc.totals_panel.tax_lines.len(), 1);
    assert_eq!(doc.totals_panel.tax_lines[0].label, "IGST Output");
    assert_eq!(doc.totals_panel.tax_lines[0].value, "₹72.00");
    assert_eq!(doc.amount_in_words, "Four hundred and seventy-two ONLY");
}

#[test]
fn test_editing_session_builds_the_same_invoice() {
    let catalog = master_products();
    let acrid = catalog.iter().find(|p| p.id == "1").unwrap().clone();

    let customer = SavedCustomer {
        id: "c1".to_string(),
        name: "Ravi Agro Agencies".to_string(),
        address: "Main Road, Siddipet".to_string(),
        phone: "9848012345".to_string(),
        gstin: "36ABCDE1234F1Z5".to_string(),
    };

    let edits = [
        InvoiceEdit::SetInvoiceNo {
            value: "482".to_string(),
        },
        InvoiceEdit::SetDate {
            value: "2025-01-05".to_string(),
        },
        InvoiceEdit::ApplySavedCustomer {
            customer,
            role: PartyRole::Billing,
        },
        InvoiceEdit::CopyBillingToShipping,
        InvoiceEdit::AddProductItem { product: acrid },
    ];
    let invoice = edits
        .iter()
        .fold(Invoice::default(), |snapshot, edit| snapshot.apply(edit));

    let id = invoice.items[0].id.clone();
    let invoice = invoice.apply(&InvoiceEdit::UpdateItem {
        id,
        patch: LineItemPatch {
            quantity: Some(2.0),
            ..LineItemPatch::default()
        },
    });

    let doc = TaxInvoiceDocument::from_invoice(&invoice, &LayoutPolicy::default());
    assert_eq!(doc.totals.grand_total, 472);
    assert_eq!(doc.bill_to.name, "RAVI AGRO AGENCIES");
    assert_eq!(doc.ship_to.gstin, "36ABCDE1234F1Z5");
    assert_eq!(doc.sale_banner, "Intra-State Sale (Central & State GST)");
}

#[test]
fn test_words_examples() {
    for (n, words) in [
        (0, "ZERO ONLY"),
        (1, "One ONLY"),
        (100, "One hundred ONLY"),
        (1234, "One thousand two hundred and thirty-four ONLY"),
        (100000, "One lakh ONLY"),
        (10000000, "One crore ONLY"),
    ] {
        assert_eq!(amount_in_words(n), words);
    }
}

#[test]
fn test_persisted_draft_survives_round_trip_and_renders() {
    let invoice = single_line_invoice(SaleType::Central);
    let json = serde_json::to_string(&invoice).unwrap();
    let restored: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, invoice);
    assert_eq!(
        TaxInvoiceDocument::from_invoice(&restored, &LayoutPolicy::default()),
        TaxInvoiceDocument::from_invoice(&invoice, &LayoutPolicy::default())
    );
}
