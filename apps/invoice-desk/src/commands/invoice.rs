//! # Invoice Commands
//!
//! Editing, resetting and rendering the live draft.
//!
//! ## Edit Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Edit Loop                                      │
//! │                                                                         │
//! │  editor sends { "action": "updateItem", "id": "..", "patch": {..} }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_edit() ──► Invoice::apply ──► save snapshot                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DraftView { invoice, totals }  (totals recomputed, never stored)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  render_draft() ──► TaxInvoiceDocument for preview / export            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use invoice_core::editor::PartyRole;
use invoice_core::{ComputedTotals, Invoice, InvoiceEdit, LayoutPolicy, TaxInvoiceDocument};

use crate::error::ApiResult;
use crate::state::{today, CatalogState, DraftState, StoreState};

/// The draft plus its freshly computed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub invoice: Invoice,
    pub totals: ComputedTotals,
}

impl From<Invoice> for DraftView {
    fn from(invoice: Invoice) -> Self {
        let totals = invoice.totals();
        DraftView { invoice, totals }
    }
}

/// Gets the current draft.
pub async fn get_draft(draft: &DraftState) -> DraftView {
    debug!("get_draft command");
    DraftView::from(draft.snapshot().await)
}

/// Applies one editor action and persists the new snapshot.
///
/// ## Arguments
/// * `edit` - The action, as sent by the editor
///
/// ## Returns
/// The new snapshot with totals.
pub async fn apply_edit(
    draft: &DraftState,
    store: &StoreState,
    edit: InvoiceEdit,
) -> ApiResult<DraftView> {
    debug!(?edit, "apply_edit command");
    let invoice = draft.apply(store.inner(), &edit).await?;
    Ok(DraftView::from(invoice))
}

/// Adds a catalog product to the draft as a new line.
pub async fn add_catalog_item(
    draft: &DraftState,
    catalog: &CatalogState,
    store: &StoreState,
    product_id: &str,
) -> ApiResult<DraftView> {
    let product = catalog.product(product_id).await?;
    apply_edit(draft, store, InvoiceEdit::AddProductItem { product }).await
}

/// Fills the billing or shipping block from a saved customer.
pub async fn use_saved_customer(
    draft: &DraftState,
    catalog: &CatalogState,
    store: &StoreState,
    customer_id: &str,
    role: PartyRole,
) -> ApiResult<DraftView> {
    let customer = catalog.customer(customer_id).await?;
    apply_edit(draft, store, InvoiceEdit::ApplySavedCustomer { customer, role }).await
}

/// Discards the draft and starts a fresh one dated today.
pub async fn new_draft(draft: &DraftState, store: &StoreState) -> ApiResult<DraftView> {
    let invoice = draft.reset(store.inner(), today()).await?;
    Ok(DraftView::from(invoice))
}

/// Renders the current draft into the printable document.
///
/// A negative grand total still renders; its words line reads
/// `ZERO ONLY` and the document is flagged `wordsClamped`.
pub async fn render_draft(draft: &DraftState, layout: &LayoutPolicy) -> TaxInvoiceDocument {
    let invoice = draft.snapshot().await;
    render_invoice(&invoice, layout)
}

pub(crate) fn render_invoice(invoice: &Invoice, layout: &LayoutPolicy) -> TaxInvoiceDocument {
    let document = TaxInvoiceDocument::from_invoice(invoice, layout);
    if document.words_clamped {
        warn!(
            invoice_no = %invoice.invoice_no,
            grand_total = document.totals.grand_total,
            "Grand total is negative; amount in words shows zero"
        );
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::editor::LineItemPatch;
    use invoice_core::SaleType;
    use invoice_store::Store;

    struct Desk {
        store: StoreState,
        draft: DraftState,
        catalog: CatalogState,
    }

    async fn desk() -> Desk {
        let store = Store::in_memory();
        Desk {
            draft: DraftState::new(Invoice::default()),
            catalog: CatalogState::load(&store).await.unwrap(),
            store: StoreState::new(store),
        }
    }

    #[tokio::test]
    async fn test_edit_session_totals() {
        let desk = desk().await;
        let product_id = desk.catalog.with_products(|p| p[0].id.clone()).await;

        let view = add_catalog_item(&desk.draft, &desk.catalog, &desk.store, &product_id)
            .await
            .unwrap();
        let item_id = view.invoice.items[0].id.clone();

        let view = apply_edit(
            &desk.draft,
            &desk.store,
            InvoiceEdit::UpdateItem {
                id: item_id,
                patch: LineItemPatch {
                    unit_rate: Some(200.0),
                    quantity: Some(2.0),
                    gst_rate_percent: Some(18.0),
                    ..LineItemPatch::default()
                },
            },
        )
        .await
        .unwrap();

        assert_eq!(view.totals.grand_total, 472);
        assert_eq!(get_draft(&desk.draft).await, view);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let desk = desk().await;
        let err = add_catalog_item(&desk.draft, &desk.catalog, &desk.store, "nope")
            .await
            .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_render_negative_total_is_flagged() {
        let desk = desk().await;
        apply_edit(
            &desk.draft,
            &desk.store,
            InvoiceEdit::SetDiscount { amount: 100.0 },
        )
        .await
        .unwrap();

        let document = render_draft(&desk.draft, &LayoutPolicy::default()).await;
        assert!(document.words_clamped);
        assert_eq!(document.amount_in_words, "ZERO ONLY");
        assert_eq!(document.totals.grand_total, -100);
    }

    #[tokio::test]
    async fn test_render_uses_layout() {
        let desk = desk().await;
        apply_edit(
            &desk.draft,
            &desk.store,
            InvoiceEdit::SetSaleType {
                sale_type: SaleType::Central,
            },
        )
        .await
        .unwrap();

        let layout = LayoutPolicy {
            min_table_rows: 5,
            max_displayed_terms: 2,
        };
        let document = render_draft(&desk.draft, &layout).await;
        assert_eq!(document.items.rows.len(), 5);
        assert_eq!(document.terms.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_new_draft_replaces_items() {
        let desk = desk().await;
        apply_edit(&desk.draft, &desk.store, InvoiceEdit::AddManualItem)
            .await
            .unwrap();

        let view = new_draft(&desk.draft, &desk.store).await.unwrap();
        assert!(view.invoice.items.is_empty());
        assert!(!view.invoice.date.is_empty());
    }
}
