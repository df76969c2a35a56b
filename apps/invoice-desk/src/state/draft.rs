//! # Draft State
//!
//! Holds the one live invoice the editor is working on.
//!
//! ## Snapshot Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft State Operations                               │
//! │                                                                         │
//! │  Editor Action          Command               Draft State Change        │
//! │  ─────────────          ───────               ──────────────────        │
//! │                                                                         │
//! │  Type discount ───────► apply_edit() ───────► current = current.apply()│
//! │                                               drafts().save(current)   │
//! │                                                                         │
//! │  Click New ───────────► new_draft() ────────► current = fresh draft    │
//! │                                               drafts().save(current)   │
//! │                                                                         │
//! │  Preview / Export ────► render_draft() ─────► (read only snapshot)     │
//! │                                                                         │
//! │  NOTE: The lock is held across the save so writes land in the same     │
//! │        order the edits were accepted.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use uuid::Uuid;

use invoice_core::{Invoice, InvoiceEdit};
use invoice_store::Store;

use crate::error::ApiResult;

/// Lowest number handed to a new draft.
pub const FIRST_DRAFT_NO: u32 = 100;

/// Highest number handed to a new draft.
pub const LAST_DRAFT_NO: u32 = 999;

/// A three-digit number in `FIRST_DRAFT_NO..=LAST_DRAFT_NO`.
///
/// The user normally overwrites it with the book number.
pub fn random_draft_no() -> String {
    let span = (LAST_DRAFT_NO - FIRST_DRAFT_NO + 1) as u128;
    let offset = Uuid::new_v4().as_u128() % span;
    (FIRST_DRAFT_NO as u128 + offset).to_string()
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A fresh draft dated `date` with a random number.
pub fn fresh_draft(date: NaiveDate) -> Invoice {
    Invoice::draft(random_draft_no(), date)
}

/// Live draft state.
#[derive(Debug)]
pub struct DraftState {
    current: Mutex<Invoice>,
}

impl DraftState {
    pub fn new(invoice: Invoice) -> Self {
        DraftState {
            current: Mutex::new(invoice),
        }
    }

    /// Restores the saved draft or starts a fresh one.
    ///
    /// A restored draft with an empty date is dated `today`.
    pub async fn load(store: &Store, today: NaiveDate) -> ApiResult<Self> {
        let mut invoice = store
            .drafts()
            .load_or_else(|| {
                info!("Starting a fresh draft");
                fresh_draft(today)
            })
            .await?;

        if invoice.date.trim().is_empty() {
            invoice.date = today.format("%Y-%m-%d").to_string();
        }

        Ok(DraftState::new(invoice))
    }

    /// Copy of the current snapshot.
    pub async fn snapshot(&self) -> Invoice {
        self.current.lock().await.clone()
    }

    /// Applies one edit and persists the result.
    ///
    /// An edit that changes nothing (unknown id, index out of range) is
    /// not persisted. When the save fails the new snapshot is kept in
    /// memory and the error is returned; the next accepted edit saves it.
    pub async fn apply(&self, store: &Store, edit: &InvoiceEdit) -> ApiResult<Invoice> {
        let mut current = self.current.lock().await;
        let next = current.apply(edit);

        if next == *current {
            debug!(?edit, "Edit left the draft unchanged");
            return Ok(next);
        }

        *current = next;
        if let Err(e) = store.drafts().save(&current).await {
            error!(error = %e, "Failed to persist draft");
            return Err(e.into());
        }
        Ok(current.clone())
    }

    /// Replaces the draft with a fresh one dated `today` and persists it.
    pub async fn reset(&self, store: &Store, today: NaiveDate) -> ApiResult<Invoice> {
        let mut current = self.current.lock().await;
        *current = fresh_draft(today);
        store.drafts().save(&current).await?;
        info!(invoice_no = %current.invoice_no, "New draft started");
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_random_draft_no_range() {
        for _ in 0..200 {
            let no: u32 = random_draft_no().parse().unwrap();
            assert!((FIRST_DRAFT_NO..=LAST_DRAFT_NO).contains(&no));
        }
    }

    #[tokio::test]
    async fn test_load_starts_fresh_draft() {
        let store = Store::in_memory();
        let state = DraftState::load(&store, date()).await.unwrap();
        let draft = state.snapshot().await;

        assert_eq!(draft.date, "2025-01-05");
        assert_eq!(draft.invoice_no.len(), 3);
        assert!(draft.items.is_empty());
    }

    #[tokio::test]
    async fn test_load_restores_and_dates_saved_draft() {
        let store = Store::in_memory();
        let saved = Invoice {
            invoice_no: "31".to_string(),
            ..Invoice::default()
        };
        store.drafts().save(&saved).await.unwrap();

        let state = DraftState::load(&store, date()).await.unwrap();
        let draft = state.snapshot().await;
        assert_eq!(draft.invoice_no, "31");
        assert_eq!(draft.date, "2025-01-05");
    }

    #[tokio::test]
    async fn test_apply_persists_each_snapshot() {
        let store = Store::in_memory();
        let state = DraftState::new(fresh_draft(date()));

        let after = state
            .apply(&store, &InvoiceEdit::SetDiscount { amount: 25.0 })
            .await
            .unwrap();
        assert_eq!(after.adjustments.discount, 25.0);

        let saved = store.drafts().load().await.unwrap().unwrap();
        assert_eq!(saved, after);
        assert_eq!(state.snapshot().await, after);
    }

    #[tokio::test]
    async fn test_noop_edit_is_not_persisted() {
        let store = Store::in_memory();
        let state = DraftState::new(fresh_draft(date()));

        state
            .apply(&store, &InvoiceEdit::RemoveItem { id: "missing".to_string() })
            .await
            .unwrap();
        assert!(store.drafts().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset() {
        let store = Store::in_memory();
        let state = DraftState::new(fresh_draft(date()));
        state
            .apply(&store, &InvoiceEdit::AddManualItem)
            .await
            .unwrap();

        let fresh = state.reset(&store, date()).await.unwrap();
        assert!(fresh.items.is_empty());
        assert_eq!(store.drafts().load().await.unwrap(), Some(fresh));
    }
}
