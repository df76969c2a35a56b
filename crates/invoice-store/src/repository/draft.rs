//! # Draft Repository
//!
//! The one invoice being edited, saved after every accepted edit.
//!
//! ## Partial Drafts
//! A draft written by an older editor may lack fields or carry `null`s.
//! Decoding fills each gap from the built-in record, field by field, and
//! [`Invoice::normalized`] restores an empty logo or signature. Only a
//! value that is not JSON at all (or not an object) is discarded.

use std::sync::Arc;
use tracing::{debug, info};

use invoice_core::Invoice;

use super::{load_record, save_record, DRAFT_KEY};
use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Repository for the live invoice draft.
#[derive(Debug, Clone)]
pub struct DraftRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl DraftRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        DraftRepository { kv }
    }

    /// Loads the stored draft.
    ///
    /// ## Returns
    /// * `Ok(Some(invoice))` - a draft was stored and decoded
    /// * `Ok(None)` - nothing stored, or the stored value was unreadable
    /// * `Err(StoreError)` - the backend failed
    pub async fn load(&self) -> StoreResult<Option<Invoice>> {
        let draft = load_record::<Invoice>(self.kv.as_ref(), DRAFT_KEY)
            .await?
            .map(Invoice::normalized);

        match &draft {
            Some(invoice) => info!(
                invoice_no = %invoice.invoice_no,
                items = invoice.items.len(),
                "Restored saved draft"
            ),
            None => debug!("No saved draft"),
        }
        Ok(draft)
    }

    /// Loads the stored draft, or builds a fresh one with `fresh`.
    pub async fn load_or_else<F>(&self, fresh: F) -> StoreResult<Invoice>
    where
        F: FnOnce() -> Invoice,
    {
        Ok(self.load().await?.unwrap_or_else(fresh))
    }

    /// Writes the whole draft.
    pub async fn save(&self, invoice: &Invoice) -> StoreResult<()> {
        save_record(self.kv.as_ref(), DRAFT_KEY, invoice).await?;
        debug!(invoice_no = %invoice.invoice_no, "Draft saved");
        Ok(())
    }

    /// Forgets the stored draft.
    pub async fn clear(&self) -> StoreResult<()> {
        self.kv.remove(DRAFT_KEY).await
    }
}
