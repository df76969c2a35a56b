//! # Customer Repository
//!
//! The saved-customer address book. Starts empty.

use std::sync::Arc;
use tracing::debug;

use invoice_core::defaults;
use invoice_core::SavedCustomer;

use super::{load_record, save_record, CUSTOMERS_KEY};
use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Repository for saved customers.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl CustomerRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        CustomerRepository { kv }
    }

    pub async fn load(&self) -> StoreResult<Vec<SavedCustomer>> {
        let customers = load_record::<Vec<SavedCustomer>>(self.kv.as_ref(), CUSTOMERS_KEY)
            .await?
            .unwrap_or_else(defaults::saved_customers);
        debug!(count = customers.len(), "Loaded saved customers");
        Ok(customers)
    }

    pub async fn save(&self, customers: &[SavedCustomer]) -> StoreResult<()> {
        save_record(self.kv.as_ref(), CUSTOMERS_KEY, customers).await
    }
}
