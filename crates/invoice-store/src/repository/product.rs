//! # Product Repository
//!
//! The master catalog. First run (or an unreadable stored list) yields the
//! built-in catalog.

use std::sync::Arc;
use tracing::debug;

use invoice_core::defaults;
use invoice_core::Product;

use super::{load_record, save_record, PRODUCTS_KEY};
use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Repository for the master product list.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl ProductRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        ProductRepository { kv }
    }

    /// Loads the catalog, falling back to the built-in one.
    ///
    /// A stored empty list stays empty: the user deleted everything.
    pub async fn load(&self) -> StoreResult<Vec<Product>> {
        let products = load_record::<Vec<Product>>(self.kv.as_ref(), PRODUCTS_KEY)
            .await?
            .unwrap_or_else(defaults::master_products);
        debug!(count = products.len(), "Loaded product catalog");
        Ok(products)
    }

    /// Writes the whole catalog.
    pub async fn save(&self, products: &[Product]) -> StoreResult<()> {
        save_record(self.kv.as_ref(), PRODUCTS_KEY, products).await?;
        debug!(count = products.len(), "Product catalog saved");
        Ok(())
    }
}
