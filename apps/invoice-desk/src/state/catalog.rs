//! # Catalog State
//!
//! Master products and saved customers, loaded once and written through
//! on every change.
//!
//! Each list sits behind its own `RwLock`: searches take read locks and
//! never wait on each other, edits take the write lock for the whole
//! replace-and-save step.

use tokio::sync::RwLock;
use tracing::info;

use invoice_core::catalog::{self, NewCustomer, NewProduct};
use invoice_core::{Product, SavedCustomer};
use invoice_store::Store;

use crate::error::ApiResult;

/// Master data state.
#[derive(Debug, Default)]
pub struct CatalogState {
    products: RwLock<Vec<Product>>,
    customers: RwLock<Vec<SavedCustomer>>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>, customers: Vec<SavedCustomer>) -> Self {
        CatalogState {
            products: RwLock::new(products),
            customers: RwLock::new(customers),
        }
    }

    /// Loads both lists, each falling back to its built-in default.
    pub async fn load(store: &Store) -> ApiResult<Self> {
        let products = store.products().load().await?;
        let customers = store.customers().load().await?;
        info!(
            products = products.len(),
            customers = customers.len(),
            "Catalog loaded"
        );
        Ok(CatalogState::new(products, customers))
    }

    /// Executes a function with read access to the products.
    pub async fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Product]) -> R,
    {
        let products = self.products.read().await;
        f(&products)
    }

    /// Executes a function with read access to the customers.
    pub async fn with_customers<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[SavedCustomer]) -> R,
    {
        let customers = self.customers.read().await;
        f(&customers)
    }

    pub async fn product(&self, id: &str) -> ApiResult<Product> {
        let products = self.products.read().await;
        Ok(catalog::find_product(&products, id)?.clone())
    }

    pub async fn customer(&self, id: &str) -> ApiResult<SavedCustomer> {
        let customers = self.customers.read().await;
        Ok(catalog::find_customer(&customers, id)?.clone())
    }

    /// Validates and prepends a product, then saves the list.
    pub async fn add_product(&self, store: &Store, entry: NewProduct) -> ApiResult<Product> {
        let mut products = self.products.write().await;
        let (next, added) = catalog::add_product(&products, entry)?;
        store.products().save(&next).await?;
        *products = next;
        info!(id = %added.id, name = %added.name, "Product added");
        Ok(added)
    }

    pub async fn remove_product(&self, store: &Store, id: &str) -> ApiResult<()> {
        let mut products = self.products.write().await;
        let next = catalog::remove_product(&products, id)?;
        store.products().save(&next).await?;
        *products = next;
        info!(id = %id, "Product removed");
        Ok(())
    }

    /// Validates and prepends a customer, then saves the list.
    pub async fn add_customer(
        &self,
        store: &Store,
        entry: NewCustomer,
    ) -> ApiResult<SavedCustomer> {
        let mut customers = self.customers.write().await;
        let (next, added) = catalog::add_customer(&customers, entry)?;
        store.customers().save(&next).await?;
        *customers = next;
        info!(id = %added.id, name = %added.name, "Customer saved");
        Ok(added)
    }

    pub async fn remove_customer(&self, store: &Store, id: &str) -> ApiResult<()> {
        let mut customers = self.customers.write().await;
        let next = catalog::remove_customer(&customers, id)?;
        store.customers().save(&next).await?;
        *customers = next;
        info!(id = %id, "Customer removed");
        Ok(())
    }
}
