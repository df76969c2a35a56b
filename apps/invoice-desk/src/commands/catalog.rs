//! # Catalog Commands
//!
//! Master product and saved customer maintenance. Every change is written
//! through to the store before the command returns.

use tracing::debug;

use invoice_core::catalog::{NewCustomer, NewProduct};
use invoice_core::{Product, SavedCustomer};

use crate::error::ApiResult;
use crate::state::{CatalogState, StoreState};

/// Lists the whole master catalog, newest first.
pub async fn list_products(catalog: &CatalogState) -> Vec<Product> {
    catalog.with_products(|p| p.to_vec()).await
}

/// Adds a product from the catalog form.
///
/// ## Validation
/// Name and HSN code are required. Rates are stored as entered.
pub async fn add_product(
    catalog: &CatalogState,
    store: &StoreState,
    entry: NewProduct,
) -> ApiResult<Product> {
    debug!(name = %entry.name, "add_product command");
    catalog.add_product(store.inner(), entry).await
}

/// Removes a product. Lines already on the draft keep their copy.
pub async fn remove_product(
    catalog: &CatalogState,
    store: &StoreState,
    id: String,
) -> ApiResult<()> {
    debug!(id = %id, "remove_product command");
    catalog.remove_product(store.inner(), &id).await
}

pub async fn list_customers(catalog: &CatalogState) -> Vec<SavedCustomer> {
    catalog.with_customers(|c| c.to_vec()).await
}

/// Saves a customer from the address form.
pub async fn add_customer(
    catalog: &CatalogState,
    store: &StoreState,
    entry: NewCustomer,
) -> ApiResult<SavedCustomer> {
    debug!(name = %entry.name, "add_customer command");
    catalog.add_customer(store.inner(), entry).await
}

pub async fn remove_customer(
    catalog: &CatalogState,
    store: &StoreState,
    id: String,
) -> ApiResult<()> {
    debug!(id = %id, "remove_customer command");
    catalog.remove_customer(store.inner(), &id).await
}
