//! # Master Catalog
//!
//! Operations on the two master lists kept beside the draft: catalog
//! products and saved customers.
//!
//! Like invoice edits, each operation returns a new list. New entries go to
//! the front so the latest addition is the first one the editor shows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::lenient::{self, finite_or_zero};
use crate::types::{new_id, Product, SavedCustomer};
use crate::validation::{
    validate_address, validate_customer_name, validate_hsn_code, validate_product_name,
};

/// GST rate pre-filled for a new catalog product.
pub const DEFAULT_GST_RATE: f64 = 18.0;

// =============================================================================
// Products
// =============================================================================

/// Form input for a new catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub hsn_code: String,
    #[serde(deserialize_with = "lenient::number")]
    pub rate: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub gst_rate: f64,
}

impl Default for NewProduct {
    fn default() -> Self {
        NewProduct {
            name: String::new(),
            hsn_code: String::new(),
            rate: 0.0,
            gst_rate: DEFAULT_GST_RATE,
        }
    }
}

impl NewProduct {
    /// Checks name and HSN code and assigns a fresh id.
    ///
    /// Rates are taken as entered; only NaN and infinities become 0.
    pub fn into_product(self) -> CoreResult<Product> {
        validate_product_name(&self.name)?;
        validate_hsn_code(&self.hsn_code)?;

        Ok(Product {
            id: new_id(),
            name: self.name.trim().to_string(),
            hsn_code: self.hsn_code.trim().to_string(),
            rate: finite_or_zero(self.rate),
            gst_rate: finite_or_zero(self.gst_rate),
        })
    }
}

/// Adds a validated product to the front of the catalog.
///
/// ## Example
/// ```rust
/// use invoice_core::catalog::{add_product, NewProduct};
///
/// let entry = NewProduct { name: "NEEM CAKE (50 Kg)".into(), hsn_code: "2306:9010".into(), rate: 1450.0, ..NewProduct::default() };
/// let (products, added) = add_product(&[], entry).unwrap();
///
/// assert_eq!(products[0], added);
/// assert_eq!(added.gst_rate, 18.0);
/// ```
pub fn add_product(products: &[Product], entry: NewProduct) -> CoreResult<(Vec<Product>, Product)> {
    let product = entry.into_product()?;
    let mut next = Vec::with_capacity(products.len() + 1);
    next.push(product.clone());
    next.extend_from_slice(products);
    Ok((next, product))
}

/// Removes a product by id. The invoices that already use it keep their
/// copied line items.
pub fn remove_product(products: &[Product], id: &str) -> CoreResult<Vec<Product>> {
    if !products.iter().any(|p| p.id == id) {
        return Err(CoreError::ProductNotFound(id.to_string()));
    }
    Ok(products.iter().filter(|p| p.id != id).cloned().collect())
}

/// Looks up a product by id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> CoreResult<&'a Product> {
    products
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
}

// =============================================================================
// Customers
// =============================================================================

/// Form input for a new saved customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct NewCustomer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub gstin: String,
}

impl NewCustomer {
    /// Checks name and address, upper-cases the GSTIN and assigns a fresh id.
    ///
    /// The GSTIN is stored as typed, partial or not.
    pub fn into_customer(self) -> CoreResult<SavedCustomer> {
        validate_customer_name(&self.name)?;
        validate_address(&self.address)?;
        let gstin = self.gstin.trim().to_uppercase();

        Ok(SavedCustomer {
            id: new_id(),
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            gstin,
        })
    }
}

/// Adds a validated customer to the front of the address book.
pub fn add_customer(
    customers: &[SavedCustomer],
    entry: NewCustomer,
) -> CoreResult<(Vec<SavedCustomer>, SavedCustomer)> {
    let customer = entry.into_customer()?;
    let mut next = Vec::with_capacity(customers.len() + 1);
    next.push(customer.clone());
    next.extend_from_slice(customers);
    Ok((next, customer))
}

/// Removes a customer by id.
pub fn remove_customer(customers: &[SavedCustomer], id: &str) -> CoreResult<Vec<SavedCustomer>> {
    if !customers.iter().any(|c| c.id == id) {
        return Err(CoreError::CustomerNotFound(id.to_string()));
    }
    Ok(customers.iter().filter(|c| c.id != id).cloned().collect())
}

/// Looks up a customer by id.
pub fn find_customer<'a>(customers: &'a [SavedCustomer], id: &str) -> CoreResult<&'a SavedCustomer> {
    customers
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| CoreError::CustomerNotFound(id.to_string()))
}
