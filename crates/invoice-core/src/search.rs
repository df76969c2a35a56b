//! # Search
//!
//! Ranking for the product picker and filtering for the customer picker.
//!
//! ## Product Scores
//! ```text
//!   100  name or HSN code equals the query
//!    80  name starts with the query
//!    50  name contains the query
//!     -  anything else is dropped
//! ```
//! Matching ignores case. Equal scores keep catalog order.

use crate::types::{Product, SavedCustomer};

const EXACT: u8 = 100;
const PREFIX: u8 = 80;
const SUBSTRING: u8 = 50;

/// Scores one product against an already lower-cased, trimmed query.
fn score(product: &Product, query: &str) -> Option<u8> {
    let name = product.name.to_lowercase();
    let hsn = product.hsn_code.to_lowercase();

    if name == query || hsn == query {
        Some(EXACT)
    } else if name.starts_with(query) {
        Some(PREFIX)
    } else if name.contains(query) {
        Some(SUBSTRING)
    } else {
        None
    }
}

/// Catalog products matching `query`, best first.
///
/// An empty query returns nothing; the picker shows no list until the
/// user types.
///
/// ## Example
/// ```rust
/// use invoice_core::search::rank_products;
/// use invoice_core::defaults::master_products;
///
/// let catalog = master_products();
/// let hits = rank_products(&catalog, "acrid");
/// assert!(hits.iter().all(|p| p.name.starts_with("ACRID")));
/// ```
pub fn rank_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(u8, &Product)> = products
        .iter()
        .filter_map(|p| score(p, &query).map(|s| (s, p)))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, p)| p).collect()
}

/// Saved customers matching `query` by name, GSTIN or phone.
///
/// An empty query returns the whole address book in stored order.
pub fn filter_customers<'a>(customers: &'a [SavedCustomer], query: &str) -> Vec<&'a SavedCustomer> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return customers.iter().collect();
    }

    customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query)
                || c.gstin.to_lowercase().contains(&query)
                || c.phone.contains(&query)
        })
        .collect()
}
