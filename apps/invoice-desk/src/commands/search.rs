//! # Search Commands
//!
//! Typeahead for the item picker and the customer picker.
//!
//! ## Product Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types "neem"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_search_query ── trimmed; over 100 chars matches nothing     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rank_products ── exact (100) > prefix (80) > contains (50)            │
//! │       │           stable: ties keep catalog order                      │
//! │       ▼                                                                 │
//! │  first `limit` products                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;
use tracing::debug;

use invoice_core::search::{filter_customers, rank_products};
use invoice_core::validation::normalize_search_query;
use invoice_core::{Product, SavedCustomer};

use crate::error::ApiResult;
use crate::state::CatalogState;

/// Default number of suggestions.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on `limit`.
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Ranks catalog products against `query`.
///
/// ## Arguments
/// * `query` - Typed text; empty returns nothing
/// * `limit` - Maximum results (default 10, max 50)
pub async fn search_products(
    catalog: &CatalogState,
    query: &str,
    limit: Option<usize>,
) -> ApiResult<Vec<Product>> {
    let start = Instant::now();
    let Some(query) = normalize_search_query(query) else {
        debug!("search_products: query too long to match");
        return Ok(Vec::new());
    };
    let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);

    let results: Vec<Product> = catalog
        .with_products(|products| {
            rank_products(products, &query)
                .into_iter()
                .take(limit)
                .cloned()
                .collect()
        })
        .await;

    debug!(
        query = %query,
        results = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search_products"
    );
    Ok(results)
}

/// Filters saved customers by name, GSTIN or phone. Empty query lists all.
pub async fn search_customers(
    catalog: &CatalogState,
    query: &str,
) -> ApiResult<Vec<SavedCustomer>> {
    let Some(query) = normalize_search_query(query) else {
        return Ok(Vec::new());
    };
    Ok(catalog
        .with_customers(|customers| {
            filter_customers(customers, &query)
                .into_iter()
                .cloned()
                .collect()
        })
        .await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_core::defaults;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            hsn_code: "3808".to_string(),
            rate: 100.0,
            gst_rate: 18.0,
        }
    }

    #[tokio::test]
    async fn test_search_products_ranks_and_limits() {
        let catalog = CatalogState::new(
            vec![
                product("1", "Super Neem"),
                product("2", "Neem Oil"),
                product("3", "NEEM"),
                product("4", "Neem Cake"),
            ],
            Vec::new(),
        );

        let ids: Vec<String> = search_products(&catalog, "  neem ", None)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["3", "2", "4", "1"]);

        let limited = search_products(&catalog, "neem", Some(2)).await.unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_query_returns_nothing() {
        let catalog = CatalogState::new(defaults::master_products(), Vec::new());
        assert!(search_products(&catalog, "   ", None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overlong_query_matches_nothing() {
        let customers = vec![SavedCustomer {
            id: "a".to_string(),
            name: "Ravi Agro".to_string(),
            address: "Siddipet".to_string(),
            phone: String::new(),
            gstin: String::new(),
        }];
        let catalog = CatalogState::new(defaults::master_products(), customers);
        let query = "n".repeat(101);

        assert!(search_products(&catalog, &query, None).await.unwrap().is_empty());
        assert!(search_customers(&catalog, &query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_customers() {
        let customers = vec![
            SavedCustomer {
                id: "a".to_string(),
                name: "Ravi Agro".to_string(),
                address: "Siddipet".to_string(),
                phone: "98490".to_string(),
                gstin: String::new(),
            },
            SavedCustomer {
                id: "b".to_string(),
                name: "Lakshmi Traders".to_string(),
                address: "Medak".to_string(),
                phone: String::new(),
                gstin: "36AAAAA0000A1Z5".to_string(),
            },
        ];
        let catalog = CatalogState::new(Vec::new(), customers);

        assert_eq!(search_customers(&catalog, "").await.unwrap().len(), 2);
        assert_eq!(search_customers(&catalog, "RAVI").await.unwrap()[0].id, "a");
        assert_eq!(search_customers(&catalog, "36aaa").await.unwrap()[0].id, "b");
        assert_eq!(search_customers(&catalog, "9849").await.unwrap()[0].id, "a");
    }
}
