//! # Store State
//!
//! Wraps the persisted-state [`Store`] for use in commands.
//!
//! The store handle shares one backend behind an `Arc`, so commands can
//! use it concurrently without extra locking.

use invoice_store::Store;

/// Wrapper around `Store` for command injection.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner Store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// store_state.inner().drafts().save(&invoice).await?;
    /// ```
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
