//! Product catalog state.
//!
//! Same shape as the customer directory: a cached list plus a local
//! search query. Stock quantities here are display values; the billing
//! flow re-checks them when a line item is added.

use std::sync::{Arc, Mutex};

use atlas_core::Product;

use crate::state::cache::EntityCache;

/// Cached products and the query narrowing their on-screen view.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    pub cache: EntityCache<Product>,
    pub search: String,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products whose name matches the current search, in cache order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.cache
            .items()
            .iter()
            .filter(|p| p.matches(&self.search))
            .collect()
    }
}

/// Thread-safe catalog holder shared across commands.
#[derive(Debug)]
pub struct ProductsState {
    catalog: Arc<Mutex<ProductCatalog>>,
}

impl ProductsState {
    pub fn new() -> Self {
        ProductsState {
            catalog: Arc::new(Mutex::new(ProductCatalog::new())),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ProductCatalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Product mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ProductCatalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Product mutex poisoned");
        f(&mut catalog)
    }
}

impl Default for ProductsState {
    fn default() -> Self {
        Self::new()
    }
}
