//! Customer directory state.
//!
//! Holds the cached customer list plus the live search query that filters
//! the on-screen table. Requests never filter server-side: the full list is
//! fetched and narrowed locally.

use std::sync::{Arc, Mutex};

use atlas_core::Customer;

use crate::state::cache::EntityCache;

/// Cached customers and the query narrowing their on-screen view.
#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    pub cache: EntityCache<Customer>,
    pub search: String,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers whose name matches the current search, in cache order.
    pub fn filtered(&self) -> Vec<&Customer> {
        self.cache
            .items()
            .iter()
            .filter(|c| c.matches(&self.search))
            .collect()
    }
}

/// Thread-safe directory holder shared across commands.
#[derive(Debug)]
pub struct CustomersState {
    directory: Arc<Mutex<CustomerDirectory>>,
}

impl CustomersState {
    pub fn new() -> Self {
        CustomersState {
            directory: Arc::new(Mutex::new(CustomerDirectory::new())),
        }
    }

    /// Executes a function with read access to the directory.
    pub fn with_directory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CustomerDirectory) -> R,
    {
        let directory = self.directory.lock().expect("Customer mutex poisoned");
        f(&directory)
    }

    /// Executes a function with write access to the directory.
    pub fn with_directory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CustomerDirectory) -> R,
    {
        let mut directory = self.directory.lock().expect("Customer mutex poisoned");
        f(&mut directory)
    }
}

impl Default for CustomersState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            address: "4 Harbour Lane".to_string(),
            phone: "9123456780".to_string(),
        }
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let mut directory = CustomerDirectory::new();
        directory
            .cache
            .set_all(vec![customer("1", "Asha"), customer("2", "Bob")]);

        assert_eq!(directory.filtered().len(), 2);
    }

    #[test]
    fn test_search_narrows_case_insensitively() {
        let mut directory = CustomerDirectory::new();
        directory.cache.set_all(vec![
            customer("1", "Asha Verma"),
            customer("2", "Bob Carter"),
            customer("3", "ashar khan"),
        ]);

        directory.search = "ASHA".to_string();
        let hits = directory.filtered();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[1].id, "3");
    }

    #[test]
    fn test_state_wrapper_round_trip() {
        let state = CustomersState::new();
        state.with_directory_mut(|d| d.cache.set_all(vec![customer("1", "Asha")]));

        let count = state.with_directory(|d| d.cache.len());
        assert_eq!(count, 1);
    }
}
