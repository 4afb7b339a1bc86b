//! # Customer Commands
//!
//! Customer list, create/update/delete, and local search.
//!
//! ## Cache Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_customers ──► GET list ─────────► cache.set_all(customers)       │
//! │                                                                         │
//! │  create_customer ──► validate ──► POST ─► cache.apply_created(entity)   │
//! │                          │                                              │
//! │                          └── invalid: no request, cache untouched       │
//! │                                                                         │
//! │  update_customer ──► validate ──► PUT ──► cache.apply_updated(entity)   │
//! │                                                                         │
//! │  delete_customer ──► confirmed? ──► DELETE ──► cache.apply_deleted(id)  │
//! │                          │                                              │
//! │                          └── declined: nothing sent, Ok(Cancelled)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use atlas_client::{ApiClient, CustomerPayload};
use atlas_core::validation::{validate_phone, validate_required};
use atlas_core::Customer;

use crate::commands::{Confirmation, DeleteOutcome};
use crate::error::ApiError;
use crate::state::CustomersState;

fn validated_payload(name: &str, address: &str, phone: &str) -> Result<CustomerPayload, ApiError> {
    validate_required("name", name)?;
    validate_required("address", address)?;
    validate_phone(phone)?;

    Ok(CustomerPayload {
        name: name.trim().to_string(),
        address: address.trim().to_string(),
        phone: phone.trim().to_string(),
    })
}

/// Fetches the full customer list and replaces the cache.
pub async fn fetch_customers(
    client: &ApiClient,
    customers: &CustomersState,
) -> Result<Vec<Customer>, ApiError> {
    debug!("fetch_customers command");

    let list = client.fetch_customers().await?;
    customers.with_directory_mut(|d| d.cache.set_all(list.clone()));
    Ok(list)
}

/// Creates a customer.
///
/// ## Validation
/// Name and address are required; the phone must be exactly ten digits.
/// A failure here means no request leaves the app.
///
/// ## Returns
/// The stored entity, carrying its server-assigned id.
pub async fn create_customer(
    client: &ApiClient,
    customers: &CustomersState,
    name: &str,
    address: &str,
    phone: &str,
) -> Result<Customer, ApiError> {
    debug!(name = %name, "create_customer command");

    let payload = validated_payload(name, address, phone)?;
    let customer = client.add_customer(&payload).await?;
    customers.with_directory_mut(|d| d.cache.apply_created(customer.clone()));
    Ok(customer)
}

/// Overwrites a customer's fields.
///
/// The update endpoint returns no body, so the cached entry is patched
/// from the payload the server just accepted.
pub async fn update_customer(
    client: &ApiClient,
    customers: &CustomersState,
    id: &str,
    name: &str,
    address: &str,
    phone: &str,
) -> Result<Customer, ApiError> {
    debug!(id = %id, "update_customer command");

    let payload = validated_payload(name, address, phone)?;
    client.update_customer(id, &payload).await?;

    let customer = Customer {
        id: id.to_string(),
        name: payload.name,
        address: payload.address,
        phone: payload.phone,
    };
    customers.with_directory_mut(|d| d.cache.apply_updated(customer.clone()));
    Ok(customer)
}

/// Deletes a customer, honoring the confirmation dialog.
///
/// ## Behavior
/// - [`Confirmation::Declined`]: returns `Ok(Cancelled)` without a request
/// - [`Confirmation::Confirmed`]: deletes on the server, then in the cache
pub async fn delete_customer(
    client: &ApiClient,
    customers: &CustomersState,
    id: &str,
    confirmation: Confirmation,
) -> Result<DeleteOutcome, ApiError> {
    debug!(id = %id, ?confirmation, "delete_customer command");

    if confirmation == Confirmation::Declined {
        return Ok(DeleteOutcome::Cancelled);
    }

    client.remove_customer(id).await?;
    customers.with_directory_mut(|d| d.cache.apply_deleted(id));
    Ok(DeleteOutcome::Deleted)
}

/// Updates the search query and returns the narrowed list.
///
/// Filtering is purely local; no request is issued.
pub fn search_customers(customers: &CustomersState, query: &str) -> Vec<Customer> {
    debug!(query = %query, "search_customers command");

    customers.with_directory_mut(|d| {
        d.search = query.to_string();
        d.filtered().into_iter().cloned().collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::AppConfig;
    use crate::error::ErrorCode;

    fn test_client() -> ApiClient {
        ApiClient::new(&AppConfig::default()).unwrap()
    }

    fn seeded_state() -> CustomersState {
        let state = CustomersState::new();
        state.with_directory_mut(|d| {
            d.cache.set_all(vec![
                Customer {
                    id: "c1".to_string(),
                    name: "Asha Verma".to_string(),
                    address: "12 Market Road".to_string(),
                    phone: "9876543210".to_string(),
                },
                Customer {
                    id: "c2".to_string(),
                    name: "Bob Carter".to_string(),
                    address: "4 Harbour Lane".to_string(),
                    phone: "9123456780".to_string(),
                },
            ])
        });
        state
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_request() {
        let client = test_client();
        let state = seeded_state();

        let err = create_customer(&client, &state, "", "12 Market Road", "9876543210")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err = create_customer(&client, &state, "Chandra", "9 Hill Street", "98765")
            .await
            .unwrap_err();
        assert_eq!(err.message, "Phone number must be exactly 10 digits");

        // Nothing was cached for the failed attempts.
        assert_eq!(state.with_directory(|d| d.cache.len()), 2);
    }

    #[tokio::test]
    async fn test_update_validates_like_create() {
        let client = test_client();
        let state = seeded_state();

        let err = update_customer(&client, &state, "c1", "Asha", "", "9876543210")
            .await
            .unwrap_err();
        assert_eq!(err.message, "address is required");
        assert_eq!(
            state.with_directory(|d| d.cache.get("c1").unwrap().address.clone()),
            "12 Market Road"
        );
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let client = test_client();
        let state = seeded_state();

        let outcome = delete_customer(&client, &state, "c1", Confirmation::Declined)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(state.with_directory(|d| d.cache.get("c1").is_some()));
    }

    #[test]
    fn test_search_narrows_and_sticks() {
        let state = seeded_state();

        let hits = search_customers(&state, "bob");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "c2");

        // The query persists for the next render.
        assert_eq!(state.with_directory(|d| d.search.clone()), "bob");

        let hits = search_customers(&state, "");
        assert_eq!(hits.len(), 2);
    }
}
