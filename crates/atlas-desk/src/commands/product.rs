//! # Product Commands
//!
//! Product list, create/update/delete, and local search.
//!
//! Same cache discipline as the customer commands: validate first, issue
//! the request, apply the confirmed change. The numeric inputs arrive as
//! raw form text and are parsed here, so "2.5" quantities and "free"
//! prices are caught before any request is issued.

use tracing::debug;

use atlas_client::{ApiClient, ProductPayload};
use atlas_core::validation::{validate_price_input, validate_quantity_input, validate_required};
use atlas_core::Product;

use crate::commands::{Confirmation, DeleteOutcome};
use crate::error::ApiError;
use crate::state::ProductsState;

fn validated_payload(
    name: &str,
    description: &str,
    quantity: &str,
    price: &str,
) -> Result<ProductPayload, ApiError> {
    validate_required("name", name)?;
    validate_required("description", description)?;
    let quantity = validate_quantity_input("quantity", quantity)?;
    let price = validate_price_input("price", price)?;

    Ok(ProductPayload {
        product: name.trim().to_string(),
        description: description.trim().to_string(),
        quantity,
        price,
    })
}

/// Fetches the full product list and replaces the cache.
pub async fn fetch_products(
    client: &ApiClient,
    products: &ProductsState,
) -> Result<Vec<Product>, ApiError> {
    debug!("fetch_products command");

    let list = client.fetch_products().await?;
    products.with_catalog_mut(|c| c.cache.set_all(list.clone()));
    Ok(list)
}

/// Creates a product.
///
/// ## Validation
/// Name and description are required. Quantity must be a positive whole
/// number; price must be a positive number (extra decimal places are
/// accepted and stored as entered).
pub async fn create_product(
    client: &ApiClient,
    products: &ProductsState,
    name: &str,
    description: &str,
    quantity: &str,
    price: &str,
) -> Result<Product, ApiError> {
    debug!(name = %name, "create_product command");

    let payload = validated_payload(name, description, quantity, price)?;
    let product = client.add_product(&payload).await?;
    products.with_catalog_mut(|c| c.cache.apply_created(product.clone()));
    Ok(product)
}

/// Overwrites a product's fields.
///
/// The update endpoint returns no body, so the cached entry is patched
/// from the payload the server just accepted.
pub async fn update_product(
    client: &ApiClient,
    products: &ProductsState,
    id: &str,
    name: &str,
    description: &str,
    quantity: &str,
    price: &str,
) -> Result<Product, ApiError> {
    debug!(id = %id, "update_product command");

    let payload = validated_payload(name, description, quantity, price)?;
    client.update_product(id, &payload).await?;

    let product = Product {
        id: id.to_string(),
        name: payload.product,
        description: payload.description,
        quantity: payload.quantity,
        price: payload.price,
    };
    products.with_catalog_mut(|c| c.cache.apply_updated(product.clone()));
    Ok(product)
}

/// Deletes a product, honoring the confirmation dialog.
pub async fn delete_product(
    client: &ApiClient,
    products: &ProductsState,
    id: &str,
    confirmation: Confirmation,
) -> Result<DeleteOutcome, ApiError> {
    debug!(id = %id, ?confirmation, "delete_product command");

    if confirmation == Confirmation::Declined {
        return Ok(DeleteOutcome::Cancelled);
    }

    client.remove_product(id).await?;
    products.with_catalog_mut(|c| c.cache.apply_deleted(id));
    Ok(DeleteOutcome::Deleted)
}

/// Updates the search query and returns the narrowed list.
pub fn search_products(products: &ProductsState, query: &str) -> Vec<Product> {
    debug!(query = %query, "search_products command");

    products.with_catalog_mut(|c| {
        c.search = query.to_string();
        c.filtered().into_iter().cloned().collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::AppConfig;
    use rust_decimal::Decimal;
    use crate::error::ErrorCode;

    fn test_client() -> ApiClient {
        ApiClient::new(&AppConfig::default()).unwrap()
    }

    fn seeded_state() -> ProductsState {
        let state = ProductsState::new();
        state.with_catalog_mut(|c| {
            c.cache.set_all(vec![Product {
                id: "p1".to_string(),
                name: "Sugar 1kg".to_string(),
                description: "Granulated white sugar".to_string(),
                quantity: 40,
                price: Decimal::new(5000, 2),
            }])
        });
        state
    }

    #[tokio::test]
    async fn test_create_rejects_bad_numeric_input() {
        let client = test_client();
        let state = seeded_state();

        let err = create_product(&client, &state, "Tea 500g", "Loose leaf", "2.5", "30")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "quantity must be a whole number");

        let err = create_product(&client, &state, "Tea 500g", "Loose leaf", "10", "0")
            .await
            .unwrap_err();
        assert_eq!(err.message, "price must be greater than zero");

        let err = create_product(&client, &state, "Tea 500g", "", "10", "30")
            .await
            .unwrap_err();
        assert_eq!(err.message, "description is required");

        assert_eq!(state.with_catalog(|c| c.cache.len()), 1);
    }

    #[tokio::test]
    async fn test_update_validates_before_any_request() {
        let client = test_client();
        let state = seeded_state();

        let err = update_product(&client, &state, "p1", "Sugar 1kg", "White", "40", "free")
            .await
            .unwrap_err();
        assert_eq!(err.message, "price must be a valid number");
        assert_eq!(
            state.with_catalog(|c| c.cache.get("p1").unwrap().price),
            Decimal::new(5000, 2)
        );
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let client = test_client();
        let state = seeded_state();

        let outcome = delete_product(&client, &state, "p1", Confirmation::Declined)
            .await
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(state.with_catalog(|c| c.cache.get("p1").is_some()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = seeded_state();
        assert_eq!(search_products(&state, "SUGAR").len(), 1);
        assert_eq!(search_products(&state, "coffee").len(), 0);
    }
}
