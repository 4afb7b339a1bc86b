//! # Billing Commands
//!
//! Bill assembly and submission.
//!
//! ## Bill Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bill Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Customer │────►│  Items   │────►│Submitted │       │
//! │  │  Bill    │     │ Selected │     │  Added   │     │   Bill   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                │             │
//! │              select_bill_customer   add_bill_item    submit_bill        │
//! │                                     remove_bill_item      │             │
//! │                                          │                ▼             │
//! │                                          │         POST generate-bill   │
//! │                                          │         then clear locally   │
//! │                                          ▼                              │
//! │                                     reset_bill ────► (back to empty)    │
//! │                                                                         │
//! │  Everything before submit_bill is local; only submit_bill touches       │
//! │  the network. A rejected submit leaves the bill intact for retry.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use atlas_client::{ApiClient, GenerateBillRequest};
use atlas_core::validation::validate_quantity_input;
use atlas_core::{CoreError, Customer, LineItem, PaymentType};
use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::state::{BillingCart, BillingState, CustomersState, ProductsState};

/// Bill snapshot for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub customer: Option<Customer>,
    pub items: Vec<LineItem>,
    pub payment_type: PaymentType,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<&BillingCart> for BillResponse {
    fn from(cart: &BillingCart) -> Self {
        BillResponse {
            customer: cart.customer.clone(),
            items: cart.items.clone(),
            payment_type: cart.payment_type,
            total: cart.total(),
        }
    }
}

/// Gets the current bill contents.
pub fn get_bill(billing: &BillingState) -> BillResponse {
    debug!("get_bill command");
    billing.with_cart(|c| BillResponse::from(c))
}

/// Updates the customer picker query and returns the narrowed list.
pub fn set_bill_customer_search(
    billing: &BillingState,
    customers: &CustomersState,
    query: &str,
) -> Vec<Customer> {
    debug!(query = %query, "set_bill_customer_search command");

    billing.with_cart_mut(|c| c.customer_search = query.to_string());
    customers.with_directory(|d| {
        d.cache
            .items()
            .iter()
            .filter(|c| c.matches(query))
            .cloned()
            .collect()
    })
}

/// Binds the bill to a cached customer and collapses the picker.
pub fn select_bill_customer(
    billing: &BillingState,
    customers: &CustomersState,
    id: &str,
) -> Result<Customer, ApiError> {
    debug!(id = %id, "select_bill_customer command");

    let customer = customers
        .with_directory(|d| d.cache.get(id).cloned())
        .ok_or_else(|| ApiError::not_found("Customer", id))?;

    billing.with_cart_mut(|c| c.select_customer(customer.clone()));
    Ok(customer)
}

/// Sets (or clears) the product chosen in the entry form.
pub fn set_bill_product(billing: &BillingState, product_id: Option<String>) {
    debug!(product_id = ?product_id, "set_bill_product command");
    billing.with_cart_mut(|c| c.selected_product_id = product_id);
}

/// Stores the raw quantity text; parsing happens at add time.
pub fn set_bill_quantity(billing: &BillingState, input: &str) {
    debug!(input = %input, "set_bill_quantity command");
    billing.with_cart_mut(|c| c.quantity_input = input.to_string());
}

/// Sets the payment method for the whole bill.
pub fn set_bill_payment(billing: &BillingState, payment_type: PaymentType) {
    debug!(payment_type = %payment_type, "set_bill_payment command");
    billing.with_cart_mut(|c| c.payment_type = payment_type);
}

/// Turns the entry form into a line item.
///
/// ## Behavior
/// 1. Reads the selected product id and quantity text from the cart
/// 2. Parses the quantity (positive whole number)
/// 3. Resolves the product in the cached catalog
/// 4. Appends the line after the stock check; entry form resets
///
/// Any failure leaves the bill exactly as it was.
pub fn add_bill_item(
    billing: &BillingState,
    products: &ProductsState,
) -> Result<LineItem, ApiError> {
    debug!("add_bill_item command");

    let (product_id, quantity_input) = billing.with_cart(|c| {
        (c.selected_product_id.clone(), c.quantity_input.clone())
    });

    let product_id = product_id.ok_or(CoreError::NoProductSelected)?;
    let quantity = validate_quantity_input("quantity", &quantity_input)?;

    let product = products
        .with_catalog(|c| c.cache.get(&product_id).cloned())
        .ok_or_else(|| CoreError::ProductNotFound(product_id.clone()))?;

    let line = billing.with_cart_mut(|c| c.add_line_item(&product, quantity))?;
    Ok(line)
}

/// Removes the line item at `index`.
pub fn remove_bill_item(billing: &BillingState, index: usize) -> Result<LineItem, ApiError> {
    debug!(index = %index, "remove_bill_item command");

    let line = billing.with_cart_mut(|c| c.remove_line_item(index))?;
    Ok(line)
}

/// Submits the bill to the server.
///
/// ## Behavior
/// The draft captures customer, items, payment type, and the recomputed
/// total under one lock. On acceptance the server adjusts stock and the
/// local bill is cleared; on any failure the bill stays as-is so the
/// clerk can retry.
pub async fn submit_bill(client: &ApiClient, billing: &BillingState) -> Result<(), ApiError> {
    debug!("submit_bill command");

    let draft = billing.with_cart(|c| c.draft())?;
    let request = GenerateBillRequest {
        customers_id: draft.customer_id,
        billing_products: draft.items,
        payment_type: draft.payment_type,
        total_amount: draft.total,
    };

    client.generate_bill(&request).await?;
    billing.with_cart_mut(|c| c.clear_after_submit());
    info!("Bill submitted");
    Ok(())
}

/// Discards the in-progress bill, used when the clerk navigates away.
pub fn reset_bill(billing: &BillingState) {
    debug!("reset_bill command");
    billing.with_cart_mut(|c| c.reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::AppConfig;
    use atlas_core::Product;
    use crate::error::ErrorCode;

    fn test_client() -> ApiClient {
        ApiClient::new(&AppConfig::default()).unwrap()
    }

    fn seeded_customers() -> CustomersState {
        let state = CustomersState::new();
        state.with_directory_mut(|d| {
            d.cache.set_all(vec![Customer {
                id: "c1".to_string(),
                name: "Asha Verma".to_string(),
                address: "12 Market Road".to_string(),
                phone: "9876543210".to_string(),
            }])
        });
        state
    }

    fn seeded_products() -> ProductsState {
        let state = ProductsState::new();
        state.with_catalog_mut(|c| {
            c.cache.set_all(vec![
                Product {
                    id: "p1".to_string(),
                    name: "Sugar 1kg".to_string(),
                    description: "Granulated white sugar".to_string(),
                    quantity: 40,
                    price: Decimal::new(5000, 2),
                },
                Product {
                    id: "p2".to_string(),
                    name: "Tea 500g".to_string(),
                    description: "Loose leaf".to_string(),
                    quantity: 3,
                    price: Decimal::new(3000, 2),
                },
            ])
        });
        state
    }

    #[test]
    fn test_add_item_happy_path_resets_form() {
        let billing = BillingState::new();
        let products = seeded_products();

        set_bill_product(&billing, Some("p1".to_string()));
        set_bill_quantity(&billing, "2");

        let line = add_bill_item(&billing, &products).unwrap();
        assert_eq!(line.name, "Sugar 1kg");
        assert_eq!(line.subtotal, Decimal::new(10000, 2));

        let bill = get_bill(&billing);
        assert_eq!(bill.items.len(), 1);
        assert_eq!(bill.total, Decimal::new(10000, 2));
        assert!(billing.with_cart(|c| c.selected_product_id.is_none()));
        assert_eq!(billing.with_cart(|c| c.quantity_input.clone()), "1");
    }

    #[test]
    fn test_add_item_without_selection_is_rejected() {
        let billing = BillingState::new();
        let products = seeded_products();

        let err = add_bill_item(&billing, &products).unwrap_err();
        assert_eq!(err.code, ErrorCode::BillingError);
        assert_eq!(err.message, "No product selected");
    }

    #[test]
    fn test_add_item_rejects_bad_quantity_text() {
        let billing = BillingState::new();
        let products = seeded_products();

        set_bill_product(&billing, Some("p1".to_string()));
        set_bill_quantity(&billing, "2.5");

        let err = add_bill_item(&billing, &products).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(billing.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_add_item_surfaces_stock_shortage() {
        let billing = BillingState::new();
        let products = seeded_products();

        set_bill_product(&billing, Some("p2".to_string()));
        set_bill_quantity(&billing, "5");

        let err = add_bill_item(&billing, &products).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Only 3 units available for Tea 500g");
        assert!(billing.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_remove_item_out_of_bounds() {
        let billing = BillingState::new();
        let err = remove_bill_item(&billing, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::BillingError);
    }

    #[test]
    fn test_customer_picker_flow() {
        let billing = BillingState::new();
        let customers = seeded_customers();

        let hits = set_bill_customer_search(&billing, &customers, "ash");
        assert_eq!(hits.len(), 1);

        let customer = select_bill_customer(&billing, &customers, "c1").unwrap();
        assert_eq!(customer.name, "Asha Verma");
        assert_eq!(billing.with_cart(|c| c.customer_search.clone()), "");

        let err = select_bill_customer(&billing, &customers, "c9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_submit_requires_customer_and_items() {
        let client = test_client();
        let billing = BillingState::new();

        let err = submit_bill(&client, &billing).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BillingError);
        assert_eq!(err.message, "No customer selected");

        let customers = seeded_customers();
        select_bill_customer(&billing, &customers, "c1").unwrap();

        let err = submit_bill(&client, &billing).await.unwrap_err();
        assert_eq!(err.message, "No products added to the bill");
    }
}
