//! # Billing State
//!
//! The in-progress bill: selected customer, pending line items, and the
//! form inputs feeding the next line item.
//!
//! ## Billing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Billing Operations                               │
//! │                                                                         │
//! │  Screen Action             Command                 Cart Change          │
//! │  ─────────────             ───────                 ───────────          │
//! │                                                                         │
//! │  Pick customer ──────────► select_bill_customer ─► customer = Some(c)   │
//! │                                                                         │
//! │  Pick product + qty ─────► add_bill_item ────────► items.push(line)     │
//! │                                                    inputs reset         │
//! │                                                                         │
//! │  Click Remove ───────────► remove_bill_item ─────► items.remove(i)      │
//! │                                                                         │
//! │  Click Generate ─────────► submit_bill ──────────► POST, then clear     │
//! │                                                                         │
//! │  INVARIANT: the total is recomputed from line subtotals on every        │
//! │  read, never cached. A failed add leaves the cart untouched.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;

use atlas_core::{CoreError, CoreResult, LineItem, PaymentType, Product};

// =============================================================================
// Bill Draft
// =============================================================================

/// Everything the submit step needs, captured under one lock.
///
/// ## Design Notes
/// Producing a draft validates the two submit preconditions (a customer and
/// at least one line item) so the command layer never inspects cart fields
/// piecemeal.
#[derive(Debug, Clone, PartialEq)]
pub struct BillDraft {
    pub customer_id: String,
    pub items: Vec<LineItem>,
    pub payment_type: PaymentType,
    pub total: Decimal,
}

// =============================================================================
// Billing Cart
// =============================================================================

/// The pending bill and its entry form.
///
/// ## Invariants
/// - `quantity_input` defaults to "1" and returns there after every add
/// - `payment_type` defaults to Cash and returns there after every add
/// - Line items keep insertion order; removal shifts later items left
/// - Repeated products are separate lines, never merged
#[derive(Debug, Clone)]
pub struct BillingCart {
    /// Customer the bill is for. Cleared after submit.
    pub customer: Option<atlas_core::Customer>,

    /// Search query for the customer picker.
    pub customer_search: String,

    /// Pending line items in insertion order.
    pub items: Vec<LineItem>,

    /// Product chosen in the entry form, if any.
    pub selected_product_id: Option<String>,

    /// Raw quantity text from the entry form.
    pub quantity_input: String,

    /// Payment method for the whole bill.
    pub payment_type: PaymentType,
}

impl BillingCart {
    pub fn new() -> Self {
        BillingCart {
            customer: None,
            customer_search: String::new(),
            items: Vec::new(),
            selected_product_id: None,
            quantity_input: "1".to_string(),
            payment_type: PaymentType::Cash,
        }
    }

    /// Sets the active customer and collapses the picker query.
    pub fn select_customer(&mut self, customer: atlas_core::Customer) {
        self.customer = Some(customer);
        self.customer_search.clear();
    }

    /// Appends a line item after checking cached stock.
    ///
    /// ## Behavior
    /// - `quantity > product.quantity`: rejected, cart untouched
    /// - Otherwise: snapshot pushed, entry form reset to defaults
    ///
    /// Adding the same product twice creates two lines; stock is checked
    /// per line against the cached quantity, not against the sum already
    /// in the cart.
    pub fn add_line_item(&mut self, product: &Product, quantity: i64) -> CoreResult<LineItem> {
        if quantity > product.quantity {
            return Err(CoreError::InsufficientStock {
                name: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }

        let line = LineItem::from_product(product, quantity);
        self.items.push(line.clone());

        self.selected_product_id = None;
        self.quantity_input = "1".to_string();
        self.payment_type = PaymentType::Cash;

        Ok(line)
    }

    /// Removes the line item at `index`, keeping the others in order.
    pub fn remove_line_item(&mut self, index: usize) -> CoreResult<LineItem> {
        if index >= self.items.len() {
            return Err(CoreError::LineItemOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Grand total, recomputed from the line subtotals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|i| i.subtotal).sum()
    }

    /// Validates submit preconditions and snapshots the bill.
    pub fn draft(&self) -> CoreResult<BillDraft> {
        let customer = self.customer.as_ref().ok_or(CoreError::NoCustomerSelected)?;
        if self.items.is_empty() {
            return Err(CoreError::EmptyBill);
        }

        Ok(BillDraft {
            customer_id: customer.id.clone(),
            items: self.items.clone(),
            payment_type: self.payment_type,
            total: self.total(),
        })
    }

    /// Clears the submitted bill, keeping the entry form defaults.
    pub fn clear_after_submit(&mut self) {
        self.customer = None;
        self.items.clear();
    }

    /// Full reset, used when the clerk navigates away mid-bill.
    pub fn reset(&mut self) {
        *self = BillingCart::new();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for BillingCart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Managed State
// =============================================================================

/// Thread-safe cart holder shared across commands.
#[derive(Debug)]
pub struct BillingState {
    cart: Arc<Mutex<BillingCart>>,
}

impl BillingState {
    pub fn new() -> Self {
        BillingState {
            cart: Arc::new(Mutex::new(BillingCart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillingCart) -> R,
    {
        let cart = self.cart.lock().expect("Billing mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillingCart) -> R,
    {
        let mut cart = self.cart.lock().expect("Billing mutex poisoned");
        f(&mut cart)
    }
}

impl Default for BillingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::Customer;

    fn test_customer() -> Customer {
        Customer {
            id: "c1".to_string(),
            name: "Asha Verma".to_string(),
            address: "12 Market Road".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    fn test_product(id: &str, price: Decimal, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "Shelf stock".to_string(),
            quantity: stock,
            price,
        }
    }

    #[test]
    fn test_add_item_computes_subtotal_and_total() {
        let mut cart = BillingCart::new();
        let fifty = test_product("1", Decimal::new(5000, 2), 10);
        let thirty = test_product("2", Decimal::new(3000, 2), 10);

        cart.add_line_item(&fifty, 2).unwrap();
        cart.add_line_item(&thirty, 1).unwrap();

        assert_eq!(cart.items[0].subtotal, Decimal::new(10000, 2));
        assert_eq!(cart.items[1].subtotal, Decimal::new(3000, 2));
        assert_eq!(cart.total(), Decimal::new(13000, 2));
    }

    #[test]
    fn test_add_item_resets_entry_form() {
        let mut cart = BillingCart::new();
        cart.selected_product_id = Some("1".to_string());
        cart.quantity_input = "3".to_string();
        cart.payment_type = PaymentType::Card;

        let product = test_product("1", Decimal::new(999, 2), 10);
        cart.add_line_item(&product, 3).unwrap();

        assert_eq!(cart.selected_product_id, None);
        assert_eq!(cart.quantity_input, "1");
        assert_eq!(cart.payment_type, PaymentType::Cash);
    }

    #[test]
    fn test_insufficient_stock_leaves_cart_untouched() {
        let mut cart = BillingCart::new();
        let product = test_product("1", Decimal::new(999, 2), 3);

        let err = cart.add_line_item(&product, 5).unwrap_err();
        assert_eq!(err.to_string(), "Only 3 units available for Product 1");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_same_product_twice_stays_two_lines() {
        let mut cart = BillingCart::new();
        let product = test_product("1", Decimal::new(999, 2), 10);

        cart.add_line_item(&product, 1).unwrap();
        cart.add_line_item(&product, 2).unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total(), Decimal::new(2997, 2));
    }

    #[test]
    fn test_remove_keeps_order_and_checks_bounds() {
        let mut cart = BillingCart::new();
        for id in ["1", "2", "3"] {
            let product = test_product(id, Decimal::ONE, 10);
            cart.add_line_item(&product, 1).unwrap();
        }

        let removed = cart.remove_line_item(1).unwrap();
        assert_eq!(removed.product_id, "2");
        assert_eq!(cart.items[0].product_id, "1");
        assert_eq!(cart.items[1].product_id, "3");

        let err = cart.remove_line_item(5).unwrap_err();
        assert!(matches!(err, CoreError::LineItemOutOfBounds { len: 2, .. }));
    }

    #[test]
    fn test_draft_requires_customer_and_items() {
        let mut cart = BillingCart::new();
        assert!(matches!(
            cart.draft().unwrap_err(),
            CoreError::NoCustomerSelected
        ));

        cart.select_customer(test_customer());
        assert!(matches!(cart.draft().unwrap_err(), CoreError::EmptyBill));

        let product = test_product("1", Decimal::new(5000, 2), 10);
        cart.add_line_item(&product, 2).unwrap();

        let draft = cart.draft().unwrap();
        assert_eq!(draft.customer_id, "c1");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.total, Decimal::new(10000, 2));
    }

    #[test]
    fn test_select_customer_clears_search() {
        let mut cart = BillingCart::new();
        cart.customer_search = "ash".to_string();

        cart.select_customer(test_customer());
        assert_eq!(cart.customer_search, "");
        assert_eq!(cart.customer.as_ref().unwrap().id, "c1");
    }

    #[test]
    fn test_clear_after_submit_keeps_defaults() {
        let mut cart = BillingCart::new();
        cart.select_customer(test_customer());
        let product = test_product("1", Decimal::ONE, 10);
        cart.add_line_item(&product, 1).unwrap();

        cart.clear_after_submit();
        assert!(cart.customer.is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_input, "1");
    }
}
