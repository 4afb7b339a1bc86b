//! # Domain Types
//!
//! Wire-accurate types shared by the client, export, and desk layers.
//!
//! ## Type Landscape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Server-owned records          Client-only (ephemeral)                 │
//! │  ────────────────────          ────────────────────────                │
//! │  Customer   {_id, name,        LineItem {_id, product, quantity,       │
//! │              address, phone}             price, subtotal}               │
//! │  Product    {_id, product,     (discarded on submit/navigation)        │
//! │              description,                                               │
//! │              quantity, price}  ReportRow {saleDate, productName,       │
//! │                                           customer, price, quantity,   │
//! │                                           paymentType}                  │
//! │                                (replaced wholesale on every fetch)     │
//! │                                                                         │
//! │  Enums: PaymentType (Cash | Card | UPI), ReportKind (sales | item |    │
//! │         customer)                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Conventions
//! - Field names are camelCase; irregular names (`_id`, the name field of a
//!   product being literally `product`) are pinned with explicit renames.
//! - Monetary values are JSON numbers, carried as `Decimal` via
//!   `rust_decimal::serde::float`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::line_subtotal;

// =============================================================================
// Customer
// =============================================================================

/// A customer record as served by the API.
///
/// The local list is a cache refreshed after each mutation; the server owns
/// the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Postal address, free text.
    pub address: String,

    /// Ten-digit numeric phone string.
    pub phone: String,
}

impl Customer {
    /// Case-insensitive substring match on the customer name.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product record as served by the API.
///
/// The name field is literally `product` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name (wire field: `product`).
    #[serde(rename = "product")]
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Units in stock. Integer, may be zero.
    pub quantity: i64,

    /// Unit price. Decimal, may carry more than two fraction digits.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// Case-insensitive substring match on the product name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

// =============================================================================
// Payment Type
// =============================================================================

/// Payment methods accepted on a bill.
///
/// Wire strings are exactly "Cash", "Card", "UPI".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentType {
    /// Cash payment. The default for every new bill.
    #[default]
    Cash,

    /// Card payment (credit or debit).
    Card,

    /// Unified Payments Interface transfer.
    #[serde(rename = "UPI")]
    Upi,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentType::Cash => write!(f, "Cash"),
            PaymentType::Card => write!(f, "Card"),
            PaymentType::Upi => write!(f, "UPI"),
        }
    }
}

// =============================================================================
// Billing Line Item
// =============================================================================

/// One product entry within an in-progress, unsubmitted bill.
///
/// Name and price are snapshots taken when the item is added; a later product
/// edit does not retroactively change a pending bill. The same shape is sent
/// verbatim in the bill payload's `billingProducts` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Identifier of the product this line was created from.
    #[serde(rename = "_id")]
    pub product_id: String,

    /// Product name snapshot (wire field: `product`).
    #[serde(rename = "product")]
    pub name: String,

    /// Units billed.
    pub quantity: i64,

    /// Unit price snapshot.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// price × quantity, fixed at add time.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

impl LineItem {
    /// Builds a line item by snapshotting a product at the given quantity.
    ///
    /// Stock-availability checking is the caller's job; this only freezes
    /// name/price and computes the subtotal.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity,
            price: product.price,
            subtotal: line_subtotal(product.price, quantity),
        }
    }
}

// =============================================================================
// Report Row
// =============================================================================

/// One aggregated sale entry returned by the report endpoints.
///
/// Population is entirely server-driven; the client only derives subtotals
/// and totals from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    /// When the sale was recorded.
    pub sale_date: DateTime<Utc>,

    /// Product name at sale time.
    pub product_name: String,

    /// Customer name at sale time.
    pub customer: String,

    /// Unit price. Missing values decode as zero.
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units sold. Missing values decode as zero.
    #[serde(default)]
    pub quantity: i64,

    /// Payment method, when the report kind carries it.
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
}

impl ReportRow {
    /// price × quantity for this row.
    pub fn subtotal(&self) -> Decimal {
        line_subtotal(self.price, self.quantity)
    }
}

// =============================================================================
// Report Kind
// =============================================================================

/// Which aggregation the report view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// All transactions in the date range.
    #[default]
    Sales,

    /// Transactions for one product. Requires a product selection.
    Item,

    /// Ledger for one customer. Requires a customer selection.
    Customer,
}

impl ReportKind {
    /// Returns true when this kind needs a product selection before fetching.
    pub fn requires_product(&self) -> bool {
        matches!(self, ReportKind::Item)
    }

    /// Returns true when this kind needs a customer selection before fetching.
    pub fn requires_customer(&self) -> bool {
        matches!(self, ReportKind::Customer)
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Sales => write!(f, "sales"),
            ReportKind::Item => write!(f, "item"),
            ReportKind::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" => Ok(ReportKind::Sales),
            "item" => Ok(ReportKind::Item),
            "customer" => Ok(ReportKind::Customer),
            other => Err(format!(
                "Unknown report kind: '{}'. Valid options: sales, item, customer",
                other
            )),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample_product() -> Product {
        Product {
            id: "prod-1".to_string(),
            name: "Sugar 1kg".to_string(),
            description: "Granulated white sugar".to_string(),
            quantity: 40,
            price: dec("50"),
        }
    }

    #[test]
    fn test_customer_matches_is_case_insensitive() {
        let a = Customer {
            id: "c1".to_string(),
            name: "A".to_string(),
            address: "12 Hill Road".to_string(),
            phone: "9876543210".to_string(),
        };
        let bob = Customer {
            id: "c2".to_string(),
            name: "Bob".to_string(),
            address: "7 Lake View".to_string(),
            phone: "9123456780".to_string(),
        };

        assert!(!a.matches("b"));
        assert!(bob.matches("b"));
        assert!(bob.matches("OB"));
        assert!(bob.matches(""));
    }

    #[test]
    fn test_line_item_snapshots_product() {
        let mut product = sample_product();
        let item = LineItem::from_product(&product, 2);

        assert_eq!(item.product_id, "prod-1");
        assert_eq!(item.name, "Sugar 1kg");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, dec("50"));
        assert_eq!(item.subtotal, dec("100"));

        // Editing the product afterwards must not touch the snapshot.
        product.price = dec("60");
        assert_eq!(item.price, dec("50"));
    }

    #[test]
    fn test_product_wire_shape() {
        let json = r#"{
            "_id": "prod-9",
            "product": "Tea 250g",
            "description": "Loose leaf",
            "quantity": 12,
            "price": 19.999
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "prod-9");
        assert_eq!(product.name, "Tea 250g");
        assert_eq!(product.price, dec("19.999"));

        let back = serde_json::to_value(&product).unwrap();
        assert!(back.get("_id").is_some());
        assert!(back.get("product").is_some());
        assert!(back.get("price").unwrap().is_number());
    }

    #[test]
    fn test_line_item_wire_shape() {
        let item = LineItem::from_product(&sample_product(), 3);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["_id"], "prod-1");
        assert_eq!(value["product"], "Sugar 1kg");
        assert_eq!(value["quantity"], 3);
        assert!(value["price"].is_number());
        assert!(value["subtotal"].is_number());
    }

    #[test]
    fn test_payment_type_wire_strings() {
        assert_eq!(serde_json::to_string(&PaymentType::Cash).unwrap(), "\"Cash\"");
        assert_eq!(serde_json::to_string(&PaymentType::Card).unwrap(), "\"Card\"");
        assert_eq!(serde_json::to_string(&PaymentType::Upi).unwrap(), "\"UPI\"");

        let upi: PaymentType = serde_json::from_str("\"UPI\"").unwrap();
        assert_eq!(upi, PaymentType::Upi);
        assert_eq!(PaymentType::default(), PaymentType::Cash);
    }

    #[test]
    fn test_report_row_decodes_and_defaults() {
        let json = r#"{
            "saleDate": "2024-11-05T10:30:00Z",
            "productName": "Sugar 1kg",
            "customer": "Bob",
            "price": 50.0,
            "quantity": 2,
            "paymentType": "Cash"
        }"#;
        let row: ReportRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.subtotal(), dec("100"));
        assert_eq!(row.payment_type, Some(PaymentType::Cash));

        // Ledger kinds may omit price/quantity/paymentType.
        let sparse = r#"{
            "saleDate": "2024-11-05T10:30:00Z",
            "productName": "Sugar 1kg",
            "customer": "Bob"
        }"#;
        let row: ReportRow = serde_json::from_str(sparse).unwrap();
        assert_eq!(row.price, Decimal::ZERO);
        assert_eq!(row.quantity, 0);
        assert_eq!(row.subtotal(), Decimal::ZERO);
        assert_eq!(row.payment_type, None);
    }

    #[test]
    fn test_report_kind_parsing() {
        assert_eq!("sales".parse::<ReportKind>().unwrap(), ReportKind::Sales);
        assert_eq!("Item".parse::<ReportKind>().unwrap(), ReportKind::Item);
        assert_eq!(
            "customer".parse::<ReportKind>().unwrap(),
            ReportKind::Customer
        );
        assert!("ledger".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_report_kind_selection_requirements() {
        assert!(!ReportKind::Sales.requires_product());
        assert!(!ReportKind::Sales.requires_customer());
        assert!(ReportKind::Item.requires_product());
        assert!(ReportKind::Customer.requires_customer());
    }
}
