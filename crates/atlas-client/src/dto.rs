//! # Wire Payloads and Envelopes
//!
//! Request bodies sent to the API and the response envelopes it returns.
//!
//! Every response carries a `success` flag and usually a `message`; data
//! payloads ride alongside under endpoint-specific keys (`customers`,
//! `salesData`, ...). Field names follow the server's JSON exactly,
//! including the `totalAmout` spelling on bill submission, which the
//! backend matches verbatim.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use atlas_core::{Customer, LineItem, PaymentType, Product, ReportRow};

// =============================================================================
// Request Payloads
// =============================================================================

/// Body for `POST /api/user/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/user/signin`.
#[derive(Debug, Clone, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Body for add-customer and update-customer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Body for add-product and update-product.
///
/// `product` is the display name; the server uses the same key on the
/// stored entity.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub product: String,
    pub description: String,
    pub quantity: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Body for `POST /api/user/generate-bill`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBillRequest {
    /// Id of the selected customer.
    pub customers_id: String,
    /// Line items in the order they were added.
    pub billing_products: Vec<LineItem>,
    pub payment_type: PaymentType,
    /// Sum of line subtotals. The key spelling is what the server expects.
    #[serde(rename = "totalAmout", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Bare `{success, message}` envelope for mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope for `POST /api/user/signin`.
#[derive(Debug, Clone, Deserialize)]
pub struct SigninEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

/// Envelope for `GET /api/user/get-all-customers`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomersEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Envelope for `POST /api/user/add-customer`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// Envelope for `GET /api/user/get-all-products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Envelope for `POST /api/user/add-product`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
}

/// Envelope for `GET /api/user/sales-report`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesReportEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "salesData")]
    pub sales_data: Vec<ReportRow>,
}

/// Envelope for `GET /api/user/items-report`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemsReportEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "itemsReport")]
    pub items_report: Vec<ReportRow>,
}

/// Envelope for `GET /api/user/customer-ledger`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerReportEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "customerReport")]
    pub customer_report: Vec<ReportRow>,
}
