//! # REST API Client
//!
//! Thin HTTP wrapper over the remote store. Every operation maps to one
//! endpoint; the client does no caching, no retries, and no business
//! logic beyond envelope unwrapping.
//!
//! ## Endpoint Map
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  Auth      POST /api/user/signup            POST /api/user/signin    │
//! │  Customers GET  /api/user/get-all-customers                          │
//! │            POST /api/user/add-customer                               │
//! │            PUT  /api/user/update-customer/{id}                       │
//! │            DEL  /api/user/remove-customer/{id}                       │
//! │  Products  GET  /api/user/get-all-products                           │
//! │            POST /api/user/add-product                                │
//! │            PUT  /api/user/update-product/{id}                        │
//! │            DEL  /api/user/remove-product/{id}                        │
//! │  Billing   POST /api/user/generate-bill                              │
//! │  Reports   GET  /api/user/sales-report?startDate&endDate             │
//! │            GET  /api/user/items-report?…&productId                   │
//! │            GET  /api/user/customer-ledger?…&customerId               │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcome Mapping
//! - transport failure                → `ClientError::Network`
//! - non-2xx status                   → `ClientError::Api { status, message }`
//! - 2xx with `success: false`        → `ClientError::Rejected(message)`
//! - 2xx with unparseable body        → `ClientError::Decode`
//!
//! Credentials ride on a cookie jar, so the same client instance must be
//! reused across sign-in and the requests that follow it.

use chrono::NaiveDate;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use atlas_core::{Customer, Product, ReportRow};

use crate::config::AppConfig;
use crate::dto::{
    CustomerEnvelope, CustomerPayload, CustomerReportEnvelope, CustomersEnvelope,
    GenerateBillRequest, ItemsReportEnvelope, ProductEnvelope, ProductPayload, ProductsEnvelope,
    SalesReportEnvelope, SigninEnvelope, SigninRequest, SignupRequest, StatusEnvelope,
};
use crate::error::{ClientError, ClientResult};

/// Wire format for report date-range query parameters.
const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Client
// =============================================================================

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// The cookie jar is enabled so the session cookie issued at sign-in
    /// is replayed on every later request.
    pub fn new(config: &AppConfig) -> ClientResult<Self> {
        let base = Url::parse(config.base_url())?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(ApiClient { http, base })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base.join(path)?)
    }

    fn report_url(
        &self,
        path: &str,
        start: NaiveDate,
        end: NaiveDate,
        extra: Option<(&str, &str)>,
    ) -> ClientResult<Url> {
        let mut url = self.endpoint(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("startDate", &start.format(DATE_FORMAT).to_string());
            pairs.append_pair("endDate", &end.format(DATE_FORMAT).to_string());
            if let Some((key, value)) = extra {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    // =========================================================================
    // Request Plumbing
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!(url = %url, "GET");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url = %url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn put_json<B, T>(&self, url: Url, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url = %url, "PUT");
        let response = self.http.put(url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!(url = %url, "DELETE");
        let response = self.http.delete(url).send().await?;
        Self::decode(response).await
    }

    /// Turns a raw response into a typed envelope or an error.
    ///
    /// Non-2xx bodies are still probed for a `{message}` so the server's
    /// own wording reaches the operator.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<StatusEnvelope>(&body).ok())
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Registers a new account. Returns the server's confirmation message.
    pub async fn sign_up(&self, request: &SignupRequest) -> ClientResult<String> {
        let url = self.endpoint("/api/user/signup")?;
        let envelope: StatusEnvelope = self.post_json(url, request).await?;
        let message = ensure_accepted(envelope.success, envelope.message)?;
        Ok(message.unwrap_or_else(|| "Signup successful".to_string()))
    }

    /// Authenticates and returns the server-issued user id.
    ///
    /// The session cookie lands in the jar as a side effect.
    pub async fn sign_in(&self, request: &SigninRequest) -> ClientResult<String> {
        let url = self.endpoint("/api/user/signin")?;
        let envelope: SigninEnvelope = self.post_json(url, request).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        envelope
            .user_id
            .ok_or_else(|| ClientError::Decode("signin response missing userId".to_string()))
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Fetches every customer.
    pub async fn fetch_customers(&self) -> ClientResult<Vec<Customer>> {
        let url = self.endpoint("/api/user/get-all-customers")?;
        let envelope: CustomersEnvelope = self.get_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(envelope.customers)
    }

    /// Creates a customer and returns the stored entity (with its new id).
    pub async fn add_customer(&self, payload: &CustomerPayload) -> ClientResult<Customer> {
        let url = self.endpoint("/api/user/add-customer")?;
        let envelope: CustomerEnvelope = self.post_json(url, payload).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        envelope
            .customer
            .ok_or_else(|| ClientError::Decode("add-customer response missing customer".to_string()))
    }

    /// Overwrites a customer's fields.
    pub async fn update_customer(&self, id: &str, payload: &CustomerPayload) -> ClientResult<()> {
        let url = self.endpoint(&format!("/api/user/update-customer/{}", id))?;
        let envelope: StatusEnvelope = self.put_json(url, payload).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(())
    }

    /// Deletes a customer.
    pub async fn remove_customer(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&format!("/api/user/remove-customer/{}", id))?;
        let envelope: StatusEnvelope = self.delete_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(())
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetches every product.
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let url = self.endpoint("/api/user/get-all-products")?;
        let envelope: ProductsEnvelope = self.get_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(envelope.products)
    }

    /// Creates a product and returns the stored entity.
    pub async fn add_product(&self, payload: &ProductPayload) -> ClientResult<Product> {
        let url = self.endpoint("/api/user/add-product")?;
        let envelope: ProductEnvelope = self.post_json(url, payload).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        envelope
            .product
            .ok_or_else(|| ClientError::Decode("add-product response missing product".to_string()))
    }

    /// Overwrites a product's fields.
    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> ClientResult<()> {
        let url = self.endpoint(&format!("/api/user/update-product/{}", id))?;
        let envelope: StatusEnvelope = self.put_json(url, payload).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(())
    }

    /// Deletes a product.
    pub async fn remove_product(&self, id: &str) -> ClientResult<()> {
        let url = self.endpoint(&format!("/api/user/remove-product/{}", id))?;
        let envelope: StatusEnvelope = self.delete_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(())
    }

    // =========================================================================
    // Billing
    // =========================================================================

    /// Submits a completed bill. The server records the sale and adjusts
    /// stock; the client holds nothing back on success.
    pub async fn generate_bill(&self, request: &GenerateBillRequest) -> ClientResult<()> {
        let url = self.endpoint("/api/user/generate-bill")?;
        let envelope: StatusEnvelope = self.post_json(url, request).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(())
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// All sales in the date range.
    pub async fn sales_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ClientResult<Vec<ReportRow>> {
        let url = self.report_url("/api/user/sales-report", start, end, None)?;
        let envelope: SalesReportEnvelope = self.get_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(envelope.sales_data)
    }

    /// Sales of one product in the date range.
    pub async fn items_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        product_id: &str,
    ) -> ClientResult<Vec<ReportRow>> {
        let url = self.report_url(
            "/api/user/items-report",
            start,
            end,
            Some(("productId", product_id)),
        )?;
        let envelope: ItemsReportEnvelope = self.get_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(envelope.items_report)
    }

    /// Purchases of one customer in the date range.
    pub async fn customer_ledger(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        customer_id: &str,
    ) -> ClientResult<Vec<ReportRow>> {
        let url = self.report_url(
            "/api/user/customer-ledger",
            start,
            end,
            Some(("customerId", customer_id)),
        )?;
        let envelope: CustomerReportEnvelope = self.get_json(url).await?;
        ensure_accepted(envelope.success, envelope.message)?;
        Ok(envelope.customer_report)
    }
}

// =============================================================================
// Envelope Gate
// =============================================================================

/// Converts `success: false` into a rejection carrying the server's wording.
fn ensure_accepted(success: bool, message: Option<String>) -> ClientResult<Option<String>> {
    if success {
        Ok(message)
    } else {
        Err(ClientError::Rejected(
            message.unwrap_or_else(|| "Request rejected by server".to_string()),
        ))
    }
}
