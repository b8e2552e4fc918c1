//! ArtsyApiClient implementation
//!
//! One thin, stateless shim per backend operation over a shared `request`
//! path with uniform result shaping.

use crate::ArtsyApiConfig;
use crate::endpoint::{Endpoint, RequestOptions};
use crate::result::ApiResult;
use artsy_shared::tls_client::create_tls_client;
use reqwest::{Method, header};
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;

/// Artisan identifier assumed when the caller does not name one.
const DEFAULT_ARTISAN_ID: i64 = 1;

/// Failure message for transport faults that carry no message of their own.
const CONNECT_FAILURE: &str = "Failed to connect to server";

/// Client for the Artsy seller dashboard backend
#[derive(Clone, Debug)]
pub struct ArtsyApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArtsyApiClient {
    /// Create a new ArtsyApiClient
    pub fn new(config: &ArtsyApiConfig) -> Result<Self, String> {
        if config.api_key.is_empty() {
            return Err("Artsy API key is required".to_string());
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "apikey",
            header::HeaderValue::from_str(&config.api_key).map_err(|e| e.to_string())?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = create_tls_client(headers, Duration::from_secs(30))?;

        Ok(Self {
            client,
            base_url: config.api_endpoint.clone(),
        })
    }

    /// Issue one request against the configured backend.
    ///
    /// Every fault is converted to [`ApiResult::Failure`] here: non-success
    /// statuses become `HTTP error! status: <code>` (the response body is
    /// discarded in that case), and transport or JSON parse faults surface
    /// their own message. At most one attempt per call, no retry.
    pub async fn request(&self, endpoint: Endpoint, options: RequestOptions) -> ApiResult {
        let url = format!("{}{}", self.base_url, endpoint.render());
        match self.dispatch(&url, options).await {
            Ok(data) => ApiResult::Success(data),
            Err(message) => {
                tracing::error!(url = %url, error = %message, "API error");
                ApiResult::Failure(message)
            }
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Create a product from a caller-supplied payload
    pub async fn upload_product<T: Serialize>(&self, product: &T) -> ApiResult {
        let body = match serde_json::to_string(product) {
            Ok(body) => body,
            Err(e) => return ApiResult::Failure(e.to_string()),
        };
        self.request(
            Endpoint::new("/products"),
            RequestOptions::new().with_method(Method::POST).with_body(body),
        )
        .await
    }

    /// List an artisan's products, newest first
    pub async fn get_products(&self, artisan_id: Option<i64>) -> ApiResult {
        let artisan_id = artisan_id.unwrap_or(DEFAULT_ARTISAN_ID);
        self.request(
            Endpoint::new("/products")
                .eq("artisan_id", artisan_id)
                .order_desc("created_at"),
            RequestOptions::new(),
        )
        .await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Set the status of one order
    pub async fn update_order_status(&self, order_id: i64, status: &str) -> ApiResult {
        self.request(
            Endpoint::new("/orders").eq("id", order_id),
            RequestOptions::new()
                .with_method(Method::PATCH)
                .with_body(json!({ "status": status }).to_string()),
        )
        .await
    }

    /// List all orders, newest first
    pub async fn get_orders(&self) -> ApiResult {
        self.request(
            Endpoint::new("/orders").order_desc("created_at"),
            RequestOptions::new(),
        )
        .await
    }

    // =========================================================================
    // Artisans and reviews
    // =========================================================================

    /// Get an artisan's profile
    pub async fn get_artisan_profile(&self, artisan_id: Option<i64>) -> ApiResult {
        let artisan_id = artisan_id.unwrap_or(DEFAULT_ARTISAN_ID);
        self.request(
            Endpoint::new("/artisans").eq("id", artisan_id),
            RequestOptions::new(),
        )
        .await
    }

    /// Get the dashboard summary for an artisan via the backend RPC
    pub async fn get_dashboard_summary(&self, artisan_id: Option<i64>) -> ApiResult {
        let artisan_id = artisan_id.unwrap_or(DEFAULT_ARTISAN_ID);
        self.request(
            Endpoint::new("/rpc/get_dashboard_summary").param("artisan_id_param", artisan_id),
            RequestOptions::new(),
        )
        .await
    }

    /// List reviews, newest first, optionally scoped to one product
    pub async fn get_reviews(&self, product_id: Option<i64>) -> ApiResult {
        let mut endpoint = Endpoint::new("/reviews");
        if let Some(product_id) = product_id {
            endpoint = endpoint.eq("product_id", product_id);
        }
        self.request(endpoint.order_desc("created_at"), RequestOptions::new())
            .await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    async fn dispatch(&self, url: &str, options: RequestOptions) -> Result<Value, String> {
        let mut builder = self.client.request(options.method, url);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(fault_message)?;

        if !response.status().is_success() {
            // Body intentionally discarded: server-provided error detail is
            // collapsed into the status code.
            return Err(format!("HTTP error! status: {}", response.status().as_u16()));
        }

        response.json().await.map_err(fault_message)
    }
}

fn fault_message(error: reqwest::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        CONNECT_FAILURE.to_string()
    } else {
        message
    }
}
