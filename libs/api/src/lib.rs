//! Artsy API Client
//!
//! Provides access to the Artsy seller dashboard backend:
//! - Products (upload, per-artisan listings)
//! - Orders (listings, status updates)
//! - Artisan profiles and product reviews
//! - Dashboard summary (via the `get_dashboard_summary` RPC)

mod client;
mod endpoint;
mod result;

pub use client::ArtsyApiClient;
pub use endpoint::{Endpoint, RequestOptions};
pub use reqwest::Method;
pub use result::ApiResult;

/// Configuration for ArtsyApiClient
#[derive(Clone, Debug)]
pub struct ArtsyApiConfig {
    /// API key attached to every request
    pub api_key: String,
    /// REST endpoint URL (default: https://xoqyywycygofgbgazrpu.supabase.co/rest/v1)
    pub api_endpoint: String,
}

impl ArtsyApiConfig {
    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_endpoint: "https://xoqyywycygofgbgazrpu.supabase.co/rest/v1".to_string(),
        }
    }

    /// Set API endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }
}
