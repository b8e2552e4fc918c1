//! Endpoint descriptors and per-request options.
//!
//! The backend filters and orders collections through query parameters:
//! `field=eq.value` for equality, `order=field.desc` for ordering, and bare
//! `name=value` parameters for RPC arguments.

use reqwest::Method;

/// A relative resource path plus an ordered list of query parameters.
///
/// Built per call and rendered once; parameters appear in insertion order.
#[derive(Clone, Debug)]
pub struct Endpoint {
    path: String,
    query: Vec<QueryParam>,
}

#[derive(Clone, Debug)]
enum QueryParam {
    Eq { field: String, value: String },
    OrderDesc { field: String },
    Param { field: String, value: String },
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Add an equality filter, `field=eq.value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.query.push(QueryParam::Eq {
            field: field.into(),
            value: value.to_string(),
        });
        self
    }

    /// Add a descending ordering, `order=field.desc`.
    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.query.push(QueryParam::OrderDesc {
            field: field.into(),
        });
        self
    }

    /// Add a bare parameter, `field=value`. Used for RPC arguments.
    pub fn param(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.query.push(QueryParam::Param {
            field: field.into(),
            value: value.to_string(),
        });
        self
    }

    /// Render the path and query string, e.g. `/orders?id=eq.42`.
    pub fn render(&self) -> String {
        let mut rendered = self.path.clone();
        for (i, param) in self.query.iter().enumerate() {
            rendered.push(if i == 0 { '?' } else { '&' });
            match param {
                QueryParam::Eq { field, value } => {
                    rendered.push_str(&format!("{field}=eq.{}", urlencoding::encode(value)));
                }
                QueryParam::OrderDesc { field } => {
                    rendered.push_str(&format!("order={field}.desc"));
                }
                QueryParam::Param { field, value } => {
                    rendered.push_str(&format!("{field}={}", urlencoding::encode(value)));
                }
            }
        }
        rendered
    }
}

/// Options for a single request: HTTP method (default GET) and an optional
/// pre-serialized JSON body.
///
/// Headers are not part of the options; the client's fixed header set is
/// attached to every request and cannot be overridden per call.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub(crate) method: Method,
    pub(crate) body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the serialized JSON body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bare_path() {
        assert_eq!(Endpoint::new("/orders").render(), "/orders");
    }

    #[test]
    fn test_render_equality_filter() {
        assert_eq!(
            Endpoint::new("/orders").eq("id", 42).render(),
            "/orders?id=eq.42"
        );
    }

    #[test]
    fn test_render_filter_then_ordering() {
        assert_eq!(
            Endpoint::new("/products")
                .eq("artisan_id", 1)
                .order_desc("created_at")
                .render(),
            "/products?artisan_id=eq.1&order=created_at.desc"
        );
    }

    #[test]
    fn test_render_preserves_insertion_order() {
        assert_eq!(
            Endpoint::new("/reviews")
                .order_desc("created_at")
                .eq("product_id", 7)
                .render(),
            "/reviews?order=created_at.desc&product_id=eq.7"
        );
    }

    #[test]
    fn test_render_rpc_parameter() {
        assert_eq!(
            Endpoint::new("/rpc/get_dashboard_summary")
                .param("artisan_id_param", 1)
                .render(),
            "/rpc/get_dashboard_summary?artisan_id_param=1"
        );
    }

    #[test]
    fn test_render_encodes_string_values() {
        assert_eq!(
            Endpoint::new("/orders").eq("status", "in transit").render(),
            "/orders?status=eq.in%20transit"
        );
    }

    #[test]
    fn test_default_options_are_get_with_no_body() {
        let options = RequestOptions::new();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
    }
}
