pub mod format;
pub mod tls_client;
