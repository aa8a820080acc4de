//! Transport SPI - the one capability the gateway consumes from outside
//!
//! Connection pooling, TLS, and timeouts live behind this seam; the gateway
//! only consumes the status code and body text of one POST exchange.

mod http;

pub use http::ReqwestTransport;

use async_trait::async_trait;

use crate::api::GatewayResult;

/// Raw outcome of one HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP POST capability
///
/// Implementations must be `Send + Sync` to allow usage across async
/// runtime boundaries.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// POST `body` to `url` with `headers`
    ///
    /// A non-success provider status is a normal [`HttpResponse`], not an
    /// error; only a failure of the exchange itself is an error.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the connection or exchange fails.
    async fn send(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> GatewayResult<HttpResponse>;
}
