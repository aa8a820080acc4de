//! reqwest-backed production transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::api::{GatewayError, GatewayResult};

use super::{HttpResponse, HttpTransport};

/// Production transport over a pooled reqwest client
#[derive(Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns a transport error when the underlying HTTP client cannot be
    /// built.
    pub fn new(timeout_ms: u64) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| GatewayError::Transport(format!("cannot build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> GatewayResult<HttpResponse> {
        let mut request = self.client.post(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        debug!(status, bytes = body.len(), "transport exchange complete");
        Ok(HttpResponse { status, body })
    }
}
