//! HTTP chat client: alias resolution, URL and header assembly, one POST
//! per call

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{ChatReply, ChatRequest, ChatService, GatewayResult};
use crate::config::{GatewayConfig, ModelSpec};
use crate::spi::{HttpTransport, ReqwestTransport};

use super::translate::{build_request_body, extract_result};

/// Chat client that speaks any provider described by its configuration
///
/// Holds no mutable state: each call resolves the model, builds its own
/// outbound tree, performs one POST through the transport, and parses its
/// own inbound tree. Safe to share across tasks without synchronization.
#[derive(Debug)]
pub struct HttpChatClient {
    config: GatewayConfig,
    transport: Arc<dyn HttpTransport>,
}

impl HttpChatClient {
    /// Create a client over an explicit transport
    ///
    /// Use this to substitute a mock transport in tests.
    pub fn new(config: GatewayConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Create a production client backed by the reqwest transport
    ///
    /// # Errors
    ///
    /// Returns a transport error when the HTTP client cannot be built.
    pub fn from_config(config: GatewayConfig) -> GatewayResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout_ms)?);
        Ok(Self::new(config, transport))
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Request headers for `spec`: JSON content type plus the rendered auth
    /// header when one is configured
    fn headers(spec: &ModelSpec) -> GatewayResult<Vec<(String, String)>> {
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        if !spec.auth_header.is_empty() {
            let credential = spec.resolve_api_key()?;
            headers.push((spec.auth_header.clone(), spec.auth_value(&credential)));
        }
        Ok(headers)
    }
}

#[async_trait]
impl ChatService for HttpChatClient {
    async fn chat(&self, request: ChatRequest) -> GatewayResult<ChatReply> {
        let (model, spec) = self.config.resolve(&request.model)?;

        // Canonicalize before translation so the wire sees the resolved
        // identifier, not the caller's alias.
        let request = ChatRequest {
            model: model.clone(),
            ..request
        };

        let body = build_request_body(spec, &request)?;
        let url = spec.url(&model);
        let headers = Self::headers(spec)?;

        debug!(model = %model, url = %url, "dispatching chat request");
        let response = self.transport.send(&url, &headers, body).await?;
        debug!(model = %model, status = response.status, "provider answered");

        let text = extract_result(spec, response.status, &response.body)?;
        Ok(ChatReply { text, model })
    }

    fn models(&self) -> Vec<String> {
        self.config.model_names()
    }

    fn supports(&self, model: &str) -> bool {
        self.config.resolve(model).is_ok()
    }
}
