//! Mock transport for exercising the gateway without a network
//!
//! `MockTransport` implements `HttpTransport` with a scripted response and
//! records every request it receives, so tests can assert on the exact
//! URL, headers, and body the gateway produced.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{GatewayError, GatewayResult};
use crate::spi::{HttpResponse, HttpTransport};

/// One request the gateway handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone)]
enum Behaviour {
    /// Answer every request with this status and body
    Respond { status: u16, body: String },
    /// Fail every exchange with a transport error
    Fail(String),
}

/// Mock implementation of [`HttpTransport`]
///
/// # Example
///
/// ```rust,ignore
/// use llm_gateway::testing::MockTransport;
///
/// let transport = Arc::new(MockTransport::respond(200, r#"{"output":{"text":"ok"}}"#));
/// let client = HttpChatClient::new(config, Arc::clone(&transport));
/// // ... drive the client, then assert on transport.sent()
/// ```
#[derive(Debug)]
pub struct MockTransport {
    behaviour: Behaviour,
    sent: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    /// Create a mock that answers every request with `status` and `body`
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        Self {
            behaviour: Behaviour::Respond {
                status,
                body: body.into(),
            },
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose exchanges fail with a transport error
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            behaviour: Behaviour::Fail(message.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests received
    pub fn calls(&self) -> usize {
        self.lock().len()
    }

    /// Every request received, in order
    pub fn sent(&self) -> Vec<SentRequest> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SentRequest>> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> GatewayResult<HttpResponse> {
        self.lock().push(SentRequest {
            url: url.to_string(),
            headers: headers.to_vec(),
            body,
        });
        match &self.behaviour {
            Behaviour::Respond { status, body } => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Behaviour::Fail(message) => Err(GatewayError::Transport(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockTransport::respond(200, "{}");
        mock.send("https://a.test", &[], "one".to_string()).await.unwrap();
        mock.send("https://b.test", &[], "two".to_string()).await.unwrap();

        assert_eq!(mock.calls(), 2);
        let sent = mock.sent();
        assert_eq!(sent[0].url, "https://a.test");
        assert_eq!(sent[1].body, "two");
    }

    #[tokio::test]
    async fn fail_behaviour_returns_transport_error() {
        let mock = MockTransport::fail("boom");
        let err = mock.send("https://a.test", &[], String::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert_eq!(mock.calls(), 1);
    }

    #[test]
    fn mock_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockTransport>();
    }
}
