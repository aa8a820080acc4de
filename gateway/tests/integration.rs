//! Integration tests for llm-gateway
//!
//! Everything here goes through the public surface only: a config parsed
//! from YAML, a transport implemented the way a consumer would implement
//! one, and the `ChatService` contract on top.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use llm_gateway::{
    build_request_body, extract_result, ChatRequest, ChatRequestBuilder, ChatService, ChatTurn,
    GatewayConfig, GatewayError, GatewayResult, HttpChatClient, HttpResponse, HttpTransport,
};

const GEMINI_YAML: &str = r#"
default_model: gemini-1.5-flash
models:
  gemini-1.5-flash:
    base_url: https://generativelanguage.googleapis.com/v1beta
    endpoint_suffix: "/models/{model}:generateContent"
    system_prompt_path: systemInstruction.parts[0].text
    messages_path: contents
    role_path: role
    content_path: parts[0].text
    temperature_path: generationConfig.temperature
    response_content_path: candidates[0].content.parts[0].text
    response_error_path: error.message
aliases:
  flash: gemini-1.5-flash
"#;

/// Transport double scripted with one canned exchange.
#[derive(Debug)]
struct ScriptedTransport {
    status: u16,
    body: String,
    seen: Mutex<Vec<(String, String)>>,
}

impl ScriptedTransport {
    fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(
        &self,
        url: &str,
        _headers: &[(String, String)],
        body: String,
    ) -> GatewayResult<HttpResponse> {
        self.seen.lock().unwrap().push((url.to_string(), body));
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn gemini_config() -> GatewayConfig {
    GatewayConfig::from_yaml(GEMINI_YAML).unwrap()
}

fn spec_of(config: &GatewayConfig) -> &llm_gateway::ModelSpec {
    &config.models["gemini-1.5-flash"]
}

// ── Outbound mapping ─────────────────────────────────────────────────

#[test]
fn outbound_body_matches_gemini_wire_shape() {
    let config = gemini_config();
    let request = ChatRequest {
        model: "gemini-1.5-flash".to_string(),
        system: Some("Be terse.".to_string()),
        turns: vec![ChatTurn::user("Hi")],
        temperature: 0.3,
    };

    let body = build_request_body(spec_of(&config), &request).unwrap();
    let tree: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(tree["systemInstruction"]["parts"][0]["text"], "Be terse.");
    assert_eq!(tree["contents"][0]["role"], "user");
    assert_eq!(tree["contents"][0]["parts"][0]["text"], "Hi");
    assert_eq!(tree["generationConfig"]["temperature"], 0.3);
}

// ── Inbound mapping ──────────────────────────────────────────────────

#[test]
fn success_body_yields_answer_text() {
    let config = gemini_config();
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"Madrid"}]}}]}"#;
    let text = extract_result(spec_of(&config), 200, body).unwrap();
    assert_eq!(text, "Madrid");
}

#[test]
fn failure_status_yields_provider_error_with_extracted_message() {
    let config = gemini_config();
    let body = r#"{"error":{"message":"bad key"}}"#;
    match extract_result(spec_of(&config), 401, body).unwrap_err() {
        GatewayError::Provider { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad key");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[test]
fn non_json_success_body_yields_parse_error() {
    let config = gemini_config();
    match extract_result(spec_of(&config), 200, "not json").unwrap_err() {
        GatewayError::Parse { body, .. } => assert_eq!(body, "not json"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

// ── Full exchange through the client ─────────────────────────────────

#[tokio::test]
async fn full_exchange_resolves_alias_and_extracts_reply() {
    let transport = ScriptedTransport::new(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"Madrid"}]}}]}"#,
    );
    let client = HttpChatClient::new(gemini_config(), Arc::clone(&transport) as Arc<dyn HttpTransport>);

    let reply = ChatRequestBuilder::new("flash")
        .system("Be terse.")
        .user("Capital of Spain?")
        .temperature(0.3)
        .execute(&client)
        .await
        .unwrap();

    assert_eq!(reply.text, "Madrid");
    assert_eq!(reply.model, "gemini-1.5-flash");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].0,
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
    );

    let tree: Value = serde_json::from_str(&requests[0].1).unwrap();
    assert_eq!(tree["contents"][0]["parts"][0]["text"], "Capital of Spain?");
}

#[tokio::test]
async fn blank_model_uses_configured_default() {
    let transport = ScriptedTransport::new(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#,
    );
    let client = HttpChatClient::new(gemini_config(), Arc::clone(&transport) as Arc<dyn HttpTransport>);

    let reply = ChatRequestBuilder::new("").user("Hi").execute(&client).await.unwrap();
    assert_eq!(reply.model, "gemini-1.5-flash");
}

#[tokio::test]
async fn provider_error_round_trips_through_client() {
    let transport = ScriptedTransport::new(429, r#"{"error":{"message":"quota"}}"#);
    let client = HttpChatClient::new(gemini_config(), Arc::clone(&transport) as Arc<dyn HttpTransport>);

    let err = ChatRequestBuilder::new("flash")
        .user("Hi")
        .execute(&client)
        .await
        .unwrap_err();

    assert!(err.is_retryable());
    match err {
        GatewayError::Provider { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_content_path_points_at_configuration() {
    let mut config = gemini_config();
    if let Some(spec) = config.models.get_mut("gemini-1.5-flash") {
        spec.response_content_path = "candidates[0].wrong".to_string();
    }
    let transport = ScriptedTransport::new(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"Madrid"}]}}]}"#,
    );
    let client = HttpChatClient::new(config, Arc::clone(&transport) as Arc<dyn HttpTransport>);

    let err = ChatRequestBuilder::new("flash")
        .user("Hi")
        .execute(&client)
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Configuration(_)));
    assert!(!err.is_retryable());
}
