//! Canonical request/response translation driven by field paths
//!
//! The two operations here are the gateway's entire provider surface:
//! [`build_request_body`] assembles the outbound JSON from a mapping
//! record, and [`extract_result`] pulls the canonical answer (or a
//! diagnostic) back out of the inbound JSON. No provider is special-cased;
//! provider behavior is entirely data.

use serde_json::{Map, Value};
use tracing::debug;

use crate::api::{ChatRequest, GatewayError, GatewayResult};
use crate::config::ModelSpec;

use super::read::{read, scalar_text};
use super::write::write;

/// Assemble the outbound JSON body for `request` according to `spec`.
///
/// # Errors
///
/// Returns a configuration error when a required path is blank; validation
/// runs before any tree construction, so a bad mapping never reaches the
/// network.
pub fn build_request_body(spec: &ModelSpec, request: &ChatRequest) -> GatewayResult<String> {
    spec.validate()?;

    let mut root = Value::Object(Map::new());

    if !spec.system_prompt_path.is_empty() {
        if let Some(system) = &request.system {
            write(
                &mut root,
                &spec.system_prompt_path,
                Value::String(system.clone()),
            );
        }
    }

    if !spec.model_path.is_empty() {
        write(&mut root, &spec.model_path, Value::String(request.model.clone()));
    }

    write(&mut root, &spec.temperature_path, Value::from(request.temperature));

    let mut turns = Vec::with_capacity(request.turns.len());
    for turn in &request.turns {
        let mut entry = Value::Object(Map::new());
        write(
            &mut entry,
            &spec.role_path,
            Value::String(turn.role.as_str().to_string()),
        );
        write(&mut entry, &spec.content_path, Value::String(turn.text.clone()));
        turns.push(entry);
    }
    write(&mut root, &spec.messages_path, Value::Array(turns));

    serde_json::to_string(&root)
        .map_err(|e| GatewayError::Configuration(format!("cannot encode request body: {e}")))
}

/// Pull the canonical answer text out of a provider response.
///
/// # Errors
///
/// - non-success `status`: a provider error carrying the status and the
///   text at the error path, or the raw body when that path is absent or
///   does not resolve to a scalar.
/// - success `status`, invalid JSON body: a parse error carrying the body.
/// - success `status`, content path unresolvable or non-scalar: a
///   configuration error — the mapping is wrong, not the provider.
pub fn extract_result(spec: &ModelSpec, status: u16, body: &str) -> GatewayResult<String> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::Provider {
            status,
            message: provider_message(spec, body),
        });
    }

    let root: Value = serde_json::from_str(body).map_err(|e| GatewayError::Parse {
        message: e.to_string(),
        body: body.to_string(),
    })?;

    read(&root, &spec.response_content_path)
        .and_then(scalar_text)
        .ok_or_else(|| {
            GatewayError::Configuration(format!(
                "response content path '{}' did not resolve to a text value",
                spec.response_content_path
            ))
        })
}

/// Best-effort diagnostic for a failure status: the configured error path
/// when it resolves to text, otherwise the raw body.
fn provider_message(spec: &ModelSpec, body: &str) -> String {
    if !spec.response_error_path.is_empty() {
        if let Ok(root) = serde_json::from_str::<Value>(body) {
            if let Some(text) = read(&root, &spec.response_error_path).and_then(scalar_text) {
                return text;
            }
        }
        debug!(
            path = %spec.response_error_path,
            "error path did not resolve, falling back to raw body"
        );
    }
    body.to_string()
}
