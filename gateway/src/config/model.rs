use serde::{Deserialize, Serialize};

use crate::api::{GatewayError, GatewayResult};

/// Literal placeholder in `auth_value_template` replaced by the credential
pub const API_KEY_PLACEHOLDER: &str = "${api_key}";

/// Literal placeholder in `endpoint_suffix` replaced by the model identifier
pub const MODEL_PLACEHOLDER: &str = "{model}";

/// Wire-mapping record for one logical model
///
/// Everything the gateway needs to talk to a provider lives in this record;
/// the code has no per-provider branches. Paths use dotted segments with
/// optional array-index suffixes, e.g. `candidates[0].content.parts[0].text`.
///
/// Optional fields default to blank, meaning "do not emit this field" for
/// request paths and "fall back to the raw body" for `response_error_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Provider endpoint base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    pub base_url: String,

    /// Appended to `base_url`; may contain `{model}`, substituted at URL
    /// assembly for providers that address the model in the path
    #[serde(default)]
    pub endpoint_suffix: String,

    /// Header carrying the credential, e.g. `authorization` or `x-api-key`.
    /// Blank means the request is sent unauthenticated.
    #[serde(default)]
    pub auth_header: String,

    /// Header value with a literal `${api_key}` placeholder,
    /// e.g. `Bearer ${api_key}`
    #[serde(default)]
    pub auth_value_template: String,

    /// Environment variable holding the credential
    #[serde(default)]
    pub api_key_env: String,

    /// Where the system instruction goes; blank = provider takes none
    #[serde(default)]
    pub system_prompt_path: String,

    /// Where the conversation turn array goes
    pub messages_path: String,

    /// Role location inside one turn object
    pub role_path: String,

    /// Text location inside one turn object
    pub content_path: String,

    /// Where the sampling temperature goes
    pub temperature_path: String,

    /// Where the model identifier goes in the body; blank for providers
    /// that take the model in the URL instead
    #[serde(default)]
    pub model_path: String,

    /// Where the answer text lives in a success response
    pub response_content_path: String,

    /// Where the diagnostic message lives in an error response; blank =
    /// use the raw body
    #[serde(default)]
    pub response_error_path: String,
}

impl ModelSpec {
    /// Check that every required field is present
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first blank required field.
    /// Surfaced before any network call.
    pub fn validate(&self) -> GatewayResult<()> {
        let required = [
            ("base_url", &self.base_url),
            ("messages_path", &self.messages_path),
            ("role_path", &self.role_path),
            ("content_path", &self.content_path),
            ("temperature_path", &self.temperature_path),
            ("response_content_path", &self.response_content_path),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(GatewayError::Configuration(format!(
                    "model spec field '{field}' must not be blank"
                )));
            }
        }
        Ok(())
    }

    /// Full request URL for `model`
    pub fn url(&self, model: &str) -> String {
        let suffix = self.endpoint_suffix.replace(MODEL_PLACEHOLDER, model);
        format!("{}{}", self.base_url, suffix)
    }

    /// Render the auth header value with `credential` substituted
    pub fn auth_value(&self, credential: &str) -> String {
        self.auth_value_template
            .replace(API_KEY_PLACEHOLDER, credential)
    }

    /// Resolve the credential from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `api_key_env` is blank or the
    /// variable is unset.
    pub fn resolve_api_key(&self) -> GatewayResult<String> {
        if self.api_key_env.is_empty() {
            return Err(GatewayError::Configuration(
                "auth_header is set but api_key_env is blank".to_string(),
            ));
        }
        std::env::var(&self.api_key_env).map_err(|_| {
            GatewayError::Configuration(format!(
                "API key not found. Set {} environment variable",
                self.api_key_env
            ))
        })
    }
}
