//! Configuration-driven provider setup
//!
//! Provider wire formats are described by data, not code. A config file
//! declares, per model, where each canonical field lives inside the
//! provider's JSON; switching providers is a config edit.
//!
//! # Example Configuration (YAML)
//!
//! ```yaml
//! default_model: gemini-1.5-flash
//! timeout_ms: 60000
//!
//! aliases:
//!   flash: gemini-1.5-flash
//!
//! models:
//!   gemini-1.5-flash:
//!     base_url: https://generativelanguage.googleapis.com/v1beta
//!     endpoint_suffix: "/models/{model}:generateContent"
//!     auth_header: x-goog-api-key
//!     auth_value_template: "${api_key}"
//!     api_key_env: GEMINI_API_KEY
//!     system_prompt_path: systemInstruction.parts[0].text
//!     messages_path: contents
//!     role_path: role
//!     content_path: parts[0].text
//!     temperature_path: generationConfig.temperature
//!     response_content_path: candidates[0].content.parts[0].text
//!     response_error_path: error.message
//!
//!   gpt-4o:
//!     base_url: https://api.openai.com/v1
//!     endpoint_suffix: /chat/completions
//!     auth_header: authorization
//!     auth_value_template: "Bearer ${api_key}"
//!     api_key_env: OPENAI_API_KEY
//!     messages_path: messages
//!     role_path: role
//!     content_path: content
//!     temperature_path: temperature
//!     model_path: model
//!     response_content_path: choices[0].message.content
//!     response_error_path: error.message
//! ```

pub mod keys;
mod model;

pub use model::{ModelSpec, API_KEY_PLACEHOLDER, MODEL_PLACEHOLDER};

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::{GatewayError, GatewayResult};

fn default_timeout() -> u64 {
    60_000
}

/// Gateway configuration: model registry plus request defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Model used when a request leaves the model blank
    #[serde(default)]
    pub default_model: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Mapping records keyed by canonical model identifier
    pub models: HashMap<String, ModelSpec>,

    /// Human aliases resolving to canonical model identifiers
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl GatewayConfig {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> GatewayResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GatewayError::Configuration(format!(
                "cannot read config file {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> GatewayResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| GatewayError::Configuration(format!("invalid config: {e}")))
    }

    /// Load configuration from the path named by `LLM_GATEWAY_CONFIG`,
    /// applying `LLM_GATEWAY_MODEL` and `LLM_GATEWAY_TIMEOUT_MS` overrides
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the variable is unset or the file
    /// is unusable.
    pub fn from_env() -> GatewayResult<Self> {
        let path = std::env::var(keys::GATEWAY_CONFIG).map_err(|_| {
            GatewayError::Configuration(format!(
                "config file not specified. Set {} environment variable",
                keys::GATEWAY_CONFIG
            ))
        })?;
        let mut config = Self::load(path)?;
        if let Ok(model) = std::env::var(keys::GATEWAY_MODEL) {
            config.default_model = Some(model);
        }
        if let Ok(timeout) = std::env::var(keys::GATEWAY_TIMEOUT_MS) {
            config.timeout_ms = timeout.parse().map_err(|_| {
                GatewayError::Configuration(format!(
                    "{} must be an integer, got '{timeout}'",
                    keys::GATEWAY_TIMEOUT_MS
                ))
            })?;
        }
        Ok(config)
    }

    /// Resolve a model identifier or alias to its canonical id and validated spec
    ///
    /// A blank name falls back to `default_model`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown name, a blank name with
    /// no default, or a spec that fails validation.
    pub fn resolve(&self, name: &str) -> GatewayResult<(String, &ModelSpec)> {
        let name = if name.is_empty() {
            self.default_model.as_deref().ok_or_else(|| {
                GatewayError::Configuration(
                    "no model requested and no default_model configured".to_string(),
                )
            })?
        } else {
            name
        };
        let canonical = self.aliases.get(name).map_or(name, String::as_str);
        let spec = self.models.get(canonical).ok_or_else(|| {
            GatewayError::Configuration(format!("unknown model '{name}'"))
        })?;
        spec.validate()?;
        Ok((canonical.to_string(), spec))
    }

    /// All usable names: canonical identifiers plus aliases
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .models
            .keys()
            .chain(self.aliases.keys())
            .cloned()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const MINIMAL_YAML: &str = r#"
models:
  test-model:
    base_url: https://example.test
    endpoint_suffix: /chat
    messages_path: messages
    role_path: role
    content_path: content
    temperature_path: temperature
    response_content_path: output.text
aliases:
  fast: test-model
"#;

    #[test]
    fn from_yaml_parses_minimal_config() {
        let config = GatewayConfig::from_yaml(MINIMAL_YAML).unwrap();
        assert_eq!(config.timeout_ms, 60_000);
        assert!(config.default_model.is_none());
        assert!(config.models.contains_key("test-model"));
    }

    #[test]
    fn from_yaml_rejects_garbage() {
        assert!(GatewayConfig::from_yaml(": not yaml [").is_err());
    }

    #[test]
    fn resolve_follows_aliases() {
        let config = GatewayConfig::from_yaml(MINIMAL_YAML).unwrap();
        let (canonical, _) = config.resolve("fast").unwrap();
        assert_eq!(canonical, "test-model");
        let (direct, _) = config.resolve("test-model").unwrap();
        assert_eq!(direct, "test-model");
    }

    #[test]
    fn resolve_rejects_unknown_model() {
        let config = GatewayConfig::from_yaml(MINIMAL_YAML).unwrap();
        let err = config.resolve("nope").unwrap_err();
        assert!(err.to_string().contains("unknown model"));
    }

    #[test]
    fn resolve_blank_requires_default() {
        let mut config = GatewayConfig::from_yaml(MINIMAL_YAML).unwrap();
        assert!(config.resolve("").is_err());
        config.default_model = Some("fast".to_string());
        let (canonical, _) = config.resolve("").unwrap();
        assert_eq!(canonical, "test-model");
    }

    #[test]
    fn resolve_validates_spec() {
        let mut config = GatewayConfig::from_yaml(MINIMAL_YAML).unwrap();
        if let Some(spec) = config.models.get_mut("test-model") {
            spec.temperature_path = String::new();
        }
        let err = config.resolve("test-model").unwrap_err();
        assert!(err.to_string().contains("temperature_path"));
    }

    #[test]
    fn model_names_includes_aliases() {
        let config = GatewayConfig::from_yaml(MINIMAL_YAML).unwrap();
        let names = config.model_names();
        assert!(names.contains(&"test-model".to_string()));
        assert!(names.contains(&"fast".to_string()));
    }

    #[test]
    #[serial]
    fn from_env_requires_config_var() {
        std::env::remove_var(keys::GATEWAY_CONFIG);
        let err = GatewayConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(keys::GATEWAY_CONFIG));
    }
}
