//! Environment variable names for gateway setup
//!
//! Per-model credentials are not listed here: each model record names its
//! own key variable via `api_key_env`, so adding a provider is a config
//! edit, not a code change.

/// Path to the gateway YAML configuration file
pub const GATEWAY_CONFIG: &str = "LLM_GATEWAY_CONFIG";

/// Default model or alias when a request leaves the model blank
pub const GATEWAY_MODEL: &str = "LLM_GATEWAY_MODEL";

/// Request timeout in milliseconds
pub const GATEWAY_TIMEOUT_MS: &str = "LLM_GATEWAY_TIMEOUT_MS";

/// All gateway configuration keys
pub const CONFIG_KEYS: &[&str] = &[GATEWAY_CONFIG, GATEWAY_MODEL, GATEWAY_TIMEOUT_MS];
