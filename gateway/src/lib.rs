//! LLM Gateway - Config-driven chat LLM client
//!
//! This crate provides a unified interface to chat-style LLM HTTP APIs.
//! Provider wire formats are described entirely by configuration: a small
//! path language (`candidates[0].content.parts[0].text`) tells the gateway
//! where each canonical field lives inside a provider's JSON, so adding or
//! changing a provider is a config edit, never a code change.
//!
//! # Configuration-Driven Design
//!
//! ```bash
//! export LLM_GATEWAY_CONFIG=gateway.yml
//! export GEMINI_API_KEY=...
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use llm_gateway::{create_client, ChatRequestBuilder, ChatService};
//!
//! let client = create_client()?;
//! let reply = ChatRequestBuilder::new("gemini-1.5-flash")
//!     .system("Be terse.")
//!     .user("Capital of Spain?")
//!     .temperature(0.3)
//!     .execute(&client)
//!     .await?;
//! ```

// =============================================================================
// Internal Modules
// =============================================================================

mod api;
mod config;
mod core;
mod spi;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// =============================================================================
// Public API - Types & Errors (from api/)
// =============================================================================

pub use api::{
    // Types
    ChatReply, ChatRequest, ChatTurn, Role,
    // Errors
    GatewayError, GatewayResult,
    // Service
    ChatRequestBuilder, ChatService,
};

// =============================================================================
// Public API - Configuration
// =============================================================================

pub use config::{keys, GatewayConfig, ModelSpec, API_KEY_PLACEHOLDER, MODEL_PLACEHOLDER};

// =============================================================================
// Public API - Transport SPI
// =============================================================================

pub use spi::{HttpResponse, HttpTransport, ReqwestTransport};

// =============================================================================
// Public API - Engine (from core/)
// =============================================================================

pub use core::{build_request_body, extract_result, HttpChatClient};

#[cfg(any(test, feature = "testing"))]
pub use testing::{MockTransport, SentRequest};

// =============================================================================
// Factory Functions
// =============================================================================

/// Create a client from the config file named by `LLM_GATEWAY_CONFIG`
///
/// # Errors
///
/// Returns a configuration error when the variable is unset or the file is
/// unusable, and a transport error when the HTTP client cannot be built.
///
/// # Example
/// ```no_run
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = llm_gateway::create_client()?;
/// # Ok(())
/// # }
/// ```
pub fn create_client() -> GatewayResult<HttpChatClient> {
    let config = GatewayConfig::from_env()?;
    tracing::debug!(models = config.models.len(), "creating gateway client");
    HttpChatClient::from_config(config)
}

/// Create a client from explicit configuration
///
/// Use this for programmatic configuration or when loading from a config
/// file yourself.
///
/// # Errors
///
/// Returns a transport error when the HTTP client cannot be built.
///
/// # Example
/// ```no_run
/// use llm_gateway::{create_client_from_config, GatewayConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GatewayConfig::load("gateway.yml")?;
/// let client = create_client_from_config(config)?;
/// # Ok(())
/// # }
/// ```
pub fn create_client_from_config(config: GatewayConfig) -> GatewayResult<HttpChatClient> {
    HttpChatClient::from_config(config)
}
