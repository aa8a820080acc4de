//! Gateway API - Types, errors, and service contract

mod builder;
mod error;
mod types;

use async_trait::async_trait;

// Re-export types
pub use types::{ChatReply, ChatRequest, ChatTurn, Role};

// Re-export errors
pub use error::{GatewayError, GatewayResult};

// Re-export builder
pub use builder::ChatRequestBuilder;

/// Main chat service interface
///
/// One canonical request in, one canonical reply out. Implementations own
/// the translation to and from the provider's wire format; callers never
/// see provider JSON.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Exchange one chat request for one reply
    async fn chat(&self, request: ChatRequest) -> GatewayResult<ChatReply>;

    /// List the model identifiers this service can resolve
    fn models(&self) -> Vec<String>;

    /// Check if a model identifier or alias is usable
    fn supports(&self, model: &str) -> bool;
}
