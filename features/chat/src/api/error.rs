use thiserror::Error;

use llm_gateway::GatewayError;

/// Chat-layer errors
#[derive(Debug, Error)]
pub enum ChatError {
    /// The user submitted an empty or whitespace-only message
    #[error("empty message")]
    EmptyMessage,

    /// Anything the gateway reported, passed through unchanged
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ChatError {
    /// Check if a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ChatError::EmptyMessage => false,
            ChatError::Gateway(err) => err.is_retryable(),
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
