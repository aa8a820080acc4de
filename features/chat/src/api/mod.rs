//! Chat API - errors and re-exported gateway types

mod error;

pub use error::{ChatError, ChatResult};

// The conversation layer speaks the gateway's canonical vocabulary.
pub use llm_gateway::{ChatReply, ChatRequest, ChatService, ChatTurn, Role};
