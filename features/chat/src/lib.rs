//! Conversation layer over `llm-gateway`
//!
//! The gateway maps one canonical request to one provider exchange; this
//! crate supplies what sits above it in an interactive program: a bounded
//! conversation memory and a session that threads each new user message
//! through that memory.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use llm_chat::ChatSession;
//!
//! let client = Arc::new(llm_gateway::create_client()?);
//! let mut session = ChatSession::new(client, "flash").with_system("Be terse.");
//! let reply = session.send("Capital of Spain?").await?;
//! ```

pub mod api;
mod core;

pub use api::{ChatError, ChatResult};
pub use core::{ChatSession, ConversationHistory, DEFAULT_HISTORY_CAPACITY, DEFAULT_TEMPERATURE};
