use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Canonical lower-cased wire name.
    ///
    /// This is what the payload translator writes at the configured role
    /// path. Providers that expect a different vocabulary ("model" instead
    /// of "assistant") remap on their side of the wire, not here.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One conversation turn: who said what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

impl ChatTurn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Provider-agnostic chat request.
///
/// Immutable once constructed; the gateway translates it into whatever wire
/// shape the resolved model's mapping configuration describes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier or configured alias.
    pub model: String,
    /// Optional system instruction, emitted only when the model's mapping
    /// has a system-prompt path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Ordered conversation turns, oldest first.
    pub turns: Vec<ChatTurn>,
    /// Sampling temperature, passed through as-is. Clamping to a provider's
    /// accepted range is the provider's concern.
    pub temperature: f64,
}

/// Provider-agnostic chat reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The answer text extracted at the response-content path.
    pub text: String,
    /// Canonical identifier of the model that produced it.
    pub model: String,
}
