/// Conversational session logic.
///
/// A session owns the conversation memory and the request defaults; the
/// wire exchange itself is delegated to a [`ChatService`].
use std::sync::Arc;

use tracing::debug;

use crate::api::{ChatError, ChatRequest, ChatResult, ChatService, ChatTurn};

use super::history::ConversationHistory;

/// Default number of turns kept as context.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Default sampling temperature when the caller sets none.
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// One ongoing conversation against one model.
///
/// Appends the user turn to history, picks the effective system prompt,
/// delegates the exchange, and records the assistant reply on success. A
/// failed exchange leaves history as it was before the call, so the caller
/// can simply retry.
pub struct ChatSession {
    service: Arc<dyn ChatService>,
    model: String,
    system: Option<String>,
    temperature: f64,
    history: ConversationHistory,
}

impl ChatSession {
    /// Create a session for `model` (an identifier or configured alias).
    pub fn new(service: Arc<dyn ChatService>, model: impl Into<String>) -> Self {
        Self {
            service,
            model: model.into(),
            system: None,
            temperature: DEFAULT_TEMPERATURE,
            history: ConversationHistory::new(DEFAULT_HISTORY_CAPACITY),
        }
    }

    /// Set the session system prompt.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set how many turns are kept as context.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = ConversationHistory::new(capacity);
        self
    }

    /// Send one user message and return the assistant's reply.
    ///
    /// `system` overrides the session system prompt for this exchange only.
    ///
    /// # Errors
    ///
    /// Rejects empty messages; everything else is whatever the gateway
    /// reported, unchanged.
    pub async fn send(&mut self, text: &str) -> ChatResult<String> {
        self.send_with_system(text, None).await
    }

    /// Send one user message with an explicit system prompt override.
    ///
    /// # Errors
    ///
    /// Same contract as [`send`](Self::send).
    pub async fn send_with_system(
        &mut self,
        text: &str,
        system: Option<&str>,
    ) -> ChatResult<String> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.history.push(ChatTurn::user(text));
        let request = ChatRequest {
            model: self.model.clone(),
            system: system.map(str::to_string).or_else(|| self.system.clone()),
            turns: self.history.turns().to_vec(),
            temperature: self.temperature,
        };

        debug!(model = %self.model, turns = request.turns.len(), "sending chat turn");
        match self.service.chat(request).await {
            Ok(reply) => {
                self.history.push(ChatTurn::assistant(&reply.text));
                Ok(reply.text)
            }
            Err(err) => {
                // Roll the user turn back so a retry does not duplicate it.
                self.history.pop();
                Err(err.into())
            }
        }
    }

    /// The conversation so far, oldest turn first.
    pub fn history(&self) -> &[ChatTurn] {
        self.history.turns()
    }

    /// Forget the conversation, keeping model and defaults.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
