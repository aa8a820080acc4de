//! Fluent builder for chat requests

use super::{ChatReply, ChatRequest, ChatService, ChatTurn, GatewayResult, Role};

/// Builder for constructing chat requests with a fluent API
///
/// # Example
/// ```ignore
/// let reply = ChatRequestBuilder::new("gemini-flash")
///     .system("Be terse.")
///     .user("Hi")
///     .temperature(0.3)
///     .execute(&client)
///     .await?;
/// ```
pub struct ChatRequestBuilder {
    request: ChatRequest,
}

impl ChatRequestBuilder {
    /// Create a new builder for the specified model or alias
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            request: ChatRequest {
                model: model.into(),
                system: None,
                turns: Vec::new(),
                temperature: 1.0,
            },
        }
    }

    /// Set the system instruction
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.request.system = Some(content.into());
        self
    }

    /// Add a user turn
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.request.turns.push(ChatTurn::user(content));
        self
    }

    /// Add an assistant turn
    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        self.request.turns.push(ChatTurn::assistant(content));
        self
    }

    /// Add a custom turn
    pub fn turn(mut self, role: Role, content: impl Into<String>) -> Self {
        self.request.turns.push(ChatTurn {
            role,
            text: content.into(),
        });
        self
    }

    /// Set all turns at once
    pub fn turns(mut self, turns: Vec<ChatTurn>) -> Self {
        self.request.turns = turns;
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.request.temperature = temperature;
        self
    }

    /// Build the chat request
    pub fn build(self) -> ChatRequest {
        self.request
    }

    /// Build and execute the request with the provided service
    pub async fn execute<S: ChatService + ?Sized>(self, service: &S) -> GatewayResult<ChatReply> {
        service.chat(self.request).await
    }
}
