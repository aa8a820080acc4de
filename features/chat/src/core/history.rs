/// Conversation history ring buffer for chat context.
use llm_gateway::ChatTurn;

/// A fixed-capacity buffer that stores conversation turns in order.
///
/// When full, the oldest turn is discarded to make room for new ones. The
/// system instruction is not stored here; it travels separately on the
/// canonical request.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: Vec<ChatTurn>,
    capacity: usize,
}

impl ConversationHistory {
    /// Create a new history with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            turns: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a turn, evicting the oldest one when the buffer is full.
    pub fn push(&mut self, turn: ChatTurn) {
        if self.turns.len() >= self.capacity && !self.turns.is_empty() {
            self.turns.remove(0);
        }
        self.turns.push(turn);
    }

    /// Remove and return the newest turn.
    pub fn pop(&mut self) -> Option<ChatTurn> {
        self.turns.pop()
    }

    /// All turns in order, oldest first (for sending to the gateway).
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Number of stored turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if no turns are stored.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
