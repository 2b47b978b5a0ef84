//! Conversation store — the ordered list of turns owned by one chat session.
//!
//! The first turn is always the assistant greeting. The store lives only as
//! long as the session that owns it; nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::message::Turn;
use crate::{NavigatorError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    id: String,
    started_at: String,
    greeting: String,
    turns: Vec<Turn>,
}

impl Conversation {
    /// Start a conversation seeded with a single assistant greeting turn.
    pub fn new(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            turns: vec![Turn::assistant(greeting.clone())],
            greeting,
        }
    }

    /// Add a turn to the end. Blank content is rejected.
    pub fn append(&mut self, turn: Turn) -> Result<()> {
        if turn.content().trim().is_empty() {
            return Err(NavigatorError::EmptyTurn);
        }
        self.turns.push(turn);
        Ok(())
    }

    /// Remove and return the newest turn. The greeting is never removed.
    pub fn retract_last(&mut self) -> Option<Turn> {
        if self.turns.len() <= 1 {
            return None;
        }
        self.turns.pop()
    }

    /// Replace everything with a fresh greeting turn. Not reversible.
    pub fn reset(&mut self) {
        self.turns = vec![Turn::assistant(self.greeting.clone())];
        self.id = uuid::Uuid::new_v4().to_string();
        self.started_at = chrono::Utc::now().to_rfc3339();
    }

    /// The last `n` turns (fewer if the conversation is shorter), oldest first.
    pub fn recent(&self, n: usize) -> &[Turn] {
        trailing(&self.turns, n)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns after the seed greeting.
    pub fn history(&self) -> &[Turn] {
        self.turns.get(1..).unwrap_or(&[])
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }
}

/// The last `n` of `turns`, oldest first. Shared by [`Conversation::recent`]
/// and prompt assembly, which works on the greeting-free `history()` slice.
pub fn trailing(turns: &[Turn], n: usize) -> &[Turn] {
    &turns[turns.len().saturating_sub(n)..]
}
