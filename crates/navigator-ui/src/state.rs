//! UI-level state that drives rendering.
//! A read-only projection of the chat session, updated each frame by
//! draining the EventBus.

use navigator_core::session::SessionState;
use navigator_types::{event::NavigatorEvent, message::Role, message::Turn, topic::QuickTopic};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_THINKING: &str = "🏴‍☠️ Luffy is thinking...";

/// State visible to UI panels
pub struct UiState {
    /// Displayed turns, oldest first
    pub messages: Vec<ChatEntry>,
    pub session_state: SessionState,
    /// Input field content
    pub input_text: String,
    pub status_text: String,
}

/// A chat entry for display
#[derive(Debug, Clone, PartialEq)]
pub struct ChatEntry {
    pub role: Role,
    pub content: String,
    /// The assistant turn carries a classified failure message
    pub failed: bool,
}

/// Something the student asked for this frame
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Submit(String),
    Topic(QuickTopic),
    Clear,
}

impl UiState {
    /// Start from a snapshot of the conversation's turns.
    pub fn new(turns: &[Turn]) -> Self {
        Self {
            messages: turns.iter().map(ChatEntry::from).collect(),
            session_state: SessionState::Idle,
            input_text: String::new(),
            status_text: STATUS_READY.to_string(),
        }
    }

    pub fn process_events(&mut self, events: Vec<NavigatorEvent>) {
        for event in events {
            match event {
                NavigatorEvent::TurnStart { .. } => {
                    self.session_state = SessionState::AwaitingResponse;
                    self.status_text = STATUS_THINKING.to_string();
                }
                NavigatorEvent::UserTurn { text } => {
                    self.messages.push(ChatEntry {
                        role: Role::User,
                        content: text,
                        failed: false,
                    });
                }
                NavigatorEvent::ReplyComplete { text, failure } => {
                    self.messages.push(ChatEntry {
                        role: Role::Assistant,
                        content: text,
                        failed: failure.is_some(),
                    });
                }
                NavigatorEvent::TurnEnd { .. } => {
                    self.session_state = SessionState::Idle;
                    self.status_text = STATUS_READY.to_string();
                }
                NavigatorEvent::TurnAbandoned { .. } => {
                    if self.messages.last().is_some_and(|m| m.role == Role::User) {
                        self.messages.pop();
                    }
                    self.session_state = SessionState::Idle;
                    self.status_text = STATUS_READY.to_string();
                }
                NavigatorEvent::ConversationReset { greeting } => {
                    log::debug!("Clearing {} displayed turns", self.messages.len());
                    self.messages = vec![ChatEntry::from(&Turn::assistant(greeting))];
                    self.session_state = SessionState::Idle;
                    self.status_text = STATUS_READY.to_string();
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.session_state == SessionState::AwaitingResponse
    }

    /// Take the trimmed input for submission, if there is any and we are idle.
    pub fn take_input(&mut self) -> Option<String> {
        let text = self.input_text.trim();
        if text.is_empty() || self.is_busy() {
            return None;
        }
        let text = text.to_string();
        self.input_text.clear();
        Some(text)
    }
}

impl From<&Turn> for ChatEntry {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role(),
            content: turn.content().to_string(),
            failed: false,
        }
    }
}
