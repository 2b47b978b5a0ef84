use serde::{Deserialize, Serialize};

use crate::error::FailureKind;

/// Events emitted by the chat session.
/// The UI drains these each frame to update its projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavigatorEvent {
    /// A submission was accepted and the remote call is about to start
    TurnStart { turn_id: u64 },

    /// The user's turn was appended to the conversation
    UserTurn { text: String },

    /// The assistant's turn was appended (a classified failure is still a turn)
    ReplyComplete {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        failure: Option<FailureKind>,
    },

    /// The session is idle again
    TurnEnd { turn_id: u64 },

    /// The in-flight call was dropped before a reply arrived; the user turn
    /// was taken back out of the conversation and the session is idle
    TurnAbandoned { turn_id: u64 },

    /// The conversation was cleared back to its greeting
    ConversationReset { greeting: String },
}
