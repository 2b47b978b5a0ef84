//! Chat session — owns one conversation and runs the
//! idle → awaiting-response → idle cycle for each submission.

use navigator_types::{
    config::NavigatorConfig,
    conversation::Conversation,
    event::NavigatorEvent,
    message::Turn,
    topic::QuickTopic,
    NavigatorError, Result,
};

use crate::event_bus::EventBus;
use crate::generator::{Reply, ResponseGenerator};
use crate::ports::CompletionPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

pub struct ChatSession {
    conversation: Conversation,
    generator: ResponseGenerator,
    event_bus: EventBus,
    state: SessionState,
    turn_counter: u64,
}

impl ChatSession {
    pub fn new(config: &NavigatorConfig, event_bus: EventBus) -> Self {
        Self {
            conversation: Conversation::new(config.greeting.clone()),
            generator: ResponseGenerator::new(config),
            event_bus,
            state: SessionState::Idle,
            turn_counter: 0,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SessionState::AwaitingResponse
    }

    /// Handle one student submission to completion.
    ///
    /// The reply is appended as the assistant's turn even when the remote call
    /// failed; only a blank input or a submission while busy is an error.
    /// Dropping the returned future before it resolves takes the user turn
    /// back out and leaves the session idle.
    pub async fn submit(&mut self, text: &str, llm: &dyn CompletionPort) -> Result<Reply> {
        if self.is_busy() {
            return Err(NavigatorError::Busy);
        }
        let text = text.trim();
        self.conversation.append(Turn::user(text))?;

        self.turn_counter += 1;
        let turn = InFlight::begin(self, text);

        let reply = {
            let session = &*turn.session;
            let history = session.conversation.history();
            let prior = &history[..history.len() - 1];
            session.generator.generate(text, prior, llm).await
        };

        turn.settle(reply)
    }

    /// Same as typing the topic's sentence and submitting it.
    pub async fn submit_topic(
        &mut self,
        topic: QuickTopic,
        llm: &dyn CompletionPort,
    ) -> Result<Reply> {
        self.submit(topic.prompt(), llm).await
    }

    /// Start over with only the greeting.
    pub fn clear(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(NavigatorError::Busy);
        }
        self.conversation.reset();
        self.turn_counter = 0;
        log::info!("Conversation reset ({})", self.conversation.id());
        self.event_bus.emit(NavigatorEvent::ConversationReset {
            greeting: self.conversation.greeting().to_string(),
        });
        Ok(())
    }
}

/// One accepted submission waiting on the remote call.
///
/// Holds the session in `AwaitingResponse` until settled; if dropped first,
/// the dangling user turn is retracted and the session goes back to idle.
struct InFlight<'a> {
    session: &'a mut ChatSession,
    turn_id: u64,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn begin(session: &'a mut ChatSession, text: &str) -> Self {
        let turn_id = session.turn_counter;
        session.state = SessionState::AwaitingResponse;
        session.event_bus.emit(NavigatorEvent::TurnStart { turn_id });
        session.event_bus.emit(NavigatorEvent::UserTurn {
            text: text.to_string(),
        });
        Self {
            session,
            turn_id,
            settled: false,
        }
    }

    fn settle(mut self, reply: Reply) -> Result<Reply> {
        self.settled = true;
        let session = &mut *self.session;
        session.state = SessionState::Idle;
        session
            .conversation
            .append(Turn::assistant(reply.text.clone()))?;

        session.event_bus.emit(NavigatorEvent::ReplyComplete {
            text: reply.text.clone(),
            failure: reply.failure,
        });
        session.event_bus.emit(NavigatorEvent::TurnEnd {
            turn_id: self.turn_id,
        });
        Ok(reply)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let session = &mut *self.session;
        session.conversation.retract_last();
        session.state = SessionState::Idle;
        log::warn!("Turn {} abandoned before a reply arrived", self.turn_id);
        session.event_bus.emit(NavigatorEvent::TurnAbandoned {
            turn_id: self.turn_id,
        });
    }
}
