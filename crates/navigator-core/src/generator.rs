//! Response generator — turns the latest user text plus prior turns into a
//! bounded chat-completion request and always comes back with displayable text.
//!
//! Failures are classified and rendered as a warning string; nothing is retried.

use navigator_types::{
    config::{LlmConfig, NavigatorConfig},
    conversation::trailing,
    message::{Message, Turn},
    CompletionError, FailureKind,
};

use crate::ports::{ChatRequest, CompletionPort};

/// Prefix of every failure reply
pub const WARNING_MARKER: &str = "🚨";

/// Longest excerpt of an underlying failure shown to the student
pub const MAX_DETAIL_CHARS: usize = 100;

/// Text to show as the assistant's turn, plus how it failed (if it did)
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub failure: Option<FailureKind>,
}

impl Reply {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

pub struct ResponseGenerator {
    persona: String,
    llm: LlmConfig,
    window: usize,
}

impl ResponseGenerator {
    pub fn new(config: &NavigatorConfig) -> Self {
        Self {
            persona: config.persona.clone(),
            llm: config.llm.clone(),
            window: config.history_window,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// System persona first, then the trailing window of `history`, then the
    /// latest user text. `history` excludes the greeting and the latest turn.
    pub fn build_request(&self, latest_user_text: &str, history: &[Turn]) -> ChatRequest {
        let window = trailing(history, self.window);
        let mut messages = Vec::with_capacity(window.len() + 2);
        messages.push(Message::system(&self.persona));
        messages.extend(window.iter().map(Message::from));
        messages.push(Message::user(latest_user_text));

        ChatRequest {
            messages,
            model: self.llm.model.clone(),
            max_tokens: self.llm.max_tokens,
            temperature: self.llm.temperature,
            presence_penalty: self.llm.presence_penalty,
            frequency_penalty: self.llm.frequency_penalty,
        }
    }

    pub async fn generate(
        &self,
        latest_user_text: &str,
        history: &[Turn],
        llm: &dyn CompletionPort,
    ) -> Reply {
        let req = self.build_request(latest_user_text, history);
        log::debug!(
            "Requesting completion: {} messages, model {}",
            req.messages.len(),
            req.model
        );

        let err = match llm.chat_completion(req).await {
            Ok(resp) => {
                let text = resp.text.trim();
                if !text.is_empty() {
                    return Reply {
                        text: text.to_string(),
                        failure: None,
                    };
                }
                CompletionError::Other("the model returned an empty reply".to_string())
            }
            Err(e) => e,
        };

        log::warn!("Completion failed ({:?}): {}", err.kind(), err);
        Reply {
            text: failure_message(&err),
            failure: Some(err.kind()),
        }
    }
}

/// User-facing text for a failed completion.
pub fn failure_message(err: &CompletionError) -> String {
    let detail = excerpt(err.detail());
    match err {
        CompletionError::RateLimited(_) => format!(
            "{} Whoa, the Grand Line is crowded right now! Too many requests reached \
             the navigator at once. Wait a few seconds and try again, nakama! ({})",
            WARNING_MARKER, detail
        ),
        CompletionError::Api { category, .. } => format!(
            "{} The navigation API hit a storm ({}): {}... Try again, nakama!",
            WARNING_MARKER, category, detail
        ),
        CompletionError::Other(_) => format!(
            "{} Adventure interrupted! Error: {}... Try again, nakama!",
            WARNING_MARKER, detail
        ),
    }
}

fn excerpt(detail: &str) -> String {
    detail.trim().chars().take(MAX_DETAIL_CHARS).collect()
}
