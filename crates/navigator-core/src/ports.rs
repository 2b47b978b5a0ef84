//! Port traits — the boundary between the core and the browser.
//!
//! Implementations live in `navigator-platform`.
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use navigator_types::{message::Message, CompletionError, Result};

// ─── Completion Port ─────────────────────────────────────────

/// Request to send to a chat-completion endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

/// Successful reply from the endpoint
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

pub type CompletionResult = std::result::Result<ChatResponse, CompletionError>;

#[async_trait(?Send)]
pub trait CompletionPort {
    /// Non-streaming chat completion. Failures come back classified, never as panics.
    async fn chat_completion(&self, req: ChatRequest) -> CompletionResult;
}

// ─── Secret Port ─────────────────────────────────────────────

pub trait SecretPort {
    /// Look up a secret by name. `Ok(None)` means it is not configured.
    fn get_secret(&self, name: &str) -> Result<Option<String>>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
