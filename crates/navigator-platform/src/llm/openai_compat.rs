//! OpenAI-compatible chat-completion adapter.
//!
//! Works with OpenAI, DeepSeek, and any provider speaking the
//! chat completions API. Uses browser `fetch()` via gloo-net.
//! No streaming, no retry, no client-side timeout.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use navigator_core::ports::*;
use navigator_types::{config::LlmConfig, CompletionError};

pub struct OpenAiCompatProvider {
    api_key: String,
    base_url: String,
}

impl OpenAiCompatProvider {
    pub fn new(config: &LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// JSON body for a chat completion call.
pub fn build_request_body(req: &ChatRequest) -> Value {
    let mut body = json!({
        "model": req.model,
        "messages": req.messages,
        "max_tokens": req.max_tokens,
        "temperature": req.temperature,
    });

    if let Some(p) = req.presence_penalty {
        body["presence_penalty"] = json!(p);
    }
    if let Some(f) = req.frequency_penalty {
        body["frequency_penalty"] = json!(f);
    }

    body
}

/// Pull the reply out of a successful response body.
pub fn parse_response_body(body: &str) -> CompletionResult {
    let data: ApiResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::Other(format!("Invalid response: {}", e)))?;

    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Other("No choices in response".to_string()))?;

    let usage = data.usage.map(|u| TokenUsage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(ChatResponse {
        text: choice.message.content.unwrap_or_default(),
        usage,
    })
}

/// Classify a finished HTTP exchange. A failing status wins over a body that
/// could not be read, so a 429 stays a rate limit.
pub fn read_body(
    status: u16,
    ok: bool,
    body: std::result::Result<String, String>,
) -> std::result::Result<String, CompletionError> {
    match (ok, body) {
        (true, Ok(text)) => Ok(text),
        (true, Err(e)) => Err(CompletionError::Other(format!(
            "Failed to read response: {}",
            e
        ))),
        (false, Ok(text)) => Err(CompletionError::from_http(status, &text)),
        (false, Err(e)) => {
            log::debug!("Unreadable body on HTTP {}: {}", status, e);
            Err(CompletionError::from_http(status, ""))
        }
    }
}

#[async_trait(?Send)]
impl CompletionPort for OpenAiCompatProvider {
    async fn chat_completion(&self, req: ChatRequest) -> CompletionResult {
        let body = build_request_body(&req);

        let response = Request::post(&self.endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .json(&body)
            .map_err(|e| CompletionError::Other(e.to_string()))?
            .send()
            .await
            .map_err(|e| CompletionError::Other(format!("Network error: {}", e)))?;

        let status = response.status();
        let ok = response.ok();
        let body = response.text().await;
        let text = read_body(status, ok, body.map_err(|e| e.to_string()))?;

        let reply = parse_response_body(&text)?;
        if let Some(usage) = &reply.usage {
            log::debug!(
                "Completion used {} prompt + {} reply tokens",
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }
        Ok(reply)
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
