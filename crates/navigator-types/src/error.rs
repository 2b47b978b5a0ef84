use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigatorError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Turn content is empty")]
    EmptyTurn,

    #[error("A reply is still pending")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl From<serde_json::Error> for NavigatorError {
    fn from(e: serde_json::Error) -> Self {
        NavigatorError::Serialization(e.to_string())
    }
}

/// Coarse classification of a failed completion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    RateLimited,
    Api,
    Other,
}

/// Failure reported by the remote chat-completion service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Throttled or out of quota
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The API answered with an error
    #[error("{category}: {detail}")]
    Api { category: String, detail: String },

    /// Network, timeout, or a response that could not be parsed
    #[error("{0}")]
    Other(String),
}

impl CompletionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CompletionError::RateLimited(_) => FailureKind::RateLimited,
            CompletionError::Api { .. } => FailureKind::Api,
            CompletionError::Other(_) => FailureKind::Other,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            CompletionError::RateLimited(d) => d,
            CompletionError::Api { detail, .. } => detail,
            CompletionError::Other(d) => d,
        }
    }

    /// Classify a non-success HTTP response from an OpenAI-style endpoint.
    pub fn from_http(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);

        let detail = parsed
            .as_ref()
            .and_then(|e| e.message.clone())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                let body = body.trim();
                if body.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    body.to_string()
                }
            });

        let error_type = parsed.as_ref().and_then(|e| e.error_type.clone());
        let code = parsed
            .as_ref()
            .and_then(|e| e.code.as_ref())
            .and_then(|c| c.as_str().map(String::from));

        let mentions_rate_limit = [error_type.as_deref(), code.as_deref()]
            .into_iter()
            .flatten()
            .any(|s| s.contains("rate_limit"));

        if status == 429 || mentions_rate_limit {
            return CompletionError::RateLimited(detail);
        }

        let category = error_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| status_category(status).to_string());

        CompletionError::Api { category, detail }
    }
}

fn status_category(status: u16) -> &'static str {
    match status {
        401 | 403 => "AuthenticationError",
        400 | 404 | 422 => "InvalidRequestError",
        500..=599 => "ServerError",
        _ => "APIError",
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
}
