//! WASM-target tests for navigator-core.
//!
//! Runs the request-building and session tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use async_trait::async_trait;
use navigator_core::event_bus::EventBus;
use navigator_core::generator::{ResponseGenerator, WARNING_MARKER};
use navigator_core::ports::*;
use navigator_core::session::ChatSession;
use navigator_types::config::NavigatorConfig;
use navigator_types::message::*;
use navigator_types::CompletionError;

struct FixedLlm(CompletionResult);

#[async_trait(?Send)]
impl CompletionPort for FixedLlm {
    async fn chat_completion(&self, _req: ChatRequest) -> CompletionResult {
        self.0.clone()
    }
}

fn reply(text: &str) -> FixedLlm {
    FixedLlm(Ok(ChatResponse {
        text: text.to_string(),
        usage: None,
    }))
}

#[wasm_bindgen_test]
fn request_window() {
    let generator = ResponseGenerator::new(&NavigatorConfig::default());
    let history: Vec<Turn> = (0..10).map(|i| Turn::user(format!("t{}", i))).collect();
    let req = generator.build_request("latest", &history);
    assert_eq!(req.messages.len(), 8);
    assert_eq!(req.messages[0].role, Role::System);
    assert_eq!(req.messages[1].content, "t4");
    assert_eq!(req.messages[7].content, "latest");
}

#[wasm_bindgen_test]
async fn session_round_trip() {
    let mut session = ChatSession::new(&NavigatorConfig::default(), EventBus::new());
    session
        .submit("I love math and physics", &reply("Try engineering!"))
        .await
        .unwrap();
    assert_eq!(session.conversation().len(), 3);
    assert_eq!(session.conversation().turns()[2].content(), "Try engineering!");
}

#[wasm_bindgen_test]
async fn session_failure_becomes_turn() {
    let mut session = ChatSession::new(&NavigatorConfig::default(), EventBus::new());
    let llm = FixedLlm(Err(CompletionError::Other("network down".to_string())));
    let reply = session.submit("hello", &llm).await.unwrap();
    assert!(reply.text.starts_with(WARNING_MARKER));
    assert_eq!(session.conversation().len(), 3);
}

#[wasm_bindgen_test]
fn session_clear() {
    let mut session = ChatSession::new(&NavigatorConfig::default(), EventBus::new());
    session.clear().unwrap();
    assert_eq!(session.conversation().len(), 1);
}
