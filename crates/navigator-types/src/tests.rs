#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::conversation::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::topic::*;

    // ─── Turn / Message Tests ────────────────────────────────

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("I love math");
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.content(), "I love math");

        let assistant = Turn::assistant("Yosh!");
        assert_eq!(assistant.role(), Role::Assistant);
    }

    #[test]
    fn test_role_forwarding_coerces_system_to_user() {
        assert_eq!(Role::User.forwarded(), Role::User);
        assert_eq!(Role::Assistant.forwarded(), Role::Assistant);
        assert_eq!(Role::System.forwarded(), Role::User);
    }

    #[test]
    fn test_message_from_turn_uses_forwarded_role() {
        let turn = Turn::new(Role::System, "injected note");
        let msg = Message::from(&turn);
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "injected note");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_message_serialization_shape() {
        let json = serde_json::to_value(Message::system("be Luffy")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be Luffy");
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_seeded_with_greeting() {
        let convo = Conversation::new("Ahoy!");
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.turns()[0].role(), Role::Assistant);
        assert_eq!(convo.turns()[0].content(), "Ahoy!");
        assert!(convo.history().is_empty());
        assert!(!convo.id().is_empty());
        assert!(!convo.started_at().is_empty());
    }

    #[test]
    fn test_conversation_append_preserves_order() {
        let mut convo = Conversation::new("Ahoy!");
        convo.append(Turn::user("first")).unwrap();
        convo.append(Turn::assistant("second")).unwrap();
        let contents: Vec<&str> = convo.turns().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["Ahoy!", "first", "second"]);
        assert_eq!(convo.history().len(), 2);
    }

    #[test]
    fn test_conversation_append_rejects_blank() {
        let mut convo = Conversation::new("Ahoy!");
        assert_eq!(convo.append(Turn::user("   ")), Err(NavigatorError::EmptyTurn));
        assert_eq!(convo.append(Turn::user("")), Err(NavigatorError::EmptyTurn));
        assert_eq!(convo.len(), 1);
    }

    #[test]
    fn test_conversation_recent_returns_trailing_window() {
        let mut convo = Conversation::new("Ahoy!");
        for i in 0..10 {
            convo.append(Turn::user(format!("turn {}", i))).unwrap();
        }
        for n in 0..15 {
            let recent = convo.recent(n);
            let expected = n.min(convo.len());
            assert_eq!(recent.len(), expected);
            assert_eq!(recent, &convo.turns()[convo.len() - expected..]);
        }
        let last_three: Vec<&str> = convo.recent(3).iter().map(|t| t.content()).collect();
        assert_eq!(last_three, vec!["turn 7", "turn 8", "turn 9"]);
    }

    #[test]
    fn test_trailing_matches_recent_and_skips_greeting() {
        let mut convo = Conversation::new("Ahoy!");
        for i in 0..4 {
            convo.append(Turn::user(format!("turn {}", i))).unwrap();
        }
        assert_eq!(trailing(convo.turns(), 3), convo.recent(3));
        // A window wider than the history never reaches back to the greeting
        let window = trailing(convo.history(), 10);
        assert_eq!(window.len(), 4);
        assert_eq!(window[0].content(), "turn 0");
    }

    #[test]
    fn test_conversation_retract_last_keeps_greeting() {
        let mut convo = Conversation::new("Ahoy!");
        convo.append(Turn::user("hi")).unwrap();

        assert_eq!(convo.retract_last(), Some(Turn::user("hi")));
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.retract_last(), None);
        assert_eq!(convo.turns()[0].content(), "Ahoy!");
    }

    #[test]
    fn test_conversation_reset_keeps_only_greeting() {
        let mut convo = Conversation::new("Ahoy!");
        let old_id = convo.id().to_string();
        convo.append(Turn::user("hi")).unwrap();
        convo.append(Turn::assistant("hello")).unwrap();

        convo.reset();
        assert_eq!(convo.len(), 1);
        assert_eq!(convo.turns()[0].role(), Role::Assistant);
        assert_eq!(convo.turns()[0].content(), "Ahoy!");
        assert_ne!(convo.id(), old_id);

        convo.reset();
        assert_eq!(convo.len(), 1);
    }

    // ─── CompletionError Tests ───────────────────────────────

    #[test]
    fn test_from_http_429_is_rate_limited() {
        let body = r#"{"error":{"message":"Rate limit reached for requests","type":"requests","code":"rate_limit_exceeded"}}"#;
        let err = CompletionError::from_http(429, body);
        assert_eq!(err.kind(), FailureKind::RateLimited);
        assert_eq!(err.detail(), "Rate limit reached for requests");
    }

    #[test]
    fn test_from_http_rate_limit_code_without_429() {
        let body = r#"{"error":{"message":"slow down","type":"rate_limit_error"}}"#;
        let err = CompletionError::from_http(400, body);
        assert_eq!(err, CompletionError::RateLimited("slow down".to_string()));
    }

    #[test]
    fn test_from_http_uses_error_type_as_category() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err = CompletionError::from_http(401, body);
        assert_eq!(
            err,
            CompletionError::Api {
                category: "invalid_request_error".to_string(),
                detail: "Incorrect API key provided".to_string(),
            }
        );
    }

    #[test]
    fn test_from_http_falls_back_to_status_category() {
        let err = CompletionError::from_http(503, "upstream unavailable");
        assert_eq!(
            err,
            CompletionError::Api {
                category: "ServerError".to_string(),
                detail: "upstream unavailable".to_string(),
            }
        );

        let err = CompletionError::from_http(403, "");
        match err {
            CompletionError::Api { category, detail } => {
                assert_eq!(category, "AuthenticationError");
                assert_eq!(detail, "HTTP 403");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_completion_error_display() {
        let err = CompletionError::Api {
            category: "ServerError".to_string(),
            detail: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "ServerError: boom");
        assert_eq!(CompletionError::Other("dns".into()).kind(), FailureKind::Other);
    }

    #[test]
    fn test_navigator_error_from_serde() {
        let err: NavigatorError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        assert!(matches!(err, NavigatorError::Serialization(_)));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = NavigatorConfig::default();
        assert_eq!(config.history_window, 6);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert!((0.7..=0.8).contains(&config.llm.temperature));
        assert!(config.persona.contains("Luffy"));
        assert!(config.greeting.starts_with("🏴‍☠️"));
        assert!(config.validate().is_ok());
        assert_eq!(config.llm.base_url(), "https://api.openai.com");
    }

    #[test]
    fn test_persona_word_count() {
        let words = NavigatorConfig::default().persona.split_whitespace().count();
        assert!((150..=200).contains(&words), "persona has {} words", words);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = NavigatorConfig::from_json(r#"{"history_window": 4, "llm": {"temperature": 0.8}}"#).unwrap();
        assert_eq!(config.history_window, 4);
        assert_eq!(config.llm.temperature, 0.8);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.llm.max_tokens, 300);
    }

    #[test]
    fn test_config_rejects_invalid_values() {
        assert!(matches!(
            NavigatorConfig::from_json(r#"{"history_window": 0}"#),
            Err(NavigatorError::Config(_))
        ));
        assert!(matches!(
            NavigatorConfig::from_json(r#"{"llm": {"presence_penalty": 1.5}}"#),
            Err(NavigatorError::Config(_))
        ));
        assert!(matches!(
            NavigatorConfig::from_json(r#"{"llm": {"temperature": 3.0}}"#),
            Err(NavigatorError::Config(_))
        ));
        assert!(matches!(
            NavigatorConfig::from_json("not json"),
            Err(NavigatorError::Serialization(_))
        ));
    }

    #[test]
    fn test_custom_api_base_overrides_provider() {
        let mut config = LlmConfig::default();
        config.provider = LlmProvider::DeepSeek;
        assert_eq!(config.base_url(), "https://api.deepseek.com");
        config.api_base = Some("http://localhost:8080".to_string());
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    // ─── QuickTopic / Event Tests ────────────────────────────

    #[test]
    fn test_quick_topics_cover_six_fields() {
        let topics = QuickTopic::all();
        assert_eq!(topics.len(), 6);
        let labels: Vec<&str> = topics.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            vec!["Engineering", "Medical", "Business", "Creative", "Science", "Education"]
        );
        for topic in topics {
            assert!(!topic.prompt().trim().is_empty());
        }
    }

    #[test]
    fn test_event_serialization() {
        let event = NavigatorEvent::ReplyComplete {
            text: "Try engineering!".to_string(),
            failure: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ReplyComplete"));
        assert!(!json.contains("failure"));

        let event = NavigatorEvent::ReplyComplete {
            text: "🚨".to_string(),
            failure: Some(FailureKind::RateLimited),
        };
        let back: NavigatorEvent =
            serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(back, event);
    }
}
