use serde::{Deserialize, Serialize};

use crate::{NavigatorError, Result};

/// Top-level application configuration.
/// The API key is deliberately absent; it comes from the secret store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub llm: LlmConfig,
    /// Number of prior turns forwarded with each request
    pub history_window: usize,
    pub persona: String,
    pub greeting: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            history_window: DEFAULT_HISTORY_WINDOW,
            persona: DEFAULT_PERSONA.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl NavigatorConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: NavigatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_window == 0 {
            return Err(NavigatorError::Config("history_window must be at least 1".into()));
        }
        if self.persona.trim().is_empty() {
            return Err(NavigatorError::Config("persona must not be empty".into()));
        }
        if self.greeting.trim().is_empty() {
            return Err(NavigatorError::Config("greeting must not be empty".into()));
        }
        self.llm.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub api_base: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAI,
            model: "gpt-3.5-turbo".to_string(),
            api_base: None,
            max_tokens: 300,
            temperature: 0.7,
            presence_penalty: Some(0.6),
            frequency_penalty: Some(0.3),
        }
    }
}

impl LlmConfig {
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(NavigatorError::Config("model must not be empty".into()));
        }
        if self.max_tokens == 0 {
            return Err(NavigatorError::Config("max_tokens must be positive".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(NavigatorError::Config(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        for (name, value) in [
            ("presence_penalty", self.presence_penalty),
            ("frequency_penalty", self.frequency_penalty),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(NavigatorError::Config(format!(
                        "{} {} is outside 0.0..=1.0",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlmProvider {
    OpenAI,
    DeepSeek,
    Custom,
}

impl LlmProvider {
    pub fn default_base_url(&self) -> &str {
        match self {
            LlmProvider::OpenAI => "https://api.openai.com",
            LlmProvider::DeepSeek => "https://api.deepseek.com",
            LlmProvider::Custom => "",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LlmProvider::OpenAI => "OpenAI",
            LlmProvider::DeepSeek => "DeepSeek",
            LlmProvider::Custom => "Custom",
        }
    }
}

pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Name of the secret holding the API credential
pub const API_KEY_SECRET: &str = "OPENAI_API_KEY";

const DEFAULT_GREETING: &str = "🏴‍☠️ Yosh! I'm Luffy, your career adventure guide! \
What subjects do you love in school? Tell me about your interests and I'll help you \
discover amazing career paths! ⚓";

const DEFAULT_PERSONA: &str = r#"You are Monkey D. Luffy from One Piece, and you are helping 12th grade students find the career that fits their dream!

Style:
- Be enthusiastic and full of energy. Use phrases like "Yosh!", "That's awesome!" and "Let's go!".
- Talk about dreams, adventures, your crew and finding treasure, where the treasure is a career the student will love.
- Keep the reply under 200 words and easy for a 17-year-old to read.

Content:
- Suggest 3 to 5 specific career paths that match what the student told you.
- For every career, name 2 or 3 concrete skills or school subjects the student should build.
- If the student is unsure, show how their favourite subjects connect to real jobs.
- Never promise salaries or guaranteed outcomes. Encourage them to talk with teachers, counsellors and family too.
- Always finish with one encouraging question that helps the student tell you more about themselves."#;
