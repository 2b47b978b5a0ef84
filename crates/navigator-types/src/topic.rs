use serde::{Deserialize, Serialize};

/// Canned prompts offered as one-click buttons.
/// Each one is submitted exactly as if the student had typed its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickTopic {
    Engineering,
    Medical,
    Business,
    Creative,
    Science,
    Education,
}

impl QuickTopic {
    pub fn all() -> &'static [QuickTopic] {
        &[
            QuickTopic::Engineering,
            QuickTopic::Medical,
            QuickTopic::Business,
            QuickTopic::Creative,
            QuickTopic::Science,
            QuickTopic::Education,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuickTopic::Engineering => "Engineering",
            QuickTopic::Medical => "Medical",
            QuickTopic::Business => "Business",
            QuickTopic::Creative => "Creative",
            QuickTopic::Science => "Science",
            QuickTopic::Education => "Education",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            QuickTopic::Engineering => "⚙",
            QuickTopic::Medical => "⚕",
            QuickTopic::Business => "💼",
            QuickTopic::Creative => "🎨",
            QuickTopic::Science => "🔬",
            QuickTopic::Education => "📚",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuickTopic::Engineering => {
                "I love building things and solving problems. What engineering careers could I explore?"
            }
            QuickTopic::Medical => {
                "I want to help people stay healthy. What careers in medicine and healthcare are there?"
            }
            QuickTopic::Business => {
                "I'm interested in business and maybe starting my own company. What career paths fit me?"
            }
            QuickTopic::Creative => {
                "I love art, design and storytelling. What creative careers can I pursue?"
            }
            QuickTopic::Science => {
                "I enjoy science experiments and discovering how the world works. What science careers are out there?"
            }
            QuickTopic::Education => {
                "I like explaining things and helping others learn. What careers in education could suit me?"
            }
        }
    }
}
