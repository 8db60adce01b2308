//! Wire format of the chat completions API.

use serde::{Deserialize, Serialize};

/// Body of a completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation so far; reviews send a single user message.
    pub messages: Vec<ChatMessage>,
}

/// One chat message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Author role.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// A message authored by the `user` role.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Body of a completion response, reduced to the fields read here.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    /// Candidate completions; the service reads the first.
    pub choices: Vec<Choice>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// Message part of a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text.
    pub content: String,
}
