// src/api.rs

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Urlencoded body of `/get`. `msg` is optional here so a missing field
/// reaches the handler and becomes a `MissingInput` instead of a decode error.
#[derive(Deserialize, Debug, Default)]
pub struct ChatForm {
    pub msg: Option<String>,
}

/* ---------- Upstream chat-completion wire types ---------- */

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: ChoiceMessage,
}

// `role` is echoed back by the API but unused by the relay.
#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<Role>,
    pub content: Option<String>,
}
