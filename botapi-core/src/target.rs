//! Addressing: which chat or which message a request is aimed at.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::ParameterBag;

/// Numeric chat id or `@username` of a public chat/channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        ChatId::Username(username)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        ChatId::Username(username.to_string())
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{}", id),
            ChatId::Username(name) => f.write_str(name),
        }
    }
}

impl std::str::FromStr for ChatId {
    type Err = std::convert::Infallible;

    /// Numeric strings become [`ChatId::Id`]; anything else is taken as a username.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(ChatId::Id)
            .unwrap_or_else(|_| ChatId::Username(s.to_string())))
    }
}

/// Addressing mode of a request. Exactly one is active per builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Seeds `chat_id`.
    Chat(ChatId),
    /// Seeds `inline_message_id`; for messages delivered through an inline query.
    InlineMessage(String),
}

impl Target {
    pub fn chat(chat_id: impl Into<ChatId>) -> Self {
        Target::Chat(chat_id.into())
    }

    pub fn inline_message(id: impl Into<String>) -> Self {
        Target::InlineMessage(id.into())
    }

    pub(crate) fn seed(&self, params: &mut ParameterBag) -> Result<()> {
        match self {
            Target::Chat(chat_id) => params.insert("chat_id", chat_id),
            Target::InlineMessage(id) => params.insert("inline_message_id", id),
        }
    }
}

impl From<ChatId> for Target {
    fn from(chat_id: ChatId) -> Self {
        Target::Chat(chat_id)
    }
}

/// An already-sent message, as edit endpoints address it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRef {
    /// A regular message: chat plus message id.
    Chat { chat_id: ChatId, message_id: i64 },
    /// A message sent via inline mode, known only by its inline message id.
    Inline(String),
}

impl MessageRef {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        MessageRef::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(id: impl Into<String>) -> Self {
        MessageRef::Inline(id.into())
    }

    /// Splits into the addressing target and the message id to seed alongside it.
    pub(crate) fn into_parts(self) -> (Target, Option<i64>) {
        match self {
            MessageRef::Chat {
                chat_id,
                message_id,
            } => (Target::Chat(chat_id), Some(message_id)),
            MessageRef::Inline(id) => (Target::InlineMessage(id), None),
        }
    }
}
