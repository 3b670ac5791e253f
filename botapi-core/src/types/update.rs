//! Incoming updates and the closed set of update kinds.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Message;

/// Event category the API can deliver. Used for `allowed_updates` and to classify [`Update`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Message,
    ChannelPost,
    EditedMessage,
    EditedChannelPost,
    CallbackQuery,
    InlineQuery,
    Poll,
    PollAnswer,
    ChosenInlineResult,
    ShippingQuery,
    PreCheckoutQuery,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
    MessageReaction,
    MessageReactionCount,
    ChatBoost,
    RemovedChatBoost,
}

impl UpdateKind {
    /// Every kind, in declaration order.
    pub const ALL: [UpdateKind; 18] = [
        UpdateKind::Message,
        UpdateKind::ChannelPost,
        UpdateKind::EditedMessage,
        UpdateKind::EditedChannelPost,
        UpdateKind::CallbackQuery,
        UpdateKind::InlineQuery,
        UpdateKind::Poll,
        UpdateKind::PollAnswer,
        UpdateKind::ChosenInlineResult,
        UpdateKind::ShippingQuery,
        UpdateKind::PreCheckoutQuery,
        UpdateKind::MyChatMember,
        UpdateKind::ChatMember,
        UpdateKind::ChatJoinRequest,
        UpdateKind::MessageReaction,
        UpdateKind::MessageReactionCount,
        UpdateKind::ChatBoost,
        UpdateKind::RemovedChatBoost,
    ];

    /// Wire name, e.g. `callback_query`.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Message => "message",
            UpdateKind::ChannelPost => "channel_post",
            UpdateKind::EditedMessage => "edited_message",
            UpdateKind::EditedChannelPost => "edited_channel_post",
            UpdateKind::CallbackQuery => "callback_query",
            UpdateKind::InlineQuery => "inline_query",
            UpdateKind::Poll => "poll",
            UpdateKind::PollAnswer => "poll_answer",
            UpdateKind::ChosenInlineResult => "chosen_inline_result",
            UpdateKind::ShippingQuery => "shipping_query",
            UpdateKind::PreCheckoutQuery => "pre_checkout_query",
            UpdateKind::MyChatMember => "my_chat_member",
            UpdateKind::ChatMember => "chat_member",
            UpdateKind::ChatJoinRequest => "chat_join_request",
            UpdateKind::MessageReaction => "message_reaction",
            UpdateKind::MessageReactionCount => "message_reaction_count",
            UpdateKind::ChatBoost => "chat_boost",
            UpdateKind::RemovedChatBoost => "removed_chat_boost",
        }
    }

    /// Kinds whose payload is a [`Message`].
    pub fn carries_message(&self) -> bool {
        matches!(
            self,
            UpdateKind::Message
                | UpdateKind::ChannelPost
                | UpdateKind::EditedMessage
                | UpdateKind::EditedChannelPost
        )
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUpdateKindError(pub String);

impl fmt::Display for ParseUpdateKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown update kind: {}", self.0)
    }
}

impl std::error::Error for ParseUpdateKindError {}

impl std::str::FromStr for UpdateKind {
    type Err = ParseUpdateKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpdateKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseUpdateKindError(s.to_string()))
    }
}

/// One incoming update. The payload is kept as raw JSON keyed by its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(rename = "update_id")]
    pub id: i64,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Update {
    /// Kind of this update; `None` for kinds this crate does not know.
    pub fn kind(&self) -> Option<UpdateKind> {
        self.payload.keys().find_map(|key| key.parse().ok())
    }

    /// Raw payload of the known kind.
    pub fn payload(&self) -> Option<&Value> {
        self.kind().and_then(|kind| self.payload.get(kind.as_str()))
    }

    /// The message carried by message-like updates. Decoding errors are returned, not swallowed.
    pub fn message(&self) -> Option<Result<Message, serde_json::Error>> {
        let kind = self.kind().filter(UpdateKind::carries_message)?;
        let raw = self.payload.get(kind.as_str())?;
        Some(serde_json::from_value(raw.clone()))
    }
}
