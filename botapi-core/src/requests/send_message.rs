use std::sync::Arc;

use crate::request::{ApiRequest, Request};
use crate::sender::RequestSender;
use crate::target::{ChatId, Target};
use crate::types::{InlineKeyboardMarkup, Message, MessageEntity, ParseMode};

/// `sendMessage`: sends a text message to a chat.
#[derive(Debug)]
pub struct SendMessage {
    inner: Request<Message>,
}

impl SendMessage {
    pub const METHOD: &'static str = "sendMessage";

    pub fn new(
        sender: Arc<dyn RequestSender>,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Self {
        let inner = Request::with_target(sender, Self::METHOD, Target::Chat(chat_id.into()))
            .add("text", text.into());
        Self { inner }
    }

    pub fn parse_mode(self, mode: ParseMode) -> Self {
        self.add("parse_mode", mode)
    }

    pub fn entities(self, entities: impl IntoIterator<Item = MessageEntity>) -> Self {
        self.add("entities", entities.into_iter().collect::<Vec<_>>())
    }

    /// Forum topic to post into.
    pub fn message_thread_id(self, thread_id: i64) -> Self {
        self.add("message_thread_id", thread_id)
    }

    pub fn disable_notification(self, disable: bool) -> Self {
        self.add("disable_notification", disable)
    }

    pub fn protect_content(self, protect: bool) -> Self {
        self.add("protect_content", protect)
    }

    pub fn reply_to_message_id(self, message_id: i64) -> Self {
        self.add("reply_to_message_id", message_id)
    }

    pub fn reply_markup(self, markup: InlineKeyboardMarkup) -> Self {
        self.add("reply_markup", markup)
    }
}

impl_api_request!(SendMessage => Message);
