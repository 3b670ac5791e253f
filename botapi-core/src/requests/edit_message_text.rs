use std::sync::Arc;

use crate::request::{ApiRequest, Request};
use crate::sender::RequestSender;
use crate::target::MessageRef;
use crate::types::{EditedMessage, InlineKeyboardMarkup, MessageEntity, ParseMode};

/// `editMessageText`: replaces the text of a text or game message.
#[derive(Debug)]
pub struct EditMessageText {
    inner: Request<EditedMessage>,
}

impl EditMessageText {
    pub const METHOD: &'static str = "editMessageText";

    pub fn new(
        sender: Arc<dyn RequestSender>,
        message: MessageRef,
        text: impl Into<String>,
    ) -> Self {
        let (target, message_id) = message.into_parts();
        let inner = Request::with_target(sender, Self::METHOD, target)
            .add("message_id", message_id)
            .add("text", text.into());
        Self { inner }
    }

    pub fn parse_mode(self, mode: ParseMode) -> Self {
        self.add("parse_mode", mode)
    }

    pub fn entities(self, entities: impl IntoIterator<Item = MessageEntity>) -> Self {
        self.add("entities", entities.into_iter().collect::<Vec<_>>())
    }

    pub fn reply_markup(self, markup: InlineKeyboardMarkup) -> Self {
        self.add("reply_markup", markup)
    }
}

impl_api_request!(EditMessageText => EditedMessage);
