use std::sync::Arc;

use crate::request::{ApiRequest, Request};
use crate::sender::RequestSender;
use crate::target::MessageRef;
use crate::types::{EditedMessage, InlineKeyboardMarkup};

/// `editMessageReplyMarkup`: replaces or removes the inline keyboard of a message.
#[derive(Debug)]
pub struct EditMessageReplyMarkup {
    inner: Request<EditedMessage>,
}

impl EditMessageReplyMarkup {
    pub const METHOD: &'static str = "editMessageReplyMarkup";

    pub fn new(sender: Arc<dyn RequestSender>, message: MessageRef) -> Self {
        let (target, message_id) = message.into_parts();
        let inner =
            Request::with_target(sender, Self::METHOD, target).add("message_id", message_id);
        Self { inner }
    }

    /// Unset markup removes the keyboard.
    pub fn reply_markup(self, markup: InlineKeyboardMarkup) -> Self {
        self.add("reply_markup", markup)
    }
}

impl_api_request!(EditMessageReplyMarkup => EditedMessage);
