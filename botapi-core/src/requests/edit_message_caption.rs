use std::sync::Arc;

use crate::request::{ApiRequest, Request};
use crate::sender::RequestSender;
use crate::target::MessageRef;
use crate::types::{EditedMessage, InlineKeyboardMarkup, MessageEntity, ParseMode};

/// `editMessageCaption`: replaces the caption of a media message.
///
/// A [`MessageRef::Chat`] seeds `chat_id` and `message_id`; a [`MessageRef::Inline`] seeds only
/// `inline_message_id`, and the server then answers with `true` instead of the message.
#[derive(Debug)]
pub struct EditMessageCaption {
    inner: Request<EditedMessage>,
}

impl EditMessageCaption {
    pub const METHOD: &'static str = "editMessageCaption";

    pub fn new(sender: Arc<dyn RequestSender>, message: MessageRef) -> Self {
        let (target, message_id) = message.into_parts();
        let inner =
            Request::with_target(sender, Self::METHOD, target).add("message_id", message_id);
        Self { inner }
    }

    /// New caption; leaving it unset removes the current caption.
    pub fn caption(self, caption: impl Into<String>) -> Self {
        self.add("caption", caption.into())
    }

    pub fn parse_mode(self, mode: ParseMode) -> Self {
        self.add("parse_mode", mode)
    }

    /// Entities of the new caption; used instead of `parse_mode`.
    pub fn entities(self, entities: impl IntoIterator<Item = MessageEntity>) -> Self {
        self.add("caption_entities", entities.into_iter().collect::<Vec<_>>())
    }

    pub fn reply_markup(self, markup: InlineKeyboardMarkup) -> Self {
        self.add("reply_markup", markup)
    }

    pub fn show_caption_above_media(self, show: bool) -> Self {
        self.add("show_caption_above_media", show)
    }
}

impl_api_request!(EditMessageCaption => EditedMessage);
