//! Client facade: one factory method per endpoint.
//!
//! [`Bot`] is transport-agnostic; it holds any [`RequestSender`] (HTTP in production, a recording
//! mock in tests) and hands a clone of it to every builder it creates.

use std::sync::Arc;

use crate::requests::{
    DeleteMessage, EditMessageCaption, EditMessageReplyMarkup, EditMessageText, GetMe, GetUpdates,
    SendMessage,
};
use crate::sender::RequestSender;
use crate::target::{ChatId, MessageRef};

/// Entry point for building API calls. Cheap to clone.
#[derive(Clone)]
pub struct Bot {
    sender: Arc<dyn RequestSender>,
}

impl Bot {
    pub fn new<S>(sender: S) -> Self
    where
        S: RequestSender + 'static,
    {
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Builds a bot over an already shared sender.
    pub fn with_sender(sender: Arc<dyn RequestSender>) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &Arc<dyn RequestSender> {
        &self.sender
    }

    pub fn get_me(&self) -> GetMe {
        GetMe::new(self.sender.clone())
    }

    pub fn get_updates(&self) -> GetUpdates {
        GetUpdates::new(self.sender.clone())
    }

    pub fn send_message(&self, chat_id: impl Into<ChatId>, text: impl Into<String>) -> SendMessage {
        SendMessage::new(self.sender.clone(), chat_id, text)
    }

    pub fn edit_message_text(
        &self,
        message: MessageRef,
        text: impl Into<String>,
    ) -> EditMessageText {
        EditMessageText::new(self.sender.clone(), message, text)
    }

    pub fn edit_message_caption(&self, message: MessageRef) -> EditMessageCaption {
        EditMessageCaption::new(self.sender.clone(), message)
    }

    pub fn edit_message_reply_markup(&self, message: MessageRef) -> EditMessageReplyMarkup {
        EditMessageReplyMarkup::new(self.sender.clone(), message)
    }

    pub fn delete_message(&self, chat_id: impl Into<ChatId>, message_id: i64) -> DeleteMessage {
        DeleteMessage::new(self.sender.clone(), chat_id, message_id)
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot").finish_non_exhaustive()
    }
}
