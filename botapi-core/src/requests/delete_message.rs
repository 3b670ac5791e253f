use std::sync::Arc;

use crate::request::Request;
use crate::sender::RequestSender;
use crate::target::{ChatId, Target};

/// `deleteMessage`: deletes a message; answers `true` on success.
#[derive(Debug)]
pub struct DeleteMessage {
    inner: Request<bool>,
}

impl DeleteMessage {
    pub const METHOD: &'static str = "deleteMessage";

    pub fn new(
        sender: Arc<dyn RequestSender>,
        chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        let inner = Request::with_target(sender, Self::METHOD, Target::Chat(chat_id.into()))
            .add("message_id", message_id);
        Self { inner }
    }
}

impl_api_request!(DeleteMessage => bool);
