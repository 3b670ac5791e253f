use std::sync::Arc;

use crate::request::Request;
use crate::sender::RequestSender;
use crate::types::User;

/// `getMe`: the bot's own account.
#[derive(Debug)]
pub struct GetMe {
    inner: Request<User>,
}

impl GetMe {
    pub const METHOD: &'static str = "getMe";

    pub fn new(sender: Arc<dyn RequestSender>) -> Self {
        Self {
            inner: Request::new(sender, Self::METHOD),
        }
    }
}

impl_api_request!(GetMe => User);
