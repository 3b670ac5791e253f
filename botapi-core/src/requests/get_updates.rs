use std::sync::Arc;

use crate::request::{ApiRequest, Request};
use crate::sender::RequestSender;
use crate::types::{Update, UpdateKind};

/// `getUpdates`: fetches pending updates. Polling loops are left to the caller.
#[derive(Debug)]
pub struct GetUpdates {
    inner: Request<Vec<Update>>,
}

impl GetUpdates {
    pub const METHOD: &'static str = "getUpdates";

    pub fn new(sender: Arc<dyn RequestSender>) -> Self {
        Self {
            inner: Request::new(sender, Self::METHOD),
        }
    }

    /// Id of the first update to return; earlier ones are confirmed and dropped by the server.
    pub fn offset(self, offset: i64) -> Self {
        self.add("offset", offset)
    }

    /// 1..=100; the server defaults to 100.
    pub fn limit(self, limit: u8) -> Self {
        self.add("limit", limit)
    }

    /// Long-polling timeout in seconds; 0 means short polling.
    pub fn timeout(self, seconds: u32) -> Self {
        self.add("timeout", seconds)
    }

    /// Restricts delivery to these kinds. An empty list means every kind except the opt-in ones.
    pub fn allowed_updates(self, kinds: impl IntoIterator<Item = UpdateKind>) -> Self {
        self.add("allowed_updates", kinds.into_iter().collect::<Vec<_>>())
    }
}

impl_api_request!(GetUpdates => Vec<Update>);
