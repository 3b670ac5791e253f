//! Mock implementation of [`botapi_core::RequestSender`] for integration tests.
//!
//! Records every `(method, params)` pair it is asked to send and answers with a queued
//! envelope, so tests can assert on the outgoing bag and the decoded result without a network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use botapi_core::{BotApiError, ParameterBag, RequestSender, ResponseEnvelope, Result};
use serde_json::Value;

/// One recorded call.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub method: String,
    pub params: ParameterBag,
}

/// What the mock answers with for one call.
pub enum Reply {
    Envelope(ResponseEnvelope),
    TransportFailure(String),
}

/// Mock sender that records calls and replays queued replies in order.
/// Once the queue is empty it answers `Ok(true)`.
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<SentRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl RecordingSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Sender whose first call answers `Ok(payload)`.
    pub fn replying_ok(payload: Value) -> Arc<Self> {
        let sender = Self::new();
        sender.push(Reply::Envelope(ResponseEnvelope::Ok(payload)));
        sender
    }

    /// Sender whose first call answers with an API error.
    pub fn replying_err(description: &str, code: i64) -> Arc<Self> {
        let sender = Self::new();
        sender.push(Reply::Envelope(ResponseEnvelope::error(description, code)));
        sender
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// The only recorded call; panics if there is not exactly one.
    pub fn single(&self) -> SentRequest {
        let sent = self.sent();
        assert_eq!(sent.len(), 1, "expected exactly one request, got {:?}", sent);
        sent.into_iter().next().unwrap()
    }
}

#[async_trait]
impl RequestSender for RecordingSender {
    async fn send(&self, method: &str, params: &ParameterBag) -> Result<ResponseEnvelope> {
        self.sent.lock().unwrap().push(SentRequest {
            method: method.to_string(),
            params: params.clone(),
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Envelope(envelope)) => Ok(envelope),
            Some(Reply::TransportFailure(message)) => Err(BotApiError::transport(message)),
            None => Ok(ResponseEnvelope::Ok(Value::Bool(true))),
        }
    }
}

/// A minimal message payload as the API returns it.
pub fn message_payload(message_id: i64, chat_id: i64) -> Value {
    serde_json::json!({
        "message_id": message_id,
        "date": 1706529600,
        "chat": {"id": chat_id, "type": "private"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
        "text": "This is a test response"
    })
}
