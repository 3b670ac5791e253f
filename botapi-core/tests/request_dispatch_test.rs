//! Integration tests for [`botapi_core::Request`] dispatch.
//!
//! Covers: parameter accumulation (distinct keys, last write wins, omitted nulls), addressing
//! seeds for chat and inline targets, and the three dispatch outcomes (typed result, API error,
//! transport error).

mod common;

use std::sync::Arc;

use botapi_core::{BotApiError, ChatId, Message, Request, RequestSender, Target};
use common::{message_payload, RecordingSender, Reply};
use serde_json::json;

fn shared(sender: &Arc<RecordingSender>) -> Arc<dyn RequestSender> {
    sender.clone()
}

/// **Test: Distinct-key adds commute.**
///
/// **Expected:** Two builders fed the same pairs in different orders send equal bags.
#[tokio::test]
async fn test_distinct_keys_any_order() {
    let sender = RecordingSender::new();

    Request::<bool>::new(shared(&sender), "m")
        .add("a", 1)
        .add("b", "two")
        .add("c", json!([3]))
        .send()
        .await
        .unwrap();
    Request::<bool>::new(shared(&sender), "m")
        .add("c", json!([3]))
        .add("a", 1)
        .add("b", "two")
        .send()
        .await
        .unwrap();

    let sent = sender.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].params.len(), 3);
    for key in ["a", "b", "c"] {
        assert_eq!(sent[0].params.get(key), sent[1].params.get(key));
    }
}

/// **Test: Duplicate keys, last write wins.**
#[tokio::test]
async fn test_duplicate_key_last_wins() {
    let sender = RecordingSender::new();
    Request::<bool>::new(shared(&sender), "m")
        .add("x", 1)
        .add("x", 2)
        .send()
        .await
        .unwrap();

    let request = sender.single();
    assert_eq!(request.params.get("x"), Some(&json!(2)));
    assert_eq!(request.params.len(), 1);
}

/// **Test: `None` values are omitted from the outgoing bag.**
#[tokio::test]
async fn test_none_values_omitted() {
    let sender = RecordingSender::new();
    Request::<bool>::new(shared(&sender), "m")
        .add("parse_mode", Some("HTML"))
        .add("parse_mode", None::<&str>)
        .add("reply_markup", None::<serde_json::Value>)
        .send()
        .await
        .unwrap();

    assert!(sender.single().params.is_empty());
}

/// **Test: Chat-addressed construction seeds `chat_id` before any add.**
#[test]
fn test_chat_target_seeds_chat_id() {
    let sender = RecordingSender::new();
    let request = Request::<bool>::with_target(shared(&sender), "m", Target::chat(12345));
    assert_eq!(request.params().get("chat_id"), Some(&json!(12345)));
    assert_eq!(request.params().len(), 1);

    let request = Request::<bool>::with_target(
        shared(&sender),
        "m",
        Target::Chat(ChatId::from("@channel")),
    );
    assert_eq!(request.params().get("chat_id"), Some(&json!("@channel")));
}

/// **Test: Inline-message construction seeds `inline_message_id` and no `chat_id`.**
#[test]
fn test_inline_target_seeds_inline_id_only() {
    let sender = RecordingSender::new();
    let request =
        Request::<bool>::with_target(shared(&sender), "m", Target::inline_message("ABC123"));
    assert_eq!(request.params().get("inline_message_id"), Some(&json!("ABC123")));
    assert!(!request.params().contains_key("chat_id"));
}

/// **Test: `Ok` envelope decodes into the declared result type.**
///
/// **Expected:** method and bag reach the sender; the typed message id is 42.
#[tokio::test]
async fn test_ok_envelope_decodes_typed_result() {
    let sender = RecordingSender::replying_ok(message_payload(42, 12345));
    let message =
        Request::<Message>::with_target(shared(&sender), "sendMessage", Target::chat(12345))
            .add("text", "hello")
            .send()
            .await
            .unwrap();

    assert_eq!(message.id, 42);
    assert_eq!(message.chat.id, 12345);
    let request = sender.single();
    assert_eq!(request.method, "sendMessage");
    assert_eq!(request.params.get("text"), Some(&json!("hello")));
}

/// **Test: `Err` envelope becomes an API error with exact code and description.**
#[tokio::test]
async fn test_err_envelope_is_api_error() {
    let sender = RecordingSender::replying_err("Bad Request: message not found", 400);
    let err = Request::<Message>::new(shared(&sender), "editMessageText")
        .send()
        .await
        .unwrap_err();

    match err {
        BotApiError::Api {
            code, description, ..
        } => {
            assert_eq!(code, 400);
            assert_eq!(description, "Bad Request: message not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert_eq!(sender.sent().len(), 1, "API errors are not retried");
}

/// **Test: Transport failure propagates unchanged.**
#[tokio::test]
async fn test_transport_failure_propagates() {
    let sender = RecordingSender::new();
    sender.push(Reply::TransportFailure("connection reset by peer".to_string()));

    let err = Request::<bool>::new(shared(&sender), "getMe").send().await.unwrap_err();
    assert!(matches!(err, BotApiError::Transport(_)));
    assert_eq!(err.to_string(), "Transport error: connection reset by peer");
}

/// **Test: Payload of the wrong shape is a decode error.**
#[tokio::test]
async fn test_wrong_payload_shape_is_decode_error() {
    let sender = RecordingSender::replying_ok(json!({"unexpected": true}));
    let err = Request::<Message>::new(shared(&sender), "sendMessage")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, BotApiError::Decode(_)));
}

/// **Test: Builder errors stop dispatch before the sender is called.**
#[tokio::test]
async fn test_invalid_key_never_reaches_sender() {
    let sender = RecordingSender::new();
    let err = Request::<bool>::new(shared(&sender), "m")
        .add("", "value")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, BotApiError::InvalidParameter(_)));
    assert!(sender.sent().is_empty());
}
