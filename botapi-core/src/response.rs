//! Response envelope returned by the API for every call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BotApiError, Result};

/// Extra hints the server attaches to some errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// Flood control: seconds to wait before repeating the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// The group was migrated to a supergroup with this id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
}

/// Outcome of one call: the raw result payload, or the server's error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope {
    Ok(Value),
    Err {
        description: String,
        code: i64,
        parameters: Option<ResponseParameters>,
    },
}

#[derive(Deserialize)]
struct RawEnvelope {
    ok: bool,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    parameters: Option<ResponseParameters>,
}

impl From<RawEnvelope> for ResponseEnvelope {
    fn from(raw: RawEnvelope) -> Self {
        if raw.ok {
            ResponseEnvelope::Ok(raw.result)
        } else {
            ResponseEnvelope::Err {
                description: raw.description.unwrap_or_default(),
                code: raw.error_code.unwrap_or_default(),
                parameters: raw.parameters,
            }
        }
    }
}

impl ResponseEnvelope {
    /// Shorthand for an error envelope without parameters.
    pub fn error(description: impl Into<String>, code: i64) -> Self {
        ResponseEnvelope::Err {
            description: description.into(),
            code,
            parameters: None,
        }
    }

    /// Decodes `{"ok": .., "result" | "error_code" + "description"}`.
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_value(value)?;
        Ok(raw.into())
    }

    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_slice(body)?;
        Ok(raw.into())
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ResponseEnvelope::Ok(_))
    }

    /// The payload, or [`BotApiError::Api`] for an error envelope.
    pub fn into_result(self) -> Result<Value> {
        match self {
            ResponseEnvelope::Ok(payload) => Ok(payload),
            ResponseEnvelope::Err {
                description,
                code,
                parameters,
            } => Err(BotApiError::Api {
                code,
                description,
                parameters,
            }),
        }
    }
}
