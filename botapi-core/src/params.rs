//! Parameter bag: the named fields sent as a call's payload.
//!
//! Keys are unique and the last write wins. Values serializing to JSON `null`
//! (e.g. `Option::None`) are never stored: inserting one removes the key.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BotApiError, Result};

/// Ordered mapping from wire keys to JSON values. Insertion order is kept for logging only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParameterBag {
    entries: Map<String, Value>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `value` and stores it under `key`, replacing any previous value.
    ///
    /// A `null` value removes the key. Fails on an empty key or when `value` cannot be serialized;
    /// the bag is left unchanged in both cases.
    pub fn insert<V>(&mut self, key: &str, value: V) -> Result<()>
    where
        V: Serialize,
    {
        if key.is_empty() {
            return Err(BotApiError::InvalidParameter(
                "parameter key must not be empty".to_string(),
            ));
        }
        let value = serde_json::to_value(value).map_err(|e| {
            BotApiError::InvalidParameter(format!("cannot serialize `{}`: {}", key, e))
        })?;
        if value.is_null() {
            self.entries.shift_remove(key);
        } else {
            self.entries.insert(key.to_string(), value);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The bag as a JSON object, e.g. for a request body.
    pub fn to_json(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }
}
