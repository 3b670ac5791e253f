//! Inline keyboards attached to messages.

use serde::{Deserialize, Serialize};

/// Rows of buttons shown under a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new<R>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = InlineKeyboardButton>,
    {
        Self {
            inline_keyboard: rows.into_iter().map(|r| r.into_iter().collect()).collect(),
        }
    }

    /// Appends a row and returns the markup.
    pub fn row(mut self, buttons: impl IntoIterator<Item = InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(buttons.into_iter().collect());
        self
    }
}

/// One button: a URL or a callback payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            callback_data: None,
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(data.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_markup_serialization() {
        let markup = InlineKeyboardMarkup::default()
            .row([
                InlineKeyboardButton::callback("Yes", "y"),
                InlineKeyboardButton::callback("No", "n"),
            ])
            .row([InlineKeyboardButton::url("Docs", "https://example.com")]);
        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({"inline_keyboard": [
                [{"text": "Yes", "callback_data": "y"}, {"text": "No", "callback_data": "n"}],
                [{"text": "Docs", "url": "https://example.com"}]
            ]})
        );
    }
}
