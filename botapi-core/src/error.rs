use thiserror::Error;

use crate::response::ResponseParameters;

/// Boxed source error carried by [`BotApiError::Transport`].
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum BotApiError {
    /// The server answered with `ok: false`.
    #[error("API error {code}: {description}")]
    Api {
        code: i64,
        description: String,
        parameters: Option<ResponseParameters>,
    },

    /// The sender failed before producing a response envelope.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportSource),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl BotApiError {
    /// Wraps any error as a transport failure, keeping it as the source.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<TransportSource>,
    {
        BotApiError::Transport(err.into())
    }

    /// True if the server rejected the call.
    pub fn is_api(&self) -> bool {
        matches!(self, BotApiError::Api { .. })
    }

    /// Numeric code of an API error, if this is one.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            BotApiError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BotApiError>;
