//! # botapi-core
//!
//! Typed request builders for the bot HTTP API: [`ParameterBag`], addressing [`Target`]s,
//! the generic [`Request`] builder and its [`RequestSender`] transport seam, endpoint builders,
//! protocol types, the [`Bot`] facade and tracing initialization. Transport-agnostic; the HTTP
//! sender lives in `botapi-http`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod params;
pub mod request;
pub mod requests;
pub mod response;
pub mod sender;
pub mod target;
pub mod types;

pub use bot::Bot;
pub use error::{BotApiError, Result, TransportSource};
pub use logger::{init_tracing, init_tracing_with};
pub use params::ParameterBag;
pub use request::{ApiRequest, Request, RequestDescriptor};
pub use requests::{
    DeleteMessage, EditMessageCaption, EditMessageReplyMarkup, EditMessageText, GetMe, GetUpdates,
    SendMessage,
};
pub use response::{ResponseEnvelope, ResponseParameters};
pub use sender::RequestSender;
pub use target::{ChatId, MessageRef, Target};
pub use types::{
    Chat, ChatKind, EditedMessage, InlineKeyboardButton, InlineKeyboardMarkup, Message,
    MessageEntity, MessageEntityKind, ParseMode, Update, UpdateKind, User,
};
