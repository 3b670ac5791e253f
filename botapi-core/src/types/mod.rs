//! Protocol types: user, chat, message, entities, keyboards, updates and enum constants.
//!
//! Types are split into one file per main type for easier navigation.

mod chat;
mod markup;
mod message;
mod parse_mode;
mod update;
mod user;

pub use chat::{Chat, ChatKind};
pub use markup::{InlineKeyboardButton, InlineKeyboardMarkup};
pub use message::{EditedMessage, Message, MessageEntity, MessageEntityKind};
pub use parse_mode::ParseMode;
pub use update::{ParseUpdateKindError, Update, UpdateKind};
pub use user::User;
