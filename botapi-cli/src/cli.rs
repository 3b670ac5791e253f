//! CLI parser and config loading.

use std::convert::Infallible;

use anyhow::Result;
use botapi_core::{ChatId, MessageRef, ParseMode, UpdateKind};
use botapi_http::HttpConfig;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "botapi")]
#[command(about = "Call bot API methods from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot token; overrides BOT_TOKEN.
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bot's own account.
    GetMe,
    /// Send a text message.
    SendMessage {
        /// Numeric chat id or @username.
        #[arg(short, long, value_parser = parse_chat_id)]
        chat: ChatId,
        #[arg(long)]
        text: String,
        /// MarkdownV2, Markdown or HTML.
        #[arg(long)]
        parse_mode: Option<ParseMode>,
    },
    /// Replace the caption of a media message.
    EditCaption {
        #[command(flatten)]
        message: MessageArgs,
        #[arg(long)]
        caption: String,
        #[arg(long)]
        parse_mode: Option<ParseMode>,
        /// Show the caption above the media.
        #[arg(long)]
        above_media: bool,
    },
    /// Fetch pending updates once.
    GetUpdates {
        #[arg(long)]
        offset: Option<i64>,
        #[arg(long)]
        limit: Option<u8>,
        /// Comma-separated update kinds, e.g. message,callback_query.
        #[arg(long, value_delimiter = ',')]
        allowed: Vec<UpdateKind>,
    },
}

/// Numeric ids become [`ChatId::Id`], anything else a username. clap would otherwise pick
/// `From<String>` and send every chat as a username.
fn parse_chat_id(s: &str) -> std::result::Result<ChatId, Infallible> {
    s.parse()
}

/// Addresses an existing message: `--chat` with `--message-id`, or `--inline-message-id`.
#[derive(Args, Debug)]
pub struct MessageArgs {
    #[arg(
        long,
        value_parser = parse_chat_id,
        requires = "message_id",
        conflicts_with = "inline_message_id"
    )]
    pub chat: Option<ChatId>,
    #[arg(long, requires = "chat")]
    pub message_id: Option<i64>,
    #[arg(long)]
    pub inline_message_id: Option<String>,
}

impl MessageArgs {
    pub fn to_message_ref(&self) -> Result<MessageRef> {
        match (&self.chat, self.message_id, &self.inline_message_id) {
            (Some(chat), Some(message_id), None) => {
                Ok(MessageRef::chat(chat.clone(), message_id))
            }
            (None, None, Some(inline)) => Ok(MessageRef::inline(inline.clone())),
            _ => anyhow::bail!("pass either --chat with --message-id, or --inline-message-id"),
        }
    }
}

/// Load HttpConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<HttpConfig> {
    Ok(HttpConfig::load(token)?)
}
