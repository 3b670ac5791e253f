//! Subcommand handlers. Each builds one request through [`Bot`], sends it and prints the
//! result as pretty JSON.

use std::io::Write;

use anyhow::{Context, Result};
use botapi_core::{ApiRequest, Bot};
use serde::Serialize;

use crate::cli::Commands;

/// Runs `command` against `bot` and writes the JSON result to `out`.
pub async fn run<W: Write>(bot: &Bot, command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::GetMe => {
            let me = bot.get_me().send().await.context("getMe failed")?;
            print_json(out, &me)
        }
        Commands::SendMessage {
            chat,
            text,
            parse_mode,
        } => {
            let mut request = bot.send_message(chat, text);
            if let Some(mode) = parse_mode {
                request = request.parse_mode(mode);
            }
            let message = request.send().await.context("sendMessage failed")?;
            print_json(out, &message)
        }
        Commands::EditCaption {
            message,
            caption,
            parse_mode,
            above_media,
        } => {
            let mut request = bot
                .edit_message_caption(message.to_message_ref()?)
                .caption(caption);
            if above_media {
                request = request.show_caption_above_media(true);
            }
            if let Some(mode) = parse_mode {
                request = request.parse_mode(mode);
            }
            let edited = request.send().await.context("editMessageCaption failed")?;
            print_json(out, &edited)
        }
        Commands::GetUpdates {
            offset,
            limit,
            allowed,
        } => {
            let mut request = bot.get_updates();
            if let Some(offset) = offset {
                request = request.offset(offset);
            }
            if let Some(limit) = limit {
                request = request.limit(limit);
            }
            if !allowed.is_empty() {
                request = request.allowed_updates(allowed);
            }
            let updates = request.send().await.context("getUpdates failed")?;
            tracing::info!(count = updates.len(), "updates received");
            print_json(out, &updates)
        }
    }
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
