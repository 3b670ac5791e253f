//! # botapi-cli
//!
//! Argument parsing, config loading and subcommand handlers for the `botapi` binary.

pub mod cli;
pub mod commands;

pub use cli::{load_config, Cli, Commands, MessageArgs};
pub use commands::run;
