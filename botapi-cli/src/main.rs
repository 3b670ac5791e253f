//! botapi CLI: call single bot API methods. Config from env (and `.env`) plus CLI args.

use anyhow::Result;
use botapi_cli::{load_config, run, Cli};
use botapi_core::{init_tracing, Bot};
use botapi_http::HttpRequestSender;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.token)?;
    init_tracing(config.log_file.as_deref())?;

    let bot = Bot::new(HttpRequestSender::from_config(&config)?);
    run(&bot, cli.command, &mut std::io::stdout()).await
}
