//! relay-bot: run the Telegram relay, or ask the model once from the terminal.

use anyhow::Result;
use clap::Parser;
use relay_cli::{ask, run_bot, AppConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = AppConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Ask { text } => {
            let reply = ask(&text).await?;
            println!("{}", reply);
            Ok(())
        }
    }
}
