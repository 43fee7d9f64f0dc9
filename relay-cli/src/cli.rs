//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "relay-bot")]
#[command(about = "Telegram bot relaying messages to the Hugging Face Inference API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Send one message to the model and print the reply (needs only HUGGINGFACE_API_KEY).
    Ask {
        /// Text to send.
        text: String,
    },
}
