//! Wiring: config → tracing → clients → AppContext → handler chain → long polling.

use anyhow::{Context, Result};
use hf_inference::{HuggingFaceClient, InferenceClient, InferenceConfig, MODEL_ID};
use relay_core::{init_tracing, LogConsole};
use relay_handlers::AppContext;
use relay_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::AppConfig;

/// Builds every component from an already validated config and runs the bot until polling stops.
#[instrument(skip(config))]
pub async fn run_bot(config: AppConfig) -> Result<()> {
    init_tracing(config.log_file.as_deref(), LogConsole::Stdout)?;

    let teloxide_bot = config.telegram.build_bot()?;
    let inference = HuggingFaceClient::new(&config.inference)?;
    info!(
        model = %MODEL_ID,
        endpoint = %inference.endpoint(),
        log_file = ?config.log_file,
        "Initializing bot"
    );

    let context = AppContext::new(
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        Arc::new(inference),
    );
    let handler_chain = context.handler_chain();

    run_repl(teloxide_bot, handler_chain).await
}

/// One-shot query through the same client and failure mapping the bot uses.
/// Logs go to stderr so stdout carries only the reply.
pub async fn ask(text: &str) -> Result<String> {
    let config = InferenceConfig::from_env()?;
    config.validate()?;
    init_tracing(None, LogConsole::Stderr)?;

    let client = HuggingFaceClient::new(&config).context("Build inference client")?;
    Ok(client.reply_for(text).await)
}
