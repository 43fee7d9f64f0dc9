//! Long-poll REPL: each teloxide message becomes a core::Message and runs through the HandlerChain.
//!
//! teloxide delivers updates of one chat in order and different chats concurrently; the chain is
//! awaited inside the REPL callback, so a slow inference call only holds back its own chat.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Runs one message through the chain and logs the outcome. Never fails.
pub async fn dispatch(chain: &HandlerChain, msg: &teloxide::types::Message) {
    let core_msg = TelegramMessageWrapper(msg).to_core();

    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        message_type = %core_msg.message_type,
        "Received message"
    );

    match chain.handle(&core_msg).await {
        Ok(response) => {
            info!(
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                response = ?response,
                "step: message processed"
            );
        }
        Err(e) => {
            error!(
                error = %e,
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                "Handler chain failed"
            );
        }
    }
}

/// Starts long polling and feeds every message to `handler_chain`. Returns when polling stops (e.g. Ctrl-C).
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    info!("Bot is running...");

    teloxide::repl(bot, move |_bot: Bot, msg: Message| {
        let chain = handler_chain.clone();
        async move {
            dispatch(&chain, &msg).await;
            Ok(())
        }
    })
    .await;

    info!("Bot stopped");
    Ok(())
}
