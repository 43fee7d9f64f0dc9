//! `/start`: fixed greeting, no inference call.

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

pub const START_COMMAND: &str = "start";

/// Greeting naming the backing model.
pub const GREETING: &str = "سلام! من با مدل Mistral از Hugging Face کار می‌کنم.";

/// Replies to `/start` (with or without an `@addressee`) with [`GREETING`]; everything else continues.
pub struct StartCommandHandler {
    bot: Arc<dyn Bot>,
}

impl StartCommandHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    pub fn matches(&self, message: &Message) -> bool {
        message.kind().is_command(START_COMMAND)
    }
}

#[async_trait]
impl Handler for StartCommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !self.matches(message) {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, "step: start command, sending greeting");
        self.bot.reply_to(message, GREETING).await?;
        Ok(HandlerResponse::Reply(GREETING.to_string()))
    }
}
