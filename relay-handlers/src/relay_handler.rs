//! Catch-all: typing indicator, one inference call, reply with whatever text came back.

use async_trait::async_trait;
use hf_inference::{InferenceClient, UNEXPECTED_RESPONSE_REPLY};
use relay_core::{Bot, Handler, HandlerResponse, Message, MessageKind, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Relays every text message to the inference client and replies with the result.
/// Text-less messages are ignored.
pub struct RelayHandler {
    bot: Arc<dyn Bot>,
    inference: Arc<dyn InferenceClient>,
}

impl RelayHandler {
    pub fn new(bot: Arc<dyn Bot>, inference: Arc<dyn InferenceClient>) -> Self {
        Self { bot, inference }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.kind() == MessageKind::Empty {
            info!(user_id = message.user.id, "step: no text, ignoring");
            return Ok(HandlerResponse::Ignore);
        }
        let text = message.text()?;

        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(error = %e, "Failed to send typing indicator");
        }

        info!(user_id = message.user.id, text_len = text.len(), "step: relaying to inference");
        let mut reply = self.inference.reply_for(text).await;
        // Telegram rejects empty messages.
        if reply.trim().is_empty() {
            warn!("Model returned empty text");
            reply = UNEXPECTED_RESPONSE_REPLY.to_string();
        }

        self.bot.reply_to(message, &reply).await?;
        info!(reply_len = reply.len(), "step: reply sent");
        Ok(HandlerResponse::Reply(reply))
    }
}
