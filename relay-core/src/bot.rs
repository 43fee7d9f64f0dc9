//! Bot abstraction for outbound chat actions: replies and the typing indicator.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide and tests substitute mocks.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for replying and showing chat actions. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `text` as a reply to `message` (same chat, quoting the original).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Shows a transient "typing" indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
