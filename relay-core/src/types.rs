//! Core types: user, chat, message, message kind, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HandlerError, Result};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message. `content` is empty for updates that carry no text (stickers, photos).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub message_type: String,
    pub created_at: DateTime<Utc>,
}

/// What a message is, as far as dispatch is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// `/name[@addressee] ...`. `name` has the leading slash stripped; arguments are not kept.
    Command {
        name: String,
        addressee: Option<String>,
    },
    /// Plain text, including anything that merely starts with "/" but has no command name.
    Text,
    /// No text at all.
    Empty,
}

impl MessageKind {
    /// Classifies raw message text.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return MessageKind::Empty;
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return MessageKind::Text;
        };
        let head = rest.split(char::is_whitespace).next().unwrap_or("");
        let (name, addressee) = match head.split_once('@') {
            Some((name, addressee)) => (name, Some(addressee.to_string())),
            None => (head, None),
        };
        if name.is_empty() {
            return MessageKind::Text;
        }
        MessageKind::Command {
            name: name.to_string(),
            addressee,
        }
    }

    /// True when this is `/name`. Any `@addressee` is ignored, so `/start@some_bot` is still `start`.
    pub fn is_command(&self, command: &str) -> bool {
        matches!(self, MessageKind::Command { name, .. } if name == command)
    }
}

impl Message {
    /// Classifies this message's text.
    pub fn kind(&self) -> MessageKind {
        MessageKind::parse(&self.content)
    }

    /// Returns the text, or [`HandlerError::NoText`] for text-less updates.
    pub fn text(&self) -> Result<&str> {
        if self.content.trim().is_empty() {
            return Err(HandlerError::NoText.into());
        }
        Ok(&self.content)
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent back.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of the handler chain. Return Reply to end the chain; Continue or Ignore passes to the next handler.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse>;
}
