//! # relay-core
//!
//! Core types and traits for the relay bot: [`Bot`], [`Handler`], message and user types,
//! [`MessageKind`] classification, and tracing initialization. Transport-agnostic; used by
//! relay-telegram, handler-chain and relay-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, RelayError, Result};
pub use logger::{init_tracing, LogConsole};
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageKind, ToCoreMessage, ToCoreUser, User,
};
