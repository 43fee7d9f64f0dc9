//! # relay-telegram
//!
//! Telegram transport layer: adapters, [`relay_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no inference logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{parse_message_id, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{dispatch, run_repl};
