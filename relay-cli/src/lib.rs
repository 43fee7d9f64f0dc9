//! # relay-cli
//!
//! Command-line entry for the relay bot: argument parsing, env config with fail-fast credential
//! checks, and wiring of the Telegram transport, dispatcher and inference client.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{ask, run_bot};
pub use cli::{Cli, Commands};
pub use config::AppConfig;
