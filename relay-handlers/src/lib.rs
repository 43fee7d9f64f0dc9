//! # relay-handlers
//!
//! The message dispatcher: [`StartCommandHandler`] answers `/start` with a fixed greeting,
//! [`RelayHandler`] forwards every other text to the inference client and replies with its answer.
//! [`AppContext`] assembles them, in that order, into a [`handler_chain::HandlerChain`].

mod context;
mod relay_handler;
mod start_handler;

pub use context::AppContext;
pub use relay_handler::RelayHandler;
pub use start_handler::{StartCommandHandler, GREETING, START_COMMAND};
