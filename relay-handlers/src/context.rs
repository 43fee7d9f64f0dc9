//! Application context built once at startup and handed to the dispatcher.

use handler_chain::HandlerChain;
use hf_inference::InferenceClient;
use relay_core::Bot;
use std::sync::Arc;

use crate::{RelayHandler, StartCommandHandler};

/// Everything a message needs: outbound bot and inference client.
#[derive(Clone)]
pub struct AppContext {
    pub bot: Arc<dyn Bot>,
    pub inference: Arc<dyn InferenceClient>,
}

impl AppContext {
    pub fn new(bot: Arc<dyn Bot>, inference: Arc<dyn InferenceClient>) -> Self {
        Self { bot, inference }
    }

    /// `/start` first, catch-all relay last.
    pub fn handler_chain(&self) -> HandlerChain {
        HandlerChain::new()
            .add_handler(Arc::new(StartCommandHandler::new(self.bot.clone())))
            .add_handler(Arc::new(RelayHandler::new(
                self.bot.clone(),
                self.inference.clone(),
            )))
    }
}
