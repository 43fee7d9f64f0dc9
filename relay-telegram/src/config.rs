//! Transport config: bot token and optional custom Bot API server.
//! Loaded from TELEGRAM_BOT_TOKEN and TELEGRAM_API_URL / TELOXIDE_API_URL.

use anyhow::{Context, Result};
use std::env;

/// Minimal Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides TELEGRAM_BOT_TOKEN; a blank token counts as unset.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_BOT_TOKEN").ok())
            .filter(|s| !s.trim().is_empty())
            .context("TELEGRAM_BOT_TOKEN not set")?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Uses the given token; no custom API server.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks that a custom API URL, when set, parses.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide bot. No request is made.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        self.validate()?;
        let bot = teloxide::Bot::new(&self.bot_token);
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid Telegram API URL: {}", url_str))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
