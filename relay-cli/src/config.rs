//! Application config: Telegram transport + inference API + optional log file. Loaded from env.
//! Both credentials are checked here, before any client is built or connection attempted.

use anyhow::Result;
use hf_inference::InferenceConfig;
use relay_telegram::TelegramConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub inference: InferenceConfig,
    /// LOG_FILE; logs go to stdout only when unset.
    pub log_file: Option<String>,
}

impl AppConfig {
    /// Loads from env. `token` overrides TELEGRAM_BOT_TOKEN. Fails if either credential is missing.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let inference = InferenceConfig::from_env()?;
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());
        let config = Self {
            telegram,
            inference,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.inference.validate()?;
        Ok(())
    }
}
