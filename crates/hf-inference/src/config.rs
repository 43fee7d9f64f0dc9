//! Inference API configuration loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Hosted model every request goes to.
pub const MODEL_ID: &str = "mistralai/Mistral-7B-Instruct-v0.2";
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";
/// Upper bound for a single generation call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Inference API access: bearer token, base URL, request timeout.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub api_key: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl InferenceConfig {
    /// Builds a config with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads from env: HUGGINGFACE_API_KEY required (non-blank), HF_API_BASE optional.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("HUGGINGFACE_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("HUGGINGFACE_API_KEY not set")?;
        let api_base = env::var("HF_API_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Ok(Self::new(api_key).with_api_base(api_base))
    }

    /// Checks that the base URL parses as http(s).
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api_base)
            .with_context(|| format!("HF_API_BASE is not a valid URL: {}", self.api_base))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("HF_API_BASE must be http or https: {}", self.api_base);
        }
        Ok(())
    }

    /// Full endpoint URL for [`MODEL_ID`].
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}", self.api_base.trim_end_matches('/'), MODEL_ID)
    }
}
