//! # Hugging Face inference client
//!
//! Sends one user utterance, wrapped in the Mistral instruction template, to the hosted
//! text-generation endpoint and returns the generated continuation.
//!
//! [`InferenceClient::generate`] reports failures as [`InferenceError`];
//! [`InferenceClient::reply_for`] never fails and turns every error into a user-facing
//! text (model loading, communication failure, unexpected response). No retries.

use async_trait::async_trait;

mod client;
mod config;
mod error;
mod prompt;
mod replies;

pub use client::{parse_generated_text, GenerationParameters, HuggingFaceClient, InferenceRequest};
pub use config::{InferenceConfig, DEFAULT_API_BASE, MODEL_ID, REQUEST_TIMEOUT};
pub use error::{InferenceError, MODEL_LOADING_MARKER};
pub use prompt::{format_prompt, PROMPT_PREFIX, PROMPT_SUFFIX};
pub use replies::{
    reply_for_error, COMMUNICATION_FAILURE_REPLY, MODEL_LOADING_REPLY, UNEXPECTED_RESPONSE_REPLY,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Text generation for a single utterance.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// One attempt at generating a reply for `utterance`.
    async fn generate(&self, utterance: &str) -> Result<String, InferenceError>;

    /// Like [`generate`](Self::generate), with failures replaced by their user-facing text.
    async fn reply_for(&self, utterance: &str) -> String {
        match self.generate(utterance).await {
            Ok(text) => text,
            Err(e) => reply_for_error(&e).to_string(),
        }
    }
}
