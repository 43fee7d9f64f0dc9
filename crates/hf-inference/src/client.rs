//! [`HuggingFaceClient`]: one POST per utterance against the hosted text-generation endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::{InferenceConfig, MODEL_ID};
use crate::error::InferenceError;
use crate::prompt::format_prompt;
use crate::{mask_token, InferenceClient};

/// Fixed generation settings sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 500,
            temperature: 0.7,
            return_full_text: false,
        }
    }
}

/// Request body for the text-generation task.
#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: String,
    pub parameters: &'a GenerationParameters,
}

#[derive(Debug, Deserialize)]
struct GenerationOutput {
    #[serde(default)]
    generated_text: Option<String>,
}

/// Extracts the first `generated_text` from a success body, trimmed.
pub fn parse_generated_text(body: &str) -> Result<String, InferenceError> {
    let unexpected = || InferenceError::UnexpectedResponse {
        payload: body.to_string(),
    };
    let outputs: Vec<GenerationOutput> = serde_json::from_str(body).map_err(|_| unexpected())?;
    outputs
        .into_iter()
        .next()
        .and_then(|first| first.generated_text)
        .map(|text| text.trim().to_string())
        .ok_or_else(unexpected)
}

/// Hugging Face Inference API client bound to [`MODEL_ID`].
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    endpoint: String,
    api_key: String,
    parameters: GenerationParameters,
}

impl HuggingFaceClient {
    /// Builds the HTTP client with the configured timeout. Does not touch the network.
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
            parameters: GenerationParameters::default(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    #[instrument(skip(self, utterance), fields(utterance_len = utterance.len()))]
    async fn generate(&self, utterance: &str) -> Result<String, InferenceError> {
        info!(
            model = %MODEL_ID,
            api_key = %mask_token(&self.api_key),
            "step: inference request"
        );

        let request = InferenceRequest {
            inputs: format_prompt(utterance),
            parameters: &self.parameters,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = parse_generated_text(&body)?;
        info!(reply_len = text.len(), "step: inference done");
        Ok(text)
    }
}
