use thiserror::Error;

/// Marker the Inference API puts in error bodies while a cold model is being loaded.
pub const MODEL_LOADING_MARKER: &str = "is currently loading";

/// Why a generation call produced no text.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// Timeout, connection refused, TLS failure and similar; no usable HTTP response.
    #[error("transport error: {detail}")]
    Transport { detail: String },

    /// The endpoint answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// 2xx response whose body is not a non-empty array of objects with `generated_text`.
    #[error("unexpected response: {payload}")]
    UnexpectedResponse { payload: String },
}

impl InferenceError {
    /// Best-effort detection of a cold model. Relies on provider wording, so it may miss.
    pub fn is_model_loading(&self) -> bool {
        match self {
            InferenceError::Transport { detail } => detail.contains(MODEL_LOADING_MARKER),
            InferenceError::Status { body, .. } => body.contains(MODEL_LOADING_MARKER),
            InferenceError::UnexpectedResponse { .. } => false,
        }
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(e: reqwest::Error) -> Self {
        InferenceError::Transport {
            detail: e.to_string(),
        }
    }
}
