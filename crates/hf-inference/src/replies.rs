//! User-facing texts for failed generations, and the mapping from [`InferenceError`] to them.

use crate::error::InferenceError;
use tracing::{error, warn};

/// The model is cold on the provider side; the user should retry in a few minutes.
pub const MODEL_LOADING_REPLY: &str =
    "مدل در حال بارگذاری است، لطفاً چند دقیقه دیگر دوباره تلاش کنید.";
/// Any transport or API failure.
pub const COMMUNICATION_FAILURE_REPLY: &str =
    "متاسفانه مشکلی در ارتباط با Hugging Face پیش آمد.";
/// The API answered 2xx but not with generated text.
pub const UNEXPECTED_RESPONSE_REPLY: &str = "پاسخ غیرمنتظره‌ای از مدل دریافت شد.";

/// Picks the user-facing text for `err` and records the raw detail for operators.
pub fn reply_for_error(err: &InferenceError) -> &'static str {
    if err.is_model_loading() {
        warn!(error = %err, "Inference model is still loading");
        return MODEL_LOADING_REPLY;
    }
    match err {
        InferenceError::UnexpectedResponse { payload } => {
            error!(payload = %payload, "Unexpected Inference API response format");
            UNEXPECTED_RESPONSE_REPLY
        }
        InferenceError::Transport { .. } | InferenceError::Status { .. } => {
            error!(error = %err, "Error calling Hugging Face Inference API");
            COMMUNICATION_FAILURE_REPLY
        }
    }
}
