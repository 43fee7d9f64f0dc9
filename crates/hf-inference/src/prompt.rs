//! Instruction template for Mistral-Instruct models.

/// Opening markup placed before the user text.
pub const PROMPT_PREFIX: &str = "<s>[INST] ";
/// Closing markup placed after the user text.
pub const PROMPT_SUFFIX: &str = " [/INST]";

/// Wraps raw user text in the instruction delimiters. The text is inserted verbatim.
pub fn format_prompt(user_text: &str) -> String {
    format!("{PROMPT_PREFIX}{user_text}{PROMPT_SUFFIX}")
}
