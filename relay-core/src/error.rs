use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Transport failure while talking to the chat platform (send, reply, typing).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,
}

pub type Result<T> = std::result::Result<T, RelayError>;
