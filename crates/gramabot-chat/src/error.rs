//! Error types for the conversational interface.

use gramabot_core::error::GramabotError;

/// Errors from the chat engine.
///
/// The resolver itself never fails; these cover the surfaces around it.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("message not found: {0}")]
    MessageNotFound(uuid::Uuid),
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("no bot reply to rate")]
    NothingToRate,
    #[error("unknown service group: {0}")]
    UnknownServiceGroup(String),
    #[error("invalid response catalog: {0}")]
    InvalidCatalog(String),
    #[error("voice error: {0}")]
    VoiceError(String),
    #[error("storage error: {0}")]
    StorageError(String),
}

impl From<GramabotError> for ChatError {
    fn from(err: GramabotError) -> Self {
        match err {
            GramabotError::Config(msg) | GramabotError::Serialization(msg) => {
                ChatError::InvalidCatalog(msg)
            }
            other => ChatError::StorageError(other.to_string()),
        }
    }
}
