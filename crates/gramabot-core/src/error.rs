use thiserror::Error;

/// Top-level error type for GramaBot.
///
/// Subsystem crates define their own error types and implement
/// `From<GramabotError>` so that `?` works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GramabotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl From<toml::de::Error> for GramabotError {
    fn from(err: toml::de::Error) -> Self {
        GramabotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for GramabotError {
    fn from(err: toml::ser::Error) -> Self {
        GramabotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for GramabotError {
    fn from(err: serde_json::Error) -> Self {
        GramabotError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for GramaBot operations.
pub type Result<T> = std::result::Result<T, GramabotError>;
