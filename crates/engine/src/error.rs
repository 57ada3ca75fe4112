use count_tokens_core::NotFound;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid extension mapping: {0}")]
    InvalidExtMapping(String),

    #[error("Unknown extension: {0}")]
    UnknownExtension(#[from] NotFound),
}

impl EngineError {
    /// Files without a registered lexer are skipped, never fatal.
    #[must_use]
    pub const fn is_skippable(&self) -> bool {
        matches!(self, Self::UnknownExtension(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
