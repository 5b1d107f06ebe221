//! Error types shared across the crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DictError {
    /// An error originating from I/O operations, e.g. a missing word list.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A word contained a character outside A-Z after case folding.
    #[error("word {word:?} contains non-alphabetic character {character:?}")]
    InvalidCharacter { word: String, character: char },

    /// A word must contain at least one letter.
    #[error("empty word")]
    EmptyWord,

    /// A line that does not parse as any known command.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

impl DictError {
    /// True for errors caused by the word itself rather than the environment.
    pub fn is_invalid_word(&self) -> bool {
        matches!(
            self,
            DictError::InvalidCharacter { .. } | DictError::EmptyWord
        )
    }
}

/// A convenience `Result` type alias using the crate's `DictError` type.
pub type Result<T> = std::result::Result<T, DictError>;
