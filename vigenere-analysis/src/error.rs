//! Error types for cipher and cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum VigenereError {
    #[error("Symbol '{0}' is not part of the cipher alphabet")]
    OutOfAlphabet(char),

    #[error("Key must contain at least one symbol")]
    EmptyKey,

    #[error("Text too short for analysis ({letters} letters, {required} required)")]
    TextTooShort { letters: usize, required: usize },

    #[error("Invalid length ratio (must be > 0)")]
    InvalidLengthRatio,

    #[error("Invalid frequency profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, VigenereError>;
