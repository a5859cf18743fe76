use thiserror::Error;

/// Errors raised while loading a stroke database or validating configuration.
/// Matching itself never fails.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LookupError {
    #[error("failed to parse database JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode substroke data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to read or write binary database: {0}")]
    Binary(#[from] bincode::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("entry {index} ({hanzi:?}): substrokes {start}..{end} exceed data length {len}")]
    EntryOutOfBounds {
        index: usize,
        hanzi: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("entry {index} has an empty character label")]
    EmptyLabel { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
