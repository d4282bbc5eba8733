// File: src/error.rs
use thiserror::Error;

/// Why a translation key was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Translation key must not be empty.")]
    Empty,
    #[error("Translation key must not contain white spaces.")]
    ContainsWhitespace,
    #[error("Translation key must be valid C# variable name.")]
    NotAnIdentifier,
    #[error("Translation key must not be a C# keyword unless prefixed with '@'.")]
    ReservedWord,
}

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not persist store: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("invalid key \"{key}\": {reason}")]
    InvalidKey { key: String, reason: KeyError },

    #[error("translation key \"{0}\" already in use. Keys must be unique.")]
    KeyExists(String),

    #[error("translation key \"{0}\" not found")]
    KeyNotFound(String),

    #[error("invalid culture tag \"{0}\"")]
    InvalidCulture(String),

    #[error("no translations loaded for culture \"{0}\"")]
    UnknownCulture(String),

    #[error("no culture selected")]
    NoCultureSelected,

    #[error("malformed {command} command: expected {expected}")]
    MalformedCommand {
        command: &'static str,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FinderError>;
