//! Custom error types for folio

use thiserror::Error;

/// Main error type for folio operations.
///
/// Display intentionally carries only the bare message; the failure class
/// is available separately via [`Error::kind`] so the `/ask` boundary can
/// compose its `"Backend error: <Kind>: <message>"` answer without
/// duplicating prefixes.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Connection(String),

    #[error("{0}")]
    Embedding(String),

    #[error("{0}")]
    Chat(String),

    #[error("{0}")]
    Search(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    UrlParse(#[from] url::ParseError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("{0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Short class name for the user-facing failure string.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "ConfigError",
            Error::Connection(_) => "ConnectionError",
            Error::Embedding(_) => "EmbeddingError",
            Error::Chat(_) => "ChatError",
            Error::Search(_) => "SearchError",
            Error::Io(_) => "IoError",
            Error::UrlParse(_) => "UrlError",
            Error::Json(_) => "JsonError",
            Error::TomlParse(_) | Error::TomlSerialize(_) => "TomlError",
        }
    }
}

/// Result type alias for folio
pub type Result<T> = std::result::Result<T, Error>;
