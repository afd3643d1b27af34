use thiserror::Error;

pub const GENERATION_TIMED_OUT: &str = "generation timed out";
pub const REQUEST_TIMED_OUT: &str = "request to the generation service timed out";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Provider,
    Timeout,
    Unexpected,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArtError {
    /// Missing or malformed user input. Never retried.
    #[error("{0}")]
    Validation(String),
    /// Non-success status or embedded error reported by the provider.
    #[error("Provider error: {0}")]
    Provider(String),
    /// Either a per-call network timeout or an exhausted poll budget.
    #[error("{0}")]
    Timeout(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ArtError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArtError::Validation(_) => ErrorKind::Validation,
            ArtError::Provider(_) => ErrorKind::Provider,
            ArtError::Timeout(_) => ErrorKind::Timeout,
            ArtError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ArtError::Validation(msg)
            | ArtError::Provider(msg)
            | ArtError::Timeout(msg)
            | ArtError::Unexpected(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for ArtError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ArtError::Timeout(REQUEST_TIMED_OUT.to_string())
        } else {
            ArtError::Unexpected(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ArtError {
    fn from(e: serde_json::Error) -> Self {
        ArtError::Unexpected(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArtError>;
