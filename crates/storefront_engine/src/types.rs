use storefront_core::Product;
use thiserror::Error;

/// Events the engine reports back to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Progress(FetchProgress),
    CatalogCompleted {
        result: Result<Vec<Product>, FetchError>,
    },
}

/// Byte count observed so far for the in-flight download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Classification of fetch failures. Every variant collapses into the same
/// user-facing failure message; the kind exists for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("invalid catalog body")]
    InvalidBody,
    #[error("cancelled")]
    Cancelled,
    #[error("network error")]
    Network,
}
