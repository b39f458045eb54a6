use thiserror::Error;

/// Failure reported by a storage backend.
///
/// The message is for logs only; callers of the HTTP surface never see it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The request never reached storage (timeout, dispatch failure).
    #[error("storage unreachable: {0}")]
    ConnectionFailed(String),
    /// Storage received the request and rejected it.
    #[error("storage request failed: {0}")]
    QueryFailed(String),
    /// A stored record could not be decoded.
    #[error("malformed stored record: {0}")]
    InvalidData(String),
}
