//! Persistence error types.

use thiserror::Error;

/// Store errors - any failure of the document store.
///
/// Handlers never show these to the client; they are logged and the
/// request falls back to a safe view.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Post not found")]
    NotFound,

    #[error("Invalid post id: {0}")]
    InvalidId(String),
}
