//! # Store Errors
//!
//! Errors reported by the persistence layer. Messages are surfaced verbatim
//! to HTTP callers, so they carry the store's own wording.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a store call can produce.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store (or the transport to it) reported a failure.
    #[error("{0}")]
    Backend(String),

    /// A single-row read matched zero or more than one row.
    ///
    /// Wording matches what the hosted store's REST interface reports for
    /// a failed single-object request.
    #[error("JSON object requested, multiple (or no) rows returned")]
    NotSingleRow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_is_verbatim() {
        let err = StoreError::Backend("connection reset by peer".to_string());
        assert_eq!(err.to_string(), "connection reset by peer");
    }
}
