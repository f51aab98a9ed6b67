// ABOUTME: Defines all error types for the autosave library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under AutosaveError.

/// Top-level error type for the autosave library.
#[derive(Debug, thiserror::Error)]
pub enum AutosaveError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from save backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Errors from the in-memory project store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project not found: {0}")]
    NotFound(i64),
}
