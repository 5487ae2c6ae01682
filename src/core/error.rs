//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`StorageError`] - sessionStorage/localStorage access (always recovered locally)
//! - [`FetchError`] - transport failures for HTTP requests
//! - [`ApiError`] - what the API client surfaces to pages

use thiserror::Error;

/// Key-value storage errors.
///
/// Never propagated past the cache, identity holder or transfer slot;
/// callers downgrade them to a miss or a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage area not available (no window, disabled, private mode).
    #[error("storage not available")]
    Unavailable,
    /// Failed to read from storage.
    #[error("failed to read from storage")]
    ReadFailed,
    /// Failed to write to storage (quota exceeded, etc.).
    #[error("failed to write to storage")]
    WriteFailed,
    /// Failed to remove from storage.
    #[error("failed to remove from storage")]
    RemoveFailed,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
}

/// Errors returned by [`ApiClient`](crate::core::ApiClient) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Rejected locally before any request was made.
    #[error("{0}")]
    InvalidInput(String),
    /// Backend answered with a non-2xx status, or reported failure in-band.
    #[error("{message}")]
    Request { status: Option<u16>, message: String },
    /// The request never produced a response.
    #[error(transparent)]
    Network(#[from] FetchError),
    /// A 2xx response whose body does not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
