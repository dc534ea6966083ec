//! Sink error types.
//!
//! Failures delivering a terminal report. None of these mutate the
//! report; a failed delivery leaves the session result intact.

use thiserror::Error;

/// Errors that can occur when delivering a report to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Authentication rejected (invalid or expired token).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The backend returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),
}
