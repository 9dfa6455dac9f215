//! # Common Error Types
//!
//! Consolidated error handling for the desk client.
//!
//! Every operation that can fail resolves to [`AppError`]. The taxonomy is
//! fixed:
//!
//! - **Validation**: a client-side precondition failed before any network
//!   call (bad amount, out-of-range duration, missing required field).
//! - **Unauthorized**: the backend rejected the credentials or token
//!   (401/403-class responses).
//! - **NotFound**: the requested entity does not exist (404-class).
//! - **InvalidState**: a domain precondition failed, e.g. recording a
//!   repayment against a credit that is not accepted.
//! - **Network**: transport-level failure (connection refused, timeout,
//!   unparsable response) or any unexpected status.
//! - **Server**: the backend failed (5xx-class).
//!
//! `Validation` and `InvalidState` are raised synchronously and never reach
//! the network layer. Each variant carries a display-ready message; views
//! render `to_string()` directly.

use thiserror::Error;

/// Application-wide error type covering every failure surface of the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side input validation failed; nothing was sent to the server.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credentials or token rejected by the backend.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A domain precondition failed, e.g. a repayment against a credit that
    /// is not in an accepting status. Raised locally, never sent.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Transport failure or unexpected response shape.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend reported an internal failure.
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Stable short code for programmatic routing (badge color, retry
    /// policy); the human-readable text lives in `Display`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::Network(_) => "NETWORK",
            AppError::Server(_) => "SERVER",
        }
    }

    /// True for the two locally-raised kinds that never touch the wire.
    pub fn is_local(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::InvalidState(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_presentable() {
        let err = AppError::InvalidState("Credit 4 is not accepted".to_string());
        assert_eq!(err.to_string(), "Invalid state: Credit 4 is not accepted");
        assert_eq!(err.code(), "INVALID_STATE");
    }

    #[test]
    fn test_local_kinds() {
        assert!(AppError::Validation("x".into()).is_local());
        assert!(AppError::InvalidState("x".into()).is_local());
        assert!(!AppError::Network("x".into()).is_local());
        assert!(!AppError::Server("x".into()).is_local());
    }
}
