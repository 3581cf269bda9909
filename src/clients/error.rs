//! Transport-level errors shared by every REST collaborator.

use thiserror::Error;

/// Errors returned by [`MenuService`](super::MenuService),
/// [`OrderService`](super::OrderService) and [`AdminService`](super::AdminService).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 401 from the API.
    #[error("Authentication required")]
    Unauthorized,

    /// 403 from the API.
    #[error("Permission denied")]
    Forbidden,

    /// Any other non-2xx status, with the body's `error` field when present.
    #[error("Unexpected status {status}: {}", .message.as_deref().unwrap_or("unknown"))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure injected by a test double or raised before any I/O.
    #[error("Client error: {0}")]
    Other(String),
}

impl ClientError {
    /// Admin endpoints answer 401/403 when the session is missing or expired.
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::Forbidden)
    }

    /// Server-supplied reason, if the API sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
