//! Error types for the admin console.

use crate::clients::ClientError;
use thiserror::Error;

pub const SERVER_ERROR: &str = "Server error";
pub const DELETE_ERROR: &str = "Error while deleting";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// Form rejected before any request.
    #[error("{0}")]
    Validation(String),

    /// 401/403: the admin session is missing or expired.
    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Failed(String),
}

impl AdminError {
    /// Maps a failed create/update, quoting the server's reason.
    pub fn from_save(e: ClientError) -> Self {
        match e {
            e if e.is_auth() => AdminError::Unauthorized,
            ClientError::Status { message, .. } => {
                AdminError::Failed(format!("Error: {}", message.as_deref().unwrap_or("unknown")))
            }
            _ => AdminError::Failed(SERVER_ERROR.to_string()),
        }
    }

    pub fn from_delete(e: ClientError) -> Self {
        match e {
            e if e.is_auth() => AdminError::Unauthorized,
            ClientError::Status { .. } => AdminError::Failed(DELETE_ERROR.to_string()),
            _ => AdminError::Failed(SERVER_ERROR.to_string()),
        }
    }
}

impl From<ClientError> for AdminError {
    fn from(e: ClientError) -> Self {
        if e.is_auth() {
            AdminError::Unauthorized
        } else {
            AdminError::Failed(SERVER_ERROR.to_string())
        }
    }
}
