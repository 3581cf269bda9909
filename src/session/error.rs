//! Error types for the session actor.

use crate::checkout::CheckoutError;
use thiserror::Error;

/// Errors returned through a [`SessionClient`](crate::clients::SessionClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The session task is gone; nothing can be sent to it.
    #[error("Session closed")]
    ActorClosed,

    /// The session dropped the reply channel without answering.
    #[error("Session dropped response channel")]
    ActorDropped,

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl SessionError {
    pub fn checkout(&self) -> Option<&CheckoutError> {
        match self {
            SessionError::Checkout(e) => Some(e),
            _ => None,
        }
    }
}
