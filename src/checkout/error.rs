//! Error types for checkout.

use thiserror::Error;

/// Why a checkout did not produce an order.
///
/// The `Display` text is what the customer is shown.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// Table number missing or blank.
    #[error("Please enter a table number.")]
    MissingTable,

    /// Nothing to order.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// A previous submission has not been answered yet.
    #[error("An order is already being submitted.")]
    AlreadyPending,

    /// The server answered `success: false`.
    #[error("Order failed: {0}")]
    Rejected(String),

    /// The request or its response could not be exchanged.
    #[error("Order failed. Please try again later.")]
    Transport(String),
}

impl CheckoutError {
    /// Text shown in the customer alert.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Validation failures are detected before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, CheckoutError::MissingTable | CheckoutError::EmptyCart)
    }
}
