//! Order submission payloads for `POST /client/order`.
use crate::model::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-assigned order number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: ItemId,
    pub quantity: u32,
    pub price: f64,
}

/// Body of the order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub table_number: String,
    pub total: f64,
    pub items: Vec<OrderLine>,
}

/// Answer of the order endpoint, decoded whatever the HTTP status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderResponse {
    pub fn accepted(order_id: u64) -> Self {
        Self {
            success: true,
            order_id: Some(OrderId(order_id)),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(error.into()),
        }
    }
}

/// What the customer sees once the server accepted an order.
///
/// `order_id` is optional because a server may report success without
/// echoing a number; the order still counts as placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: Option<OrderId>,
    pub table_number: String,
    pub total: Decimal,
}
