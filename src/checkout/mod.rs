//! # Checkout
//!
//! Turns a cart and a table number into an order, in two steps:
//!
//! 1. [`prepare_order`] validates locally and builds the [`OrderRequest`].
//!    Nothing is sent when it fails.
//! 2. [`submit_order`] hands the request to an [`OrderService`] and maps the
//!    answer to an [`OrderConfirmation`] or a [`CheckoutError`].
//!
//! Neither step touches the cart. Clearing it after a confirmed order is the
//! session's job, which also guards against a second submission while the
//! first is in flight.

pub mod error;

pub use error::*;

use crate::cart::Cart;
use crate::clients::OrderService;
use crate::model::{OrderConfirmation, OrderLine, OrderRequest};
use crate::money::{round, to_f64};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

/// Fallback reason when the server rejects an order without saying why.
pub const UNKNOWN_REASON: &str = "unknown";

/// Builds the order request from a cart snapshot.
///
/// The table number is trimmed and must not be empty; the cart must hold at
/// least one line.
pub fn prepare_order(cart: &Cart, table: &str) -> Result<OrderRequest, CheckoutError> {
    let table = table.trim();
    if table.is_empty() {
        return Err(CheckoutError::MissingTable);
    }
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let items = cart
        .lines()
        .iter()
        .map(|line| OrderLine {
            id: line.item_id,
            quantity: line.quantity,
            price: to_f64(line.price),
        })
        .collect();

    Ok(OrderRequest {
        table_number: table.to_string(),
        total: to_f64(cart.total()),
        items,
    })
}

/// Submits a prepared order. No retry is attempted.
#[instrument(skip(service, request), fields(table = %request.table_number))]
pub async fn submit_order(
    service: &dyn OrderService,
    request: OrderRequest,
    total: Decimal,
) -> Result<OrderConfirmation, CheckoutError> {
    debug!(?request, "Submitting order");
    match service.submit_order(&request).await {
        Ok(response) if response.success => {
            info!(order_id = ?response.order_id, "Order accepted");
            Ok(OrderConfirmation {
                order_id: response.order_id,
                table_number: request.table_number,
                total: round(total),
            })
        }
        Ok(response) => {
            let reason = response
                .error
                .filter(|reason| !reason.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_REASON.to_string());
            warn!(%reason, "Order rejected");
            Err(CheckoutError::Rejected(reason))
        }
        Err(e) => {
            warn!(error = %e, "Order submission failed");
            Err(CheckoutError::Transport(e.to_string()))
        }
    }
}
