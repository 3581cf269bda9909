use crate::cart::{Cart, CartLine};
use crate::model::{Menu, OrderConfirmation};
use crate::render::CartView;
use rust_decimal::Decimal;

/// Everything one customer session holds. Owned by the session actor.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(super) menu: Menu,
    pub(super) cart: Cart,
    pub(super) table: String,
    pub(super) checkout_pending: bool,
    pub(super) confirmation: Option<OrderConfirmation>,
}

impl Session {
    pub fn new(menu: Menu, table: impl Into<String>) -> Self {
        Self {
            menu,
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn cart_view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            lines: self.cart.lines().to_vec(),
            total: self.cart.total(),
            item_count: self.cart.item_count(),
            table: self.table.clone(),
            checkout_pending: self.checkout_pending,
            confirmation: self.confirmation.clone(),
        }
    }
}

/// Read-only copy of the session state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub item_count: u32,
    pub table: String,
    pub checkout_pending: bool,
    /// Last accepted order, until dismissed.
    pub confirmation: Option<OrderConfirmation>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
