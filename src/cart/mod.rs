//! # Cart
//!
//! The customer's cart as a small synchronous state machine over an ordered
//! list of [`CartLine`]s.
//!
//! ## Invariants
//!
//! After every call, whatever its outcome:
//! - there is at most one line per [`ItemId`](crate::model::ItemId);
//! - no line has a quantity of zero (decrementing the last unit removes it).
//!
//! ## Outcomes
//!
//! Mutations never fail. Unknown items and missing lines are silently ignored;
//! each mutating method returns `true` only when the cart actually changed so
//! the caller knows whether a redraw is needed.
//!
//! ```rust
//! use restaurant_client::cart::Cart;
//! use restaurant_client::model::{ItemId, Menu, MenuCategory, MenuItem};
//! use rust_decimal::Decimal;
//!
//! let menu = Menu::new(vec![MenuCategory::new("Mains", vec![MenuItem::new(1, "Pizza", 9.50)])]);
//! let mut cart = Cart::new();
//!
//! assert!(cart.add_item(&menu, ItemId(1)));
//! assert!(cart.add_item(&menu, ItemId(1)));
//! assert!(!cart.add_item(&menu, ItemId(7)));
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Decimal::new(1900, 2));
//! ```

mod line;

pub use line::CartLine;

use crate::model::{ItemId, Menu};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item_id`, resolving it in `menu`.
    ///
    /// Unknown items are ignored. Availability is a presentation concern:
    /// renderers offer no add action for unavailable items. An existing line
    /// is incremented; otherwise a new line is appended with quantity 1.
    pub fn add_item(&mut self, menu: &Menu, item_id: ItemId) -> bool {
        let Some(item) = menu.find_item_by_id(item_id) else {
            return false;
        };
        match self.position(item_id) {
            Some(index) => self.lines[index].quantity += 1,
            None => self.lines.push(CartLine::from_menu_item(item)),
        }
        true
    }

    pub fn increase_quantity(&mut self, item_id: ItemId) -> bool {
        match self.position(item_id) {
            Some(index) => {
                self.lines[index].quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Removes one unit; the line disappears when its last unit goes.
    pub fn decrease_quantity(&mut self, item_id: ItemId) -> bool {
        let Some(index) = self.position(item_id) else {
            return false;
        };
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        true
    }

    pub fn remove_item(&mut self, item_id: ItemId) -> bool {
        match self.position(item_id) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Exact sum of `price × quantity` over all lines.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, item_id: ItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.item_id == item_id)
    }
}
