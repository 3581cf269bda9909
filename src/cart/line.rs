use crate::model::{ItemId, MenuItem};
use crate::money::to_decimal;
use rust_decimal::Decimal;

/// One entry of the cart.
///
/// Name and price are copied from the menu when the line is created so the
/// cart keeps displaying what the customer picked even if the menu changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub(super) fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: to_decimal(item.price),
            quantity: 1,
        }
    }

    /// `price × quantity`, unrounded.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
