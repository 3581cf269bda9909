//! View-models handed to a [`Renderer`](super::Renderer).
//!
//! Everything is pre-formatted here (prices with two decimals and the
//! currency suffix, placeholder image, button label) so renderers only lay
//! strings out. Fields are raw text; escaping is the renderer's job.

use crate::cart::{Cart, CartLine};
use crate::model::{ItemId, Menu, MenuCategory, MenuItem, OrderConfirmation};
use crate::money::{format_price, to_decimal};

/// Shown instead of a missing item picture.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"80\" height=\"80\" viewBox=\"0 0 80 80\"%3E%3Crect width=\"80\" height=\"80\" fill=\"%23f0f0f0\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" font-family=\"Arial\" font-size=\"12\" fill=\"%23999\" text-anchor=\"middle\" dominant-baseline=\"middle\"%3EImage%3C/text%3E%3C/svg%3E";

pub const EMPTY_CART_TEXT: &str = "Your cart is empty";

const CHECKOUT_TEXT: &str = "Order";

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    /// Unavailable items are shown greyed out and cannot be added.
    pub available: bool,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: format_price(to_decimal(item.price)),
            image_url: item
                .image_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            available: item.available,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<MenuItemView>,
}

impl From<&MenuCategory> for CategoryView {
    fn from(category: &MenuCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category
                .description
                .clone()
                .filter(|description| !description.is_empty()),
            items: category.items.iter().map(MenuItemView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuView {
    pub categories: Vec<CategoryView>,
}

impl From<&Menu> for MenuView {
    fn from(menu: &Menu) -> Self {
        Self {
            categories: menu.categories().iter().map(CategoryView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    pub item_id: ItemId,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id,
            name: line.name.clone(),
            price: format_price(line.price),
            quantity: line.quantity,
            subtotal: format_price(line.subtotal()),
        }
    }
}

/// Everything the cart panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Badge count: sum of quantities.
    pub item_count: u32,
    pub total: String,
    pub checkout_enabled: bool,
    /// e.g. `Order (19.00€)`
    pub checkout_label: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let total = format_price(cart.total());
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            item_count: cart.item_count(),
            checkout_enabled: !cart.is_empty(),
            checkout_label: format!("{CHECKOUT_TEXT} ({total})"),
            total,
        }
    }
}

/// Content of the order confirmation dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationView {
    pub order_id: Option<String>,
    pub table_number: String,
    pub total: String,
}

impl From<&OrderConfirmation> for ConfirmationView {
    fn from(confirmation: &OrderConfirmation) -> Self {
        Self {
            order_id: confirmation.order_id.map(|id| id.to_string()),
            table_number: confirmation.table_number.clone(),
            total: format_price(confirmation.total),
        }
    }
}
