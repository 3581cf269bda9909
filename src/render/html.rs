//! HTML fragments for the customer page.
//!
//! Each region of the page is kept as a string and replaced wholesale on
//! every render. Actions are exposed as `data-action`/`data-item-id`
//! attributes for the page script to bind; no inline handlers are emitted.

use super::{CartView, ConfirmationView, MenuItemView, MenuView, Renderer, EMPTY_CART_TEXT};
use std::fmt::Write;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Current markup of every page region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlRegions {
    pub categories: String,
    pub menu_error: Option<String>,
    pub cart_items: String,
    pub cart_count: String,
    pub cart_total: String,
    pub checkout_button: String,
    /// `None` while the dialog is hidden.
    pub order_modal: Option<String>,
    pub alerts: Vec<String>,
}

#[derive(Debug, Default)]
pub struct HtmlRenderer {
    regions: Mutex<HtmlRegions>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> HtmlRegions {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HtmlRegions> {
        self.regions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn menu_item_html(item: &MenuItemView) -> String {
    let name = escape_html(&item.name);
    let (class, action) = if item.available {
        (
            "menu-item",
            format!(" data-action=\"add\" data-item-id=\"{}\"", item.id.0),
        )
    } else {
        ("menu-item menu-item-unavailable", String::new())
    };
    format!(
        "<div class=\"{class}\"{action}>\
         <img src=\"{src}\" alt=\"{name}\" class=\"menu-item-image\">\
         <div class=\"menu-item-info\">\
         <div class=\"menu-item-name\">{name}</div>\
         <div class=\"menu-item-description\">{description}</div>\
         <div class=\"menu-item-price\">{price}</div>\
         </div></div>",
        src = escape_html(&item.image_url),
        description = escape_html(&item.description),
        price = escape_html(&item.price),
    )
}

fn menu_html(menu: &MenuView) -> String {
    let mut html = String::new();
    for category in &menu.categories {
        let _ = write!(
            html,
            "<div class=\"category\"><h2 class=\"category-title\">{}</h2>",
            escape_html(&category.name)
        );
        if let Some(description) = &category.description {
            let _ = write!(
                html,
                "<p class=\"category-description\">{}</p>",
                escape_html(description)
            );
        }
        html.push_str("<div class=\"menu-items\">");
        for item in &category.items {
            html.push_str(&menu_item_html(item));
        }
        html.push_str("</div></div>");
    }
    html
}

fn cart_items_html(cart: &CartView) -> String {
    if cart.is_empty() {
        return format!("<p class=\"cart-empty\">{EMPTY_CART_TEXT}</p>");
    }
    let mut html = String::new();
    for line in &cart.lines {
        let id = line.item_id.0;
        let _ = write!(
            html,
            "<div class=\"cart-item\">\
             <div class=\"cart-item-info\">\
             <div class=\"cart-item-name\">{name}</div>\
             <div class=\"cart-item-price\">{price}</div>\
             </div>\
             <div class=\"cart-item-quantity\">\
             <button class=\"quantity-btn\" data-action=\"decrease\" data-item-id=\"{id}\">-</button>\
             <span class=\"quantity-display\">{quantity}</span>\
             <button class=\"quantity-btn\" data-action=\"increase\" data-item-id=\"{id}\">+</button>\
             </div>\
             <button class=\"remove-item\" data-action=\"remove\" data-item-id=\"{id}\">×</button>\
             </div>",
            name = escape_html(&line.name),
            price = escape_html(&line.price),
            quantity = line.quantity,
        );
    }
    html
}

fn checkout_button_html(cart: &CartView) -> String {
    let disabled = if cart.checkout_enabled { "" } else { " disabled" };
    format!(
        "<button id=\"checkout-btn\" data-action=\"checkout\"{disabled}>{}</button>",
        escape_html(&cart.checkout_label)
    )
}

fn confirmation_html(confirmation: &ConfirmationView) -> String {
    format!(
        "<div class=\"modal\" id=\"order-modal\">\
         <p>Order <span id=\"order-number\">{order}</span></p>\
         <p>Table <span id=\"order-table\">{table}</span></p>\
         <p>Total <span id=\"order-total\">{total}</span></p>\
         <button data-action=\"close-order\">OK</button>\
         </div>",
        order = escape_html(confirmation.order_id.as_deref().unwrap_or_default()),
        table = escape_html(&confirmation.table_number),
        total = escape_html(&confirmation.total),
    )
}

impl Renderer for HtmlRenderer {
    fn render_menu(&self, menu: &MenuView) {
        let html = menu_html(menu);
        let mut regions = self.lock();
        regions.categories = html;
        regions.menu_error = None;
        debug!(categories = menu.categories.len(), "Menu rendered");
    }

    fn render_menu_error(&self, message: &str) {
        let mut regions = self.lock();
        regions.categories.clear();
        regions.menu_error = Some(escape_html(message));
    }

    fn render_cart(&self, cart: &CartView) {
        let mut regions = self.lock();
        regions.cart_items = cart_items_html(cart);
        regions.cart_count = cart.item_count.to_string();
        regions.cart_total = escape_html(&cart.total);
        regions.checkout_button = checkout_button_html(cart);
    }

    fn render_confirmation(&self, confirmation: &ConfirmationView) {
        self.lock().order_modal = Some(confirmation_html(confirmation));
    }

    fn close_confirmation(&self) {
        self.lock().order_modal = None;
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(escape_html(message));
    }
}
