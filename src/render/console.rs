//! Plain-text renderer used by the `restaurant` binary.

use super::{CartView, ConfirmationView, MenuView, Renderer, EMPTY_CART_TEXT};
use std::fmt::Write;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }
}

pub fn format_menu(menu: &MenuView) -> String {
    let mut out = String::new();
    for category in &menu.categories {
        let _ = writeln!(out, "== {} ==", category.name);
        if let Some(description) = &category.description {
            let _ = writeln!(out, "   {description}");
        }
        for item in &category.items {
            let marker = if item.available { "" } else { " (unavailable)" };
            let _ = writeln!(out, "  [{:>3}] {:<30} {:>9}{marker}", item.id.0, item.name, item.price);
            if !item.description.is_empty() {
                let _ = writeln!(out, "        {}", item.description);
            }
        }
    }
    out
}

pub fn format_cart(cart: &CartView) -> String {
    if cart.is_empty() {
        return format!("{EMPTY_CART_TEXT}\n");
    }
    let mut out = String::new();
    for line in &cart.lines {
        let _ = writeln!(
            out,
            "  {:>3} x {:<30} {:>9} {:>9}",
            line.quantity, line.name, line.price, line.subtotal
        );
    }
    let _ = writeln!(out, "  {} item(s), total {}", cart.item_count, cart.total);
    out
}

impl Renderer for ConsoleRenderer {
    fn render_menu(&self, menu: &MenuView) {
        print!("{}", format_menu(menu));
    }

    fn render_menu_error(&self, message: &str) {
        warn!(message, "Menu unavailable");
        eprintln!("{message}");
    }

    fn render_cart(&self, cart: &CartView) {
        print!("{}", format_cart(cart));
    }

    fn render_confirmation(&self, confirmation: &ConfirmationView) {
        info!(order_id = ?confirmation.order_id, "Order confirmed");
        println!(
            "Order {} placed for table {} ({})",
            confirmation.order_id.as_deref().unwrap_or("-"),
            confirmation.table_number,
            confirmation.total
        );
    }

    fn alert(&self, message: &str) {
        warn!(message, "Alert");
        eprintln!("{message}");
    }
}
