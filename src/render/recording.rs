//! Renderer that records calls instead of drawing.

use super::{CartView, ConfirmationView, MenuView, Renderer};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Menu(MenuView),
    MenuError(String),
    Cart(CartView),
    Confirmation(ConfirmationView),
    CloseConfirmation,
    Alert(String),
}

/// Cloning shares the same log, so a test can keep one handle and give
/// another to the session.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn cart_renders(&self) -> usize {
        self.lock()
            .iter()
            .filter(|event| matches!(event, RenderEvent::Cart(_)))
            .count()
    }

    pub fn last_cart(&self) -> Option<CartView> {
        self.lock().iter().rev().find_map(|event| match event {
            RenderEvent::Cart(cart) => Some(cart.clone()),
            _ => None,
        })
    }

    pub fn confirmations(&self) -> Vec<ConfirmationView> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Confirmation(confirmation) => Some(confirmation.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RenderEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, event: RenderEvent) {
        self.lock().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn render_menu(&self, menu: &MenuView) {
        self.push(RenderEvent::Menu(menu.clone()));
    }

    fn render_menu_error(&self, message: &str) {
        self.push(RenderEvent::MenuError(message.to_string()));
    }

    fn render_cart(&self, cart: &CartView) {
        self.push(RenderEvent::Cart(cart.clone()));
    }

    fn render_confirmation(&self, confirmation: &ConfirmationView) {
        self.push(RenderEvent::Confirmation(confirmation.clone()));
    }

    fn close_confirmation(&self) {
        self.push(RenderEvent::CloseConfirmation);
    }

    fn alert(&self, message: &str) {
        self.push(RenderEvent::Alert(message.to_string()));
    }
}
