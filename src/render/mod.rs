//! # Rendering
//!
//! The session never draws anything itself. After each state change it hands
//! a view-model to a [`Renderer`]:
//!
//! | Event                        | Call                        |
//! |------------------------------|-----------------------------|
//! | menu loaded / failed         | `render_menu` / `render_menu_error` |
//! | cart changed                 | `render_cart`               |
//! | order accepted               | `render_confirmation`       |
//! | confirmation dismissed       | `close_confirmation`        |
//! | validation or order failure  | `alert`                     |
//!
//! Implementations:
//! - [`HtmlRenderer`]: escaped HTML fragments, one per page region.
//! - [`ConsoleRenderer`]: plain text for the CLI.
//! - [`RecordingRenderer`]: keeps every call, for tests.
//!
//! View-model strings are untrusted (they come from the API or from the
//! customer). A renderer producing markup must escape them.

pub mod console;
pub mod html;
pub mod recording;
pub mod view;

pub use console::ConsoleRenderer;
pub use html::{escape_html, HtmlRegions, HtmlRenderer};
pub use recording::{RecordingRenderer, RenderEvent};
pub use view::*;

/// Shown when the menu could not be fetched.
pub const MENU_LOAD_ERROR: &str = "Unable to load the menu. Please try again later.";

pub trait Renderer: Send + Sync {
    fn render_menu(&self, menu: &MenuView);

    fn render_menu_error(&self, message: &str);

    fn render_cart(&self, cart: &CartView);

    fn render_confirmation(&self, confirmation: &ConfirmationView);

    fn close_confirmation(&self) {}

    /// Blocking message to the user (validation failure, order error).
    fn alert(&self, message: &str);
}
