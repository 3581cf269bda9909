//! # Customer Session
//!
//! One actor per customer. It owns the menu snapshot, the [`Cart`](crate::cart::Cart)
//! and the table number; handlers reach them only through a
//! [`SessionClient`](crate::clients::SessionClient).
//!
//! ## Lifecycle
//!
//! ```text
//!   new() ──► SessionActor ──spawn(run(ctx))──► loop over SessionRequest
//!          └► SessionClient (clone freely)          │
//!                                                   ├─ cart command ─► Renderer::render_cart
//!                                                   ├─ Checkout ─────► spawn submit ─┐
//!                                                   │                                │
//!                                                   └─ CheckoutFinished ◄────────────┘
//! ```
//!
//! A second `Checkout` while one is in flight fails with
//! [`CheckoutError::AlreadyPending`](crate::checkout::CheckoutError::AlreadyPending)
//! and sends nothing.

pub mod actor;
pub mod error;
pub mod request;
pub mod state;

pub use actor::{SessionActor, SessionContext};
pub use error::*;
pub use request::{Response, SessionRequest};
pub use state::{Session, SessionSnapshot};

use crate::clients::SessionClient;
use crate::model::Menu;

/// Creates a session actor and its client.
pub fn new(menu: Menu, table: impl Into<String>, buffer_size: usize) -> (SessionActor, SessionClient) {
    SessionActor::new(Session::new(menu, table), buffer_size)
}
