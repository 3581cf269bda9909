#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Restaurant Client
//!
//! > **Table ordering, from menu to kitchen.**
//!
//! Client-side logic of a restaurant ordering system: customers browse the
//! menu, fill a cart and send it for their table; staff maintain categories
//! and items through an admin console. The server is reached over REST.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure state, one owner
//! The [`Cart`](cart::Cart) is a small synchronous state machine with no I/O.
//! It lives inside a session actor, which is the only thing allowed to touch
//! it. UI handlers hold a [`SessionClient`](clients::SessionClient) and send
//! requests; there is no global cart.
//!
//! ### Views are data
//! After each change the session hands a view-model
//! ([`CartView`](render::CartView), [`MenuView`](render::MenuView), ...) to a
//! [`Renderer`](render::Renderer). Swapping HTML for a terminal, or for a
//! recorder in tests, changes nothing else.
//!
//! ### Boundaries are traits
//! [`MenuService`](clients::MenuService), [`OrderService`](clients::OrderService)
//! and [`AdminService`](clients::AdminService) hide HTTP. Tests use the doubles
//! in [`clients::mock`].
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Money
//! Prices arrive as JSON numbers. Sums are computed with `rust_decimal` and
//! rounded to two places only for display and for the order payload. See
//! [`money`].
//!
//! ### 2. Failure handling
//! Nothing is fatal. Validation failures never reach the network, unknown
//! items are ignored, transport failures become a generic message, a server
//! rejection carries the server's reason, and admin 401/403 become a login
//! redirect.
//!
//! ### 3. Concurrency Model
//! The session processes requests one at a time. An order submission runs in
//! its own task and reports back through the session mailbox, so the cart
//! stays responsive; a second checkout while one is in flight is refused.
//!
//! ### 4. Observability
//! `tracing` everywhere, initialized by [`lifecycle::setup_tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Domain ([`model`], [`cart`], [`money`])
//! Menu snapshot, order payloads, admin forms and the cart state machine.
//!
//! ### 2. The Flow ([`session`], [`checkout`])
//! The session actor and the two-step checkout it drives.
//!
//! ### 3. The Interface ([`clients`], [`render`], [`storage`])
//! REST services, renderers and table-number persistence.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`RestaurantApp`](lifecycle::RestaurantApp) wires everything together and
//! shuts it down.
//!
//! ### 5. Back Office ([`admin`])
//! [`AdminConsole`](admin::AdminConsole) for category and item management.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- menu
//! RUST_LOG=info cargo run -- order --table 12 --item 1 --item 1 --item 4
//! cargo run -- admin categories list
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod money;
pub mod render;
pub mod session;
pub mod storage;
