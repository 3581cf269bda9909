//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Call it once, at the top of `main`.
//!
//! ## Configuration
//!
//! Output is compact and hides the module prefix (`with_target(false)`).
//! The level comes from `RUST_LOG`:
//!
//! ```bash
//! # Session lifecycle, cart updates, order results
//! RUST_LOG=info restaurant order --table 4 --item 1
//!
//! # Every session request plus full order payloads
//! RUST_LOG=debug restaurant order --table 4 --item 1 --item 1
//!
//! # Only the HTTP adapter
//! RUST_LOG=restaurant_client::clients=debug restaurant menu
//! ```
//!
//! ## What Gets Traced
//!
//! - **Session**: start, shutdown, each effective cart change (`info`),
//!   ignored commands (`debug`), rejected checkouts (`warn`)
//! - **Checkout**: the request payload once at `debug`, then the outcome
//! - **HTTP**: failing statuses at `warn`
//! - **Admin**: loads, saves, and login redirects
//!
//! ## Checkout Trace Example
//!
//! ```text
//! INFO Session started table=4
//! INFO add_item: Cart updated command="AddItem" item_id=item_1 items=1 total=9.5
//! INFO Checkout started table=4 lines=1
//! INFO submit_order: Order accepted order_id=Some(OrderId(42)) table=4
//! INFO Checkout complete order_id=Some(OrderId(42))
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
