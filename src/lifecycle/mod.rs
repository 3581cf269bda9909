//! Application startup, shutdown and logging setup.
//!
//! - [`RestaurantApp`] - loads the menu, restores the table and runs the session
//! - [`AppServices`] - the collaborators it is started with
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod app;
pub mod tracing;

pub use self::app::{AppServices, RestaurantApp};
pub use self::tracing::setup_tracing;
