//! Pure data structures (DTOs) exchanged with the restaurant REST API.
//!
//! - [`menu`]: the read-only menu snapshot served to customers.
//! - [`order`]: order submission payloads and the server's answer.
//! - [`admin`]: category/item records and the admin forms that produce them.

pub mod admin;
pub mod menu;
pub mod order;

pub use admin::*;
pub use menu::*;
pub use order::*;
