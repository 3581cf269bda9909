//! # Clients
//!
//! The boundaries of the crate. The customer flow and the admin console never
//! talk HTTP directly; they go through these traits so tests can swap in the
//! doubles from [`mock`].
//!
//! - [`MenuService`]: read-only menu snapshot.
//! - [`OrderService`]: order submission.
//! - [`AdminService`]: category/item CRUD for the admin console.
//! - [`HttpApi`]: the `reqwest` implementation of all three.
//! - [`SessionClient`]: typed handle to the customer session actor.

pub mod error;
pub mod http;
pub mod mock;
pub mod session_client;

pub use error::*;
pub use http::HttpApi;
pub use session_client::SessionClient;

use crate::model::{
    AdminCategory, AdminItem, CategoryId, CategoryPayload, ItemId, ItemPayload, MenuCategory,
    OrderRequest, OrderResponse,
};
use async_trait::async_trait;

/// Source of the menu shown to customers.
#[async_trait]
pub trait MenuService: Send + Sync {
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>>;
}

/// Destination of submitted orders.
///
/// A decoded `{success: false}` body is an `Ok` response: business failures
/// are data, only transport problems are errors.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn submit_order(&self, order: &OrderRequest) -> ClientResult<OrderResponse>;
}

/// Admin CRUD over categories and items.
#[async_trait]
pub trait AdminService: Send + Sync {
    async fn list_categories(&self) -> ClientResult<Vec<AdminCategory>>;
    async fn create_category(&self, category: &CategoryPayload) -> ClientResult<()>;
    async fn update_category(&self, id: CategoryId, category: &CategoryPayload) -> ClientResult<()>;
    async fn delete_category(&self, id: CategoryId) -> ClientResult<()>;

    async fn list_items(&self) -> ClientResult<Vec<AdminItem>>;
    async fn create_item(&self, item: &ItemPayload) -> ClientResult<()>;
    async fn update_item(&self, id: ItemId, item: &ItemPayload) -> ClientResult<()>;
    async fn delete_item(&self, id: ItemId) -> ClientResult<()>;
}
