//! REST adapter for the restaurant API.
//!
//! Paths are relative to [`ClientConfig::base_url`]:
//!
//! | Service | Method | Path                          |
//! |---------|--------|-------------------------------|
//! | menu    | GET    | `client/menu`                 |
//! | order   | POST   | `client/order`                |
//! | admin   | GET/POST | `admin/categories`, `admin/items` |
//! | admin   | PUT/DELETE | `admin/categories/{id}`, `admin/items/{id}` |

use super::{AdminService, ClientError, ClientResult, MenuService, OrderService};
use crate::config::ClientConfig;
use crate::model::{
    AdminCategory, AdminItem, CategoryId, CategoryPayload, ItemId, ItemPayload, MenuCategory,
    OrderRequest, OrderResponse,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// `{success, error}` envelope the API attaches to errors and to most
/// mutation answers.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
}

fn status_error(status: StatusCode, body: &str) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden,
        _ => ClientError::Status {
            status: status.as_u16(),
            message: serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|body| body.error),
        },
    }
}

/// A 2xx mutation answer that still reports `success: false`.
fn refused_error(status: StatusCode, body: &str) -> Option<ClientError> {
    let body = serde_json::from_str::<ApiErrorBody>(body).ok()?;
    match body.success {
        Some(false) => Some(ClientError::Status {
            status: status.as_u16(),
            message: body.error,
        }),
        _ => None,
    }
}

/// `reqwest` implementation of every service trait.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            warn!(status = status.as_u16(), "Request failed");
            return Err(status_error(status, &text));
        }
        Ok(response.json().await?)
    }

    /// For mutations. The body is optional; only `success: false` is an error.
    async fn handle_empty(&self, response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Request failed");
            return Err(status_error(status, &text));
        }
        match refused_error(status, &text) {
            Some(err) => {
                warn!(status = status.as_u16(), "Request refused by server");
                Err(err)
            }
            None => Ok(()),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_empty(response).await
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_empty(response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_empty(response).await
    }
}

#[async_trait]
impl MenuService for HttpApi {
    #[instrument(skip(self))]
    async fn fetch_menu(&self) -> ClientResult<Vec<MenuCategory>> {
        let menu: Vec<MenuCategory> = self.get("client/menu").await?;
        debug!(categories = menu.len(), "Menu fetched");
        Ok(menu)
    }
}

#[async_trait]
impl OrderService for HttpApi {
    /// The body is decoded whatever the status: the API reports business
    /// failures as `{success: false, error}` with a 4xx.
    #[instrument(skip(self, order), fields(table = %order.table_number))]
    async fn submit_order(&self, order: &OrderRequest) -> ClientResult<OrderResponse> {
        let response = self
            .client
            .post(self.url("client/order"))
            .json(order)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<OrderResponse>(&text) {
            Ok(decoded) => Ok(decoded),
            Err(_) if !status.is_success() => Err(status_error(status, &text)),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl AdminService for HttpApi {
    async fn list_categories(&self) -> ClientResult<Vec<AdminCategory>> {
        self.get("admin/categories").await
    }

    #[instrument(skip(self))]
    async fn create_category(&self, category: &CategoryPayload) -> ClientResult<()> {
        self.post("admin/categories", category).await
    }

    #[instrument(skip(self))]
    async fn update_category(&self, id: CategoryId, category: &CategoryPayload) -> ClientResult<()> {
        self.put(&format!("admin/categories/{}", id.0), category).await
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, id: CategoryId) -> ClientResult<()> {
        self.delete(&format!("admin/categories/{}", id.0)).await
    }

    async fn list_items(&self) -> ClientResult<Vec<AdminItem>> {
        self.get("admin/items").await
    }

    #[instrument(skip(self))]
    async fn create_item(&self, item: &ItemPayload) -> ClientResult<()> {
        self.post("admin/items", item).await
    }

    #[instrument(skip(self))]
    async fn update_item(&self, id: ItemId, item: &ItemPayload) -> ClientResult<()> {
        self.put(&format!("admin/items/{}", id.0), item).await
    }

    #[instrument(skip(self))]
    async fn delete_item(&self, id: ItemId) -> ClientResult<()> {
        self.delete(&format!("admin/items/{}", id.0)).await
    }
}
