//! # Admin Console
//!
//! Category and item management on top of an [`AdminService`].
//!
//! Every operation returns an [`AdminOutcome`] instead of an error: the admin
//! page either shows a result, an inline validation message, a generic
//! alert, or navigates to the login page on 401/403.
//!
//! Forms choose the verb: a form with an `edit_id` updates (`PUT`), any other
//! form creates (`POST`). A form is reset after a successful save.

pub mod error;

pub use error::*;

use crate::clients::AdminService;
use crate::model::{AdminCategory, AdminItem, CategoryForm, CategoryId, ItemForm, ItemId};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Result of an admin operation as the page should present it.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminOutcome<T = ()> {
    Listed(T),
    /// `created` is false for an update.
    Saved { created: bool },
    Deleted,
    RedirectToLogin(String),
    /// Form rejected locally; nothing was sent.
    Invalid(String),
    /// Message for a generic alert.
    Failed(String),
}

impl<T> AdminOutcome<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, AdminOutcome::RedirectToLogin(_))
    }

    /// The listed rows, if this is a successful listing.
    pub fn listed(self) -> Option<T> {
        match self {
            AdminOutcome::Listed(rows) => Some(rows),
            _ => None,
        }
    }

    fn from_error(error: AdminError, login_path: &str) -> Self {
        match error {
            AdminError::Validation(message) => AdminOutcome::Invalid(message),
            AdminError::Unauthorized => {
                warn!(login_path, "Admin session rejected, redirecting");
                AdminOutcome::RedirectToLogin(login_path.to_string())
            }
            AdminError::Failed(message) => AdminOutcome::Failed(message),
        }
    }
}

/// One option of the item form's category select.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub name: String,
}

pub struct AdminConsole {
    service: Arc<dyn AdminService>,
    login_path: String,
    categories: Vec<AdminCategory>,
}

impl AdminConsole {
    pub fn new(service: Arc<dyn AdminService>, login_path: impl Into<String>) -> Self {
        Self {
            service,
            login_path: login_path.into(),
            categories: Vec::new(),
        }
    }

    fn outcome<T>(&self, result: Result<AdminOutcome<T>, AdminError>) -> AdminOutcome<T> {
        result.unwrap_or_else(|e| AdminOutcome::from_error(e, &self.login_path))
    }

    /// Lists categories and refreshes the options of the item form.
    #[instrument(skip(self))]
    pub async fn load_categories(&mut self) -> AdminOutcome<Vec<AdminCategory>> {
        match self.service.list_categories().await {
            Ok(categories) => {
                info!(count = categories.len(), "Categories loaded");
                self.categories = categories.clone();
                AdminOutcome::Listed(categories)
            }
            Err(e) => {
                warn!(error = %e, "Could not load categories");
                self.outcome(Err(e.into()))
            }
        }
    }

    /// Options from the last successful [`load_categories`](Self::load_categories).
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.categories
            .iter()
            .map(|category| CategoryOption {
                id: category.id,
                name: category.name.clone(),
            })
            .collect()
    }

    #[instrument(skip(self))]
    pub async fn load_items(&self) -> AdminOutcome<Vec<AdminItem>> {
        match self.service.list_items().await {
            Ok(items) => {
                info!(count = items.len(), "Items loaded");
                AdminOutcome::Listed(items)
            }
            Err(e) => {
                warn!(error = %e, "Could not load items");
                self.outcome(Err(e.into()))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn submit_category(&self, form: &mut CategoryForm) -> AdminOutcome {
        let result = async {
            let payload = form.validate().map_err(AdminError::Validation)?;
            let created = match form.edit_id {
                Some(id) => {
                    self.service
                        .update_category(id, &payload)
                        .await
                        .map_err(AdminError::from_save)?;
                    false
                }
                None => {
                    self.service
                        .create_category(&payload)
                        .await
                        .map_err(AdminError::from_save)?;
                    true
                }
            };
            info!(name = %payload.name, created, "Category saved");
            Ok::<_, AdminError>(AdminOutcome::Saved { created })
        }
        .await;
        if result.is_ok() {
            form.reset();
        }
        self.outcome(result)
    }

    /// Items of the category are removed server-side as well.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> AdminOutcome {
        let result = self
            .service
            .delete_category(id)
            .await
            .map(|()| AdminOutcome::Deleted)
            .map_err(AdminError::from_delete);
        self.outcome(result)
    }

    #[instrument(skip(self))]
    pub async fn submit_item(&self, form: &mut ItemForm) -> AdminOutcome {
        let result = async {
            let payload = form.validate().map_err(AdminError::Validation)?;
            let created = match form.edit_id {
                Some(id) => {
                    self.service
                        .update_item(id, &payload)
                        .await
                        .map_err(AdminError::from_save)?;
                    false
                }
                None => {
                    self.service
                        .create_item(&payload)
                        .await
                        .map_err(AdminError::from_save)?;
                    true
                }
            };
            info!(name = %payload.name, created, "Item saved");
            Ok::<_, AdminError>(AdminOutcome::Saved { created })
        }
        .await;
        if result.is_ok() {
            form.reset();
        }
        self.outcome(result)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> AdminOutcome {
        let result = self
            .service
            .delete_item(id)
            .await
            .map(|()| AdminOutcome::Deleted)
            .map_err(AdminError::from_delete);
        self.outcome(result)
    }
}
