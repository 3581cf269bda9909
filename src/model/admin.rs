//! Admin records and forms for the category/item management endpoints.
//!
//! Forms mirror what the admin page collects; [`CategoryForm::validate`] and
//! [`ItemForm::validate`] turn them into the JSON payloads the API expects,
//! rejecting incomplete input before any request is made.
use crate::model::{CategoryId, ItemId};
use serde::{Deserialize, Serialize};

/// Category as listed by `GET /admin/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// Item as listed by `GET /admin/items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(default = "crate::model::menu::available_by_default")]
    pub available: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body for category create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    pub order: i32,
}

/// Body for item create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: CategoryId,
    pub available: bool,
    pub order: i32,
}

/// Raw category form state. `edit_id` is set while editing an existing row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub edit_id: Option<CategoryId>,
    pub name: String,
    pub description: String,
    pub order: i32,
}

impl CategoryForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Loads an existing category into the form for editing.
    pub fn editing(category: &AdminCategory) -> Self {
        Self {
            edit_id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            order: category.order,
        }
    }

    pub fn validate(&self) -> Result<CategoryPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(CategoryPayload {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            order: self.order,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw item form state.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub edit_id: Option<ItemId>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub available: bool,
    pub order: i32,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            edit_id: None,
            name: String::new(),
            description: String::new(),
            price: None,
            category_id: None,
            available: true,
            order: 0,
        }
    }
}

impl ItemForm {
    pub fn new(name: impl Into<String>, price: f64, category_id: impl Into<CategoryId>) -> Self {
        Self {
            name: name.into(),
            price: Some(price),
            category_id: Some(category_id.into()),
            ..Self::default()
        }
    }

    pub fn editing(item: &AdminItem) -> Self {
        Self {
            edit_id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: Some(item.price),
            category_id: Some(item.category_id),
            available: item.available,
            order: item.order,
        }
    }

    /// Name, a positive price and a category are mandatory.
    pub fn validate(&self) -> Result<ItemPayload, String> {
        const REQUIRED: &str = "Name, price and category are required";

        let name = self.name.trim();
        let price = self.price.filter(|p| p.is_finite() && *p > 0.0);
        match (name.is_empty(), price, self.category_id) {
            (false, Some(price), Some(category_id)) => Ok(ItemPayload {
                name: name.to_string(),
                description: self.description.trim().to_string(),
                price,
                category_id,
                available: self.available,
                order: self.order,
            }),
            _ => Err(REQUIRED.to_string()),
        }
    }

    /// Clears the form; new items default to available.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_item_defaults_to_available() {
        let item: AdminItem = serde_json::from_str(
            r#"{"id": 4, "name": "Tiramisu", "price": 6.5, "category_id": 2}"#,
        )
        .unwrap();
        assert!(item.available);
        assert_eq!(item.order, 0);

        let hidden: AdminItem = serde_json::from_str(
            r#"{"id": 5, "name": "Panna cotta", "price": 6.0, "category_id": 2, "available": false}"#,
        )
        .unwrap();
        assert!(!hidden.available);
    }

    #[test]
    fn test_category_form_requires_name() {
        assert!(CategoryForm::new("   ").validate().is_err());

        let mut form = CategoryForm::new("  Desserts ");
        form.description = " Homemade ".into();
        form.order = 2;
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Desserts");
        assert_eq!(payload.description, "Homemade");
        assert_eq!(payload.order, 2);
    }

    #[test]
    fn test_item_form_requirements() {
        assert!(ItemForm::new("Pizza", 9.5, 1).validate().is_ok());
        assert!(ItemForm::new("", 9.5, 1).validate().is_err());
        assert!(ItemForm::new("Pizza", 0.0, 1).validate().is_err());
        assert!(ItemForm::new("Pizza", f64::NAN, 1).validate().is_err());

        let mut no_category = ItemForm::new("Pizza", 9.5, 1);
        no_category.category_id = None;
        assert!(no_category.validate().is_err());
    }

    #[test]
    fn test_item_form_reset_defaults_to_available() {
        let mut form = ItemForm::new("Pizza", 9.5, 1);
        form.available = false;
        form.edit_id = Some(ItemId(4));
        form.reset();
        assert!(form.available);
        assert!(form.edit_id.is_none());
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_editing_copies_record() {
        let category = AdminCategory {
            id: CategoryId(3),
            name: "Drinks".into(),
            description: None,
            order: 5,
        };
        let form = CategoryForm::editing(&category);
        assert_eq!(form.edit_id, Some(CategoryId(3)));
        assert_eq!(form.order, 5);
        assert_eq!(form.description, "");
    }
}
