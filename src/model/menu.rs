//! Menu snapshot as served by `GET /client/menu`.
//!
//! The snapshot is fetched once at startup and never mutated afterwards. The
//! cart only keeps [`ItemId`]s plus a denormalized copy of name and price.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Type-safe identifier for menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

pub(crate) fn available_by_default() -> bool {
    true
}

/// A dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price on the wire; converted to a decimal before any arithmetic.
    pub price: f64,
    #[serde(default = "available_by_default")]
    pub available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Creates an available item without description or image.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            available: true,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// A display grouping of menu items. No identity beyond display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            description: None,
            items,
        }
    }
}

/// Immutable menu snapshot. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    categories: Arc<Vec<MenuCategory>>,
}

impl Menu {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self {
            categories: Arc::new(categories),
        }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.items.is_empty())
    }

    /// Linear search across every category, returning the first match.
    ///
    /// Menus are small and lookups happen once per cart mutation, so no index
    /// is kept.
    pub fn find_item_by_id(&self, id: ItemId) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == id)
    }
}

impl From<Vec<MenuCategory>> for Menu {
    fn from(categories: Vec<MenuCategory>) -> Self {
        Self::new(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Menu {
        Menu::new(vec![
            MenuCategory::new(
                "Mains",
                vec![
                    MenuItem::new(1, "Pizza Margherita", 12.50),
                    MenuItem::new(2, "Carbonara", 14.00),
                ],
            ),
            MenuCategory::new("Desserts", vec![MenuItem::new(3, "Tiramisu", 7.50)]),
        ])
    }

    #[test]
    fn test_find_item_across_categories() {
        let menu = sample_menu();
        assert_eq!(menu.find_item_by_id(ItemId(3)).unwrap().name, "Tiramisu");
        assert_eq!(menu.find_item_by_id(ItemId(1)).unwrap().price, 12.50);
        assert!(menu.find_item_by_id(ItemId(99)).is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        let menu = Menu::new(vec![
            MenuCategory::new("A", vec![MenuItem::new(5, "First", 1.0)]),
            MenuCategory::new("B", vec![MenuItem::new(5, "Second", 2.0)]),
        ]);
        assert_eq!(menu.find_item_by_id(ItemId(5)).unwrap().name, "First");
    }

    #[test]
    fn test_deserialize_menu_json() {
        let json = r#"[
            {"name": "Mains", "description": null, "items": [
                {"id": 1, "name": "Pizza", "description": "Tomato", "price": 9.5, "available": true, "image_url": null}
            ]},
            {"name": "Drinks", "items": [{"id": 2, "name": "Water", "price": 2}]}
        ]"#;
        let categories: Vec<MenuCategory> = serde_json::from_str(json).unwrap();
        let menu = Menu::from(categories);

        assert_eq!(menu.categories().len(), 2);
        let water = menu.find_item_by_id(ItemId(2)).unwrap();
        assert!(water.available, "availability defaults to true");
        assert_eq!(water.price, 2.0);
        assert_eq!(
            menu.find_item_by_id(ItemId(1)).unwrap().description.as_deref(),
            Some("Tomato")
        );
    }

    #[test]
    fn test_empty_menu() {
        assert!(Menu::default().is_empty());
        assert!(Menu::new(vec![MenuCategory::new("Empty", vec![])]).is_empty());
        assert!(!sample_menu().is_empty());
    }
}
