use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::price::Price;

/// A catalog item.
///
/// The same shape is stored and returned to clients; there is no separate
/// response type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned at creation and never changed afterwards.
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
}

impl Item {
    /// Creates a new item with a freshly generated ID.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Sets the description for this item.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a specific ID for this item (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// Response body for listing items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub total: usize,
}

impl ItemListResponse {
    /// Builds a list response; `total` is the number of stored items.
    pub fn new(items: Vec<Item>, total: usize) -> Self {
        Self { items, total }
    }
}
