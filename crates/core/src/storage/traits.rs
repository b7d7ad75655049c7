use async_trait::async_trait;
use uuid::Uuid;

use crate::item::{CreateItemRequest, Item, ReplaceItemRequest, UpdateItemRequest};

use super::Result;

/// Repository for item operations.
///
/// A missing item is a normal outcome, reported as `Ok(None)` or
/// `Ok(false)`. `Err` is reserved for the backend failing to serve the call.
/// Requests arrive already validated.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Creates a new item with a freshly generated ID and returns it.
    async fn create_item(&self, request: CreateItemRequest) -> Result<Item>;

    /// Gets an item by its ID.
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>>;

    /// Gets all items.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Applies a partial update and returns the updated item.
    ///
    /// Returns `None` if no item has the given ID.
    async fn update_item(&self, id: Uuid, request: UpdateItemRequest) -> Result<Option<Item>>;

    /// Overwrites every field except the ID and returns the new item.
    ///
    /// Returns `None` if no item has the given ID; never creates one.
    async fn replace_item(&self, id: Uuid, request: ReplaceItemRequest) -> Result<Option<Item>>;

    /// Deletes an item by its ID. Returns false if it did not exist.
    async fn delete_item(&self, id: Uuid) -> Result<bool>;

    /// Returns the number of stored items.
    async fn count_items(&self) -> Result<usize>;

    /// Checks whether an item with the given ID exists.
    async fn item_exists(&self, id: Uuid) -> Result<bool>;
}
