//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::{map::Entry, IndexMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use catalog_core::item::{
    validate_item, CreateItemRequest, Item, ReplaceItemRequest, UpdateItemRequest,
};
use catalog_core::storage::{ItemRepository, Result};

/// In-memory item store.
///
/// All items sit behind a single `RwLock`, so every operation, including
/// read-modify-write ones like update and replace, is atomic with respect
/// to concurrent callers. Listing preserves insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    items: Arc<RwLock<IndexMap<Uuid, Item>>>,
}

/// Inserts `item`, drawing a new id for as long as its id is taken.
fn insert_with_fresh_id(items: &mut IndexMap<Uuid, Item>, mut item: Item) -> Item {
    loop {
        match items.entry(item.id) {
            Entry::Occupied(_) => {
                tracing::warn!(item_id = %item.id, "Item id collision, drawing a new id");
                item.id = Uuid::new_v4();
            }
            Entry::Vacant(slot) => {
                tracing::debug!(item_id = %item.id, "Inserted item");
                return slot.insert(item).clone();
            }
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn create_item(&self, request: CreateItemRequest) -> Result<Item> {
        let item = request.into_item();
        debug_assert!(validate_item(&item).is_ok(), "invalid item: {item:?}");

        let mut items = self.items.write().await;
        Ok(insert_with_fresh_id(&mut items, item))
    }

    async fn get_item(&self, id: Uuid) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn update_item(&self, id: Uuid, request: UpdateItemRequest) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };

        request.apply_to(item);
        tracing::debug!(item_id = %id, "Updated item");

        Ok(Some(item.clone()))
    }

    async fn replace_item(&self, id: Uuid, request: ReplaceItemRequest) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };

        *item = request.into_item(id);
        tracing::debug!(item_id = %id, "Replaced item");

        Ok(Some(item.clone()))
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool> {
        let mut items = self.items.write().await;
        let removed = items.shift_remove(&id).is_some();
        if removed {
            tracing::debug!(item_id = %id, "Deleted item");
        }
        Ok(removed)
    }

    async fn count_items(&self) -> Result<usize> {
        let items = self.items.read().await;
        Ok(items.len())
    }

    async fn item_exists(&self, id: Uuid) -> Result<bool> {
        let items = self.items.read().await;
        Ok(items.contains_key(&id))
    }
}
