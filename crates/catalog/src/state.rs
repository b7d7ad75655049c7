//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The store is created once at startup and handed to the
//! router; handlers only see it through the repository trait.

use std::sync::Arc;

use catalog_core::storage::ItemRepository;

use crate::{config::Config, seed::demo_items, storage::InMemoryRepository};

/// Shared application state.
///
/// This is cloned for each request handler; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub items: Arc<dyn ItemRepository>,
    /// Runtime configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates AppState around an existing repository.
    pub fn with_repository(items: Arc<dyn ItemRepository>, config: Config) -> Self {
        Self {
            items,
            config: Arc::new(config),
        }
    }

    /// Creates AppState with in-memory storage, seeded if the config asks for it.
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let repo = Arc::new(InMemoryRepository::new());

        if config.seed_demo_data {
            let requests = demo_items();
            let count = requests.len();
            for request in requests {
                repo.create_item(request).await?;
            }
            tracing::info!(count, "Seeded demo items");
        }

        Ok(Self::with_repository(repo, config))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_repository(Arc::new(InMemoryRepository::new()), Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_is_empty() {
        let state = AppState::default();
        assert_eq!(state.items.count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_new_with_seed() {
        let config = Config {
            seed_demo_data: true,
            ..Config::default()
        };

        let state = AppState::new(config).await.unwrap();

        assert_eq!(state.items.count_items().await.unwrap(), demo_items().len());
    }

    #[tokio::test]
    async fn test_new_without_seed() {
        let state = AppState::new(Config::default()).await.unwrap();
        assert_eq!(state.items.count_items().await.unwrap(), 0);
    }
}
