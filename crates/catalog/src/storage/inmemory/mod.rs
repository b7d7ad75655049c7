//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of [`ItemRepository`]
//! that stores all items in an `IndexMap` wrapped in `Arc<RwLock<_>>`.
//! Data is not persisted.
//!
//! [`ItemRepository`]: catalog_core::storage::ItemRepository
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let item = repo.create_item(request).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
