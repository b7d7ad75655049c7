//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `catalog_core::storage`. Only the in-memory backend exists;
//! items live for the lifetime of the process.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
