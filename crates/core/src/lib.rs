//! Core types and contracts for the catalog item service.
//!
//! This crate is the functional core: item types, validated request
//! payloads, and the repository trait. It performs no I/O; storage
//! backends and the HTTP layer live in the `catalog` crate.

pub mod item;
pub mod serde;
pub mod storage;
