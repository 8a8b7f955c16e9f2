//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `ConsultantRepository`
//! that keeps every consultant in a `BTreeMap` wrapped in `Arc<RwLock<_>>`.
//! Useful for tests and local runs where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use consultants::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
