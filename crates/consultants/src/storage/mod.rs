//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `consultants_core::storage`.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory backend for tests and local runs
//!
//! The DynamoDB backend is always compiled; it is what the Lambda uses.

pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
