//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `channel_directory_core::storage::NotificationChannelRepository`.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always compiled; it backs the tests and local
//! runs without AWS.
//!
//! # Examples
//!
//! Build without DynamoDB:
//! ```bash
//! cargo build -p channel_directory --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;
