//! In-memory storage backend.
//!
//! Keeps records in a map keyed by the same partition and sort keys the
//! DynamoDB backend writes, so overwrite and prefix-scan behavior match.
//! Useful for tests and for running the server without AWS.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
