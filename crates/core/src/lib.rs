//! Functional core for the notification channel directory.
//!
//! Domain types, the storage key codec, the repository seam and the
//! service that validates and applies the creation rules. Nothing in here
//! performs I/O on its own; storage is reached only through
//! [`storage::NotificationChannelRepository`].

pub mod channel;
pub mod storage;
