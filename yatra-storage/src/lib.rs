//! # yatra-storage
//!
//! SQLite persistence for the recommendation subsystem: the interaction log
//! and the place catalog. Versioned migrations, a single-writer/multi-reader
//! connection pool, and query modules grouped by table.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use yatra_core::errors::YatraError;

/// Wrap a low-level storage message into the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> YatraError {
    YatraError::Storage {
        message: message.into(),
    }
}
