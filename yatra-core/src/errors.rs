//! Error taxonomy shared by the whole workspace.
//!
//! Four categories, matching how callers are expected to react:
//! `Validation` (fix the input and retry), `Auth` (re-authenticate),
//! `Storage` (transient, safe to retry at the caller's discretion),
//! `NotFound` (referenced row absent where an empty fallback makes no sense).

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum YatraError {
    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("unauthorized: {reason}")]
    Auth { reason: String },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },
}

impl YatraError {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a storage failure.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for YatraError {
    fn from(e: serde_json::Error) -> Self {
        Self::storage(format!("serialization: {e}"))
    }
}

/// Result alias used across all yatra crates.
pub type YatraResult<T> = Result<T, YatraError>;
