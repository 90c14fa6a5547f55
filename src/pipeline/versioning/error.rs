//! Errors raised while encoding, upgrading or decoding pipeline documents.

use std::sync::Arc;
use thiserror::Error;

/// Schema-level failure for the persisted pipeline document.
#[derive(Debug, Clone, Error)]
pub enum SnapshotSchemaError {
    /// The document declares a version this build cannot read.
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u64),

    /// The document does not have the expected structure.
    #[error("malformed snapshot document: {0}")]
    Malformed(String),

    /// JSON encoding or decoding failed.
    #[error("snapshot serialization failed: {0}")]
    Serialization(Arc<serde_json::Error>),
}

impl SnapshotSchemaError {
    /// Creates a malformed document error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

impl From<serde_json::Error> for SnapshotSchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
