//! Repository port for loading and saving the pipeline snapshot.

use crate::pipeline::{domain::PipelineSnapshot, versioning::SnapshotSchemaError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for pipeline repository operations.
pub type PipelineRepositoryResult<T> = Result<T, PipelineRepositoryError>;

/// Pipeline persistence contract.
///
/// The whole collection lives in one storage slot; every save replaces the
/// previous snapshot.
#[async_trait]
pub trait PipelineRepository: Send + Sync {
    /// Reads the stored snapshot.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineRepositoryError::Schema`] when the stored document
    /// cannot be read, or [`PipelineRepositoryError::Persistence`] when the
    /// backend fails.
    async fn load(&self) -> PipelineRepositoryResult<Option<PipelineSnapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineRepositoryError::Persistence`] when the backend
    /// rejects the write.
    async fn save(&self, snapshot: &PipelineSnapshot) -> PipelineRepositoryResult<()>;
}

/// Errors returned by pipeline repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PipelineRepositoryError {
    /// The stored document could not be encoded, upgraded or decoded.
    #[error(transparent)]
    Schema(#[from] SnapshotSchemaError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PipelineRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
