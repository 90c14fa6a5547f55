//! In-memory repository for pipeline store tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::pipeline::{
    domain::PipelineSnapshot,
    ports::{PipelineRepository, PipelineRepositoryError, PipelineRepositoryResult},
};

/// Thread-safe in-memory pipeline repository.
///
/// Clones share the same storage slot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPipelineRepository {
    state: Arc<RwLock<InMemoryPipelineState>>,
}

#[derive(Debug, Default)]
struct InMemoryPipelineState {
    snapshot: Option<PipelineSnapshot>,
    save_count: usize,
}

impl InMemoryPipelineRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: PipelineSnapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryPipelineState {
                snapshot: Some(snapshot),
                save_count: 0,
            })),
        }
    }

    /// Returns the stored snapshot without going through the port.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn stored_snapshot(&self) -> PipelineRepositoryResult<Option<PipelineSnapshot>> {
        let state = self.state.read().map_err(|err| {
            PipelineRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.snapshot.clone())
    }

    /// Returns how many saves the repository has accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineRepositoryError::Persistence`] if the lock is
    /// poisoned.
    pub fn save_count(&self) -> PipelineRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            PipelineRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.save_count)
    }
}

#[async_trait]
impl PipelineRepository for InMemoryPipelineRepository {
    async fn load(&self) -> PipelineRepositoryResult<Option<PipelineSnapshot>> {
        self.stored_snapshot()
    }

    async fn save(&self, snapshot: &PipelineSnapshot) -> PipelineRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PipelineRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.snapshot = Some(snapshot.clone());
        state.save_count += 1;
        Ok(())
    }
}
