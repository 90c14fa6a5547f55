//! Pipeline store: the single source of truth for pipeline membership.

use crate::pipeline::{
    domain::{
        CandidateId, CandidatePatch, CandidateProfile, PipelineCandidate, PipelineSnapshot,
        PipelineSummary, StageColumn, StageId, group_by_stage, in_stage,
    },
    ports::{PipelineRepository, PipelineRepositoryError},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Service-level errors for pipeline store operations.
///
/// Unknown candidate identifiers are never an error; operations on them are
/// silent no-ops.
#[derive(Debug, Clone, Error)]
pub enum PipelineStoreError {
    /// Repository operation failed during load or an explicit flush.
    #[error(transparent)]
    Repository(#[from] PipelineRepositoryError),
    /// The store was used before [`PipelineStore::init`].
    #[error("pipeline store has not been initialized")]
    NotInitialized,
    /// [`PipelineStore::init`] was called twice.
    #[error("pipeline store is already initialized")]
    AlreadyInitialized,
    /// The store was used after [`PipelineStore::dispose`].
    #[error("pipeline store has been disposed")]
    Disposed,
}

/// Result type for pipeline store operations.
pub type PipelineStoreResult<T> = Result<T, PipelineStoreError>;

/// Effect of a mutating operation.
///
/// A failed write is not fatal: the mutation stays applied in memory and the
/// in-memory state remains authoritative for the session.
#[must_use]
#[derive(Debug, Clone)]
pub enum MutationOutcome {
    /// The collection did not change, so nothing was written.
    Unchanged,
    /// The collection changed and the snapshot was saved.
    Persisted,
    /// The collection changed but the snapshot could not be saved.
    PersistFailed(PipelineRepositoryError),
}

impl MutationOutcome {
    /// Returns `true` when the operation changed the collection.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Returns the persistence failure to surface as a warning, if any.
    #[must_use]
    pub const fn persistence_error(&self) -> Option<&PipelineRepositoryError> {
        match self {
            Self::PersistFailed(err) => Some(err),
            Self::Unchanged | Self::Persisted => None,
        }
    }
}

/// Result of hydrating the store in [`PipelineStore::init`].
#[must_use]
#[derive(Debug, Clone)]
pub enum HydrationOutcome {
    /// The stored collection was loaded; holds the number of candidates.
    Loaded(usize),
    /// Storage could not be reached, so the store started empty.
    LoadFailed(PipelineRepositoryError),
}

impl HydrationOutcome {
    /// Returns the number of candidates loaded.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        match self {
            Self::Loaded(count) => *count,
            Self::LoadFailed(_) => 0,
        }
    }

    /// Returns the storage failure to surface as a warning, if any.
    #[must_use]
    pub const fn load_error(&self) -> Option<&PipelineRepositoryError> {
        match self {
            Self::LoadFailed(err) => Some(err),
            Self::Loaded(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Ready,
    Disposed,
}

#[derive(Debug)]
struct StoreState {
    lifecycle: Lifecycle,
    candidates: Vec<PipelineCandidate>,
}

impl StoreState {
    const fn ensure_ready(&self) -> PipelineStoreResult<()> {
        match self.lifecycle {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Created => Err(PipelineStoreError::NotInitialized),
            Lifecycle::Disposed => Err(PipelineStoreError::Disposed),
        }
    }

    fn find_mut(&mut self, id: &CandidateId) -> Option<&mut PipelineCandidate> {
        self.candidates
            .iter_mut()
            .find(|candidate| candidate.id() == id)
    }
}

/// Candidate pipeline store.
///
/// Construct with [`PipelineStore::new`], hydrate once with
/// [`PipelineStore::init`], and close with [`PipelineStore::dispose`]. Every
/// mutation that changes the collection saves a full snapshot through the
/// injected repository. The state lock is held across the save, so writes
/// reach the repository in mutation order and the latest state wins.
pub struct PipelineStore<R, C>
where
    R: PipelineRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    state: Arc<Mutex<StoreState>>,
}

impl<R, C> Clone for PipelineStore<R, C>
where
    R: PipelineRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

impl<R, C> PipelineStore<R, C>
where
    R: PipelineRepository,
    C: Clock + Send + Sync,
{
    /// Creates an empty, uninitialized store.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            state: Arc::new(Mutex::new(StoreState {
                lifecycle: Lifecycle::Created,
                candidates: Vec::new(),
            })),
        }
    }

    /// Loads the stored collection and opens the store for mutation.
    ///
    /// The load happens once and is not retried. Entries repeating an
    /// identifier seen earlier in the document are dropped. When storage is
    /// unavailable the store opens empty and reports
    /// [`HydrationOutcome::LoadFailed`].
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStoreError::Repository`] when the stored document
    /// is unreadable (unknown version or malformed entries); the store then
    /// stays uninitialized so the document is not overwritten.
    /// [`PipelineStoreError::AlreadyInitialized`] and
    /// [`PipelineStoreError::Disposed`] report lifecycle misuse.
    pub async fn init(&self) -> PipelineStoreResult<HydrationOutcome> {
        let mut state = self.state.lock().await;
        match state.lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Ready => return Err(PipelineStoreError::AlreadyInitialized),
            Lifecycle::Disposed => return Err(PipelineStoreError::Disposed),
        }

        let loaded = match self.repository.load().await {
            Ok(snapshot) => snapshot
                .map(PipelineSnapshot::into_candidates)
                .unwrap_or_default(),
            Err(err @ PipelineRepositoryError::Persistence(_)) => {
                warn!(error = %err, "pipeline storage unavailable; starting empty");
                state.candidates.clear();
                state.lifecycle = Lifecycle::Ready;
                return Ok(HydrationOutcome::LoadFailed(err));
            }
            Err(err) => return Err(err.into()),
        };
        state.candidates = dedupe_by_id(loaded);
        state.lifecycle = Lifecycle::Ready;
        info!(
            candidates = state.candidates.len(),
            "pipeline store initialized"
        );
        Ok(HydrationOutcome::Loaded(state.candidates.len()))
    }

    /// Closes the store. Later mutations fail with
    /// [`PipelineStoreError::Disposed`]; reads keep returning the last state.
    ///
    /// Disposing twice is a no-op. Nothing is written: every change was
    /// already saved when it happened.
    pub async fn dispose(&self) {
        let mut state = self.state.lock().await;
        if state.lifecycle != Lifecycle::Disposed {
            state.lifecycle = Lifecycle::Disposed;
            debug!("pipeline store disposed");
        }
    }

    /// Saves the current collection on caller request, for example after a
    /// [`MutationOutcome::PersistFailed`] warning.
    ///
    /// # Errors
    ///
    /// Returns lifecycle errors or [`PipelineStoreError::Repository`] when
    /// the write fails.
    pub async fn flush(&self) -> PipelineStoreResult<()> {
        let state = self.state.lock().await;
        state.ensure_ready()?;
        let snapshot = PipelineSnapshot::capture(state.candidates.clone(), &*self.clock);
        self.repository.save(&snapshot).await?;
        Ok(())
    }

    /// Adds a candidate found by the search service.
    ///
    /// The entry starts in the first stage with medium priority and a zero day
    /// counter. Adding an identifier that is already present has no effect.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStoreError::NotInitialized`] or
    /// [`PipelineStoreError::Disposed`] outside the store's lifetime.
    pub async fn add_candidate(
        &self,
        profile: CandidateProfile,
    ) -> PipelineStoreResult<MutationOutcome> {
        self.mutate("add_candidate", move |state| {
            if state.candidates.iter().any(|c| c.id() == &profile.id) {
                return false;
            }
            state.candidates.push(PipelineCandidate::from_profile(profile));
            true
        })
        .await
    }

    /// Removes the candidate with `id`; absent identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStoreError::NotInitialized`] or
    /// [`PipelineStoreError::Disposed`] outside the store's lifetime.
    pub async fn remove_candidate(&self, id: &CandidateId) -> PipelineStoreResult<MutationOutcome> {
        self.mutate("remove_candidate", |state| {
            let before = state.candidates.len();
            state.candidates.retain(|candidate| candidate.id() != id);
            state.candidates.len() != before
        })
        .await
    }

    /// Places the candidate with `id` in `stage` and resets its day counter.
    ///
    /// Absent identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStoreError::NotInitialized`] or
    /// [`PipelineStoreError::Disposed`] outside the store's lifetime.
    pub async fn move_candidate(
        &self,
        id: &CandidateId,
        stage: StageId,
    ) -> PipelineStoreResult<MutationOutcome> {
        self.mutate("move_candidate", |state| {
            state.find_mut(id).is_some_and(|candidate| {
                let changed = candidate.stage_id() != stage || candidate.days_in_stage() != 0;
                candidate.move_to(stage);
                changed
            })
        })
        .await
    }

    /// Moves the candidate with `id` to the immediately following stage.
    ///
    /// Candidates in the terminal stage and absent identifiers are left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStoreError::NotInitialized`] or
    /// [`PipelineStoreError::Disposed`] outside the store's lifetime.
    pub async fn advance_candidate(
        &self,
        id: &CandidateId,
    ) -> PipelineStoreResult<MutationOutcome> {
        self.mutate("advance_candidate", |state| {
            let Some(candidate) = state.find_mut(id) else {
                return false;
            };
            let Some(next) = candidate.stage_id().next() else {
                return false;
            };
            candidate.move_to(next);
            true
        })
        .await
    }

    /// Shallow-merges `patch` into the candidate with `id`.
    ///
    /// Absent identifiers are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineStoreError::NotInitialized`] or
    /// [`PipelineStoreError::Disposed`] outside the store's lifetime.
    pub async fn update_candidate(
        &self,
        id: &CandidateId,
        patch: CandidatePatch,
    ) -> PipelineStoreResult<MutationOutcome> {
        self.mutate("update_candidate", move |state| {
            state.find_mut(id).is_some_and(|candidate| {
                let before = candidate.clone();
                candidate.apply(patch);
                *candidate != before
            })
        })
        .await
    }

    /// Returns `true` if a candidate with `id` is in the pipeline.
    pub async fn is_candidate_in_pipeline(&self, id: &CandidateId) -> bool {
        let state = self.state.lock().await;
        state
            .candidates
            .iter()
            .any(|candidate| candidate.id() == id)
    }

    /// Returns all candidates in insertion order.
    pub async fn candidates(&self) -> Vec<PipelineCandidate> {
        self.state.lock().await.candidates.clone()
    }

    /// Returns the candidate with `id`, if present.
    pub async fn candidate(&self, id: &CandidateId) -> Option<PipelineCandidate> {
        let state = self.state.lock().await;
        state
            .candidates
            .iter()
            .find(|candidate| candidate.id() == id)
            .cloned()
    }

    /// Returns the candidates in `stage`, in insertion order.
    pub async fn candidates_in_stage(&self, stage: StageId) -> Vec<PipelineCandidate> {
        let state = self.state.lock().await;
        in_stage(&state.candidates, stage)
    }

    /// Returns one column per stage, in stage order.
    pub async fn board(&self) -> Vec<StageColumn> {
        let state = self.state.lock().await;
        group_by_stage(&state.candidates)
    }

    /// Returns the headline counts for the board.
    pub async fn summary(&self) -> PipelineSummary {
        let state = self.state.lock().await;
        PipelineSummary::from_candidates(&state.candidates)
    }

    /// Applies `operation` and saves a snapshot when it reports a change.
    async fn mutate<F>(
        &self,
        operation: &'static str,
        apply: F,
    ) -> PipelineStoreResult<MutationOutcome>
    where
        F: FnOnce(&mut StoreState) -> bool,
    {
        let mut state = self.state.lock().await;
        state.ensure_ready()?;
        if !apply(&mut state) {
            debug!(operation, "pipeline unchanged");
            return Ok(MutationOutcome::Unchanged);
        }

        let snapshot = PipelineSnapshot::capture(state.candidates.clone(), &*self.clock);
        let outcome = match self.repository.save(&snapshot).await {
            Ok(()) => {
                debug!(
                    operation,
                    candidates = state.candidates.len(),
                    "pipeline saved"
                );
                MutationOutcome::Persisted
            }
            Err(err) => {
                warn!(operation, error = %err, "pipeline save failed; keeping in-memory state");
                MutationOutcome::PersistFailed(err)
            }
        };
        drop(state);
        Ok(outcome)
    }
}

/// Keeps the first entry for each identifier, preserving order.
fn dedupe_by_id(candidates: Vec<PipelineCandidate>) -> Vec<PipelineCandidate> {
    let mut seen = HashSet::new();
    let total = candidates.len();
    let unique: Vec<_> = candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.id().clone()))
        .collect();
    if unique.len() != total {
        warn!(
            dropped = total - unique.len(),
            "stored pipeline repeated candidate ids; kept first occurrences"
        );
    }
    unique
}
