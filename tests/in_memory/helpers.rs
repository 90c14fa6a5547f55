//! Shared test helpers for in-memory pipeline integration tests.

use std::sync::Arc;

use hirelane::pipeline::{
    adapters::memory::InMemoryPipelineRepository,
    domain::{CandidateId, CandidateProfile},
    services::PipelineStore,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used across the in-memory tests.
pub type TestStore = PipelineStore<InMemoryPipelineRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryPipelineRepository {
    InMemoryPipelineRepository::new()
}

/// Builds a candidate identifier.
///
/// # Errors
///
/// Returns an error if `value` is blank.
pub fn candidate_id(value: &str) -> Result<CandidateId, eyre::Report> {
    CandidateId::new(value).map_err(|err| eyre::eyre!("invalid candidate id {value:?}: {err}"))
}

/// Builds a search profile for `id`.
///
/// # Errors
///
/// Returns an error if `id` is blank.
pub fn profile(id: &str, name: &str, role: &str) -> Result<CandidateProfile, eyre::Report> {
    Ok(CandidateProfile::new(candidate_id(id)?, name, role)
        .with_department("Engineering")
        .with_skills(vec!["rust".to_owned(), "postgres".to_owned()])
        .with_contact(format!("{id}@example.com"), "+49 30 1111"))
}

/// Creates and initializes a store backed by `repo`.
///
/// # Errors
///
/// Returns an error if initialization fails.
pub async fn open_store(repo: &InMemoryPipelineRepository) -> Result<TestStore, eyre::Report> {
    let store = PipelineStore::new(Arc::new(repo.clone()), Arc::new(DefaultClock));
    let hydrated = store.init().await?;
    eyre::ensure!(
        hydrated.load_error().is_none(),
        "in-memory load should not fail"
    );
    Ok(store)
}
