//! Reloading a store from the snapshot a previous store saved.

use std::sync::Arc;

use super::helpers::{candidate_id, open_store, profile, repo};
use hirelane::pipeline::{
    adapters::memory::InMemoryPipelineRepository,
    domain::{CandidatePatch, Priority, StageId},
    services::{PipelineStore, PipelineStoreError},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_store_sees_identical_collection(
    repo: InMemoryPipelineRepository,
) -> Result<(), eyre::Report> {
    let first = open_store(&repo).await?;
    for (id, name) in [("c3", "Cara M."), ("c1", "Anna K."), ("c2", "Ben L.")] {
        let outcome = first.add_candidate(profile(id, name, "Engineer")?).await?;
        eyre::ensure!(outcome.is_changed(), "adding {id} should change the pipeline");
    }
    let patch = CandidatePatch::new()
        .with_priority(Priority::High)
        .with_next_action("Send take-home");
    let updated = first.update_candidate(&candidate_id("c1")?, patch).await?;
    eyre::ensure!(updated.is_changed(), "patch should change c1");
    let moved = first
        .move_candidate(&candidate_id("c2")?, StageId::Selection)
        .await?;
    eyre::ensure!(moved.is_changed(), "move should change c2");
    let expected = first.candidates().await;
    first.dispose().await;

    let second = PipelineStore::new(Arc::new(repo.clone()), Arc::new(DefaultClock));
    let loaded = second.init().await?.loaded();

    eyre::ensure!(loaded == 3, "expected three candidates, loaded {loaded}");
    eyre::ensure!(second.candidates().await == expected, "reloaded collection differs");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disposed_store_rejects_mutations(
    repo: InMemoryPipelineRepository,
) -> Result<(), eyre::Report> {
    let store = open_store(&repo).await?;
    store.dispose().await;

    let result = store.add_candidate(profile("c1", "Anna K.", "Engineer")?).await;

    eyre::ensure!(
        matches!(result, Err(PipelineStoreError::Disposed)),
        "expected Disposed, got {result:?}"
    );
    eyre::ensure!(repo.save_count()? == 0, "dispose should not write");
    Ok(())
}
