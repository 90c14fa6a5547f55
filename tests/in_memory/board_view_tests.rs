//! Board, summary and advancement reads over a populated pipeline.

use super::helpers::{TestStore, candidate_id, open_store, profile, repo};
use hirelane::pipeline::{
    adapters::memory::InMemoryPipelineRepository,
    domain::{PIPELINE_STAGES, PipelineSummary, StageId},
};
use rstest::rstest;

async fn populated(repo: &InMemoryPipelineRepository) -> Result<TestStore, eyre::Report> {
    let store = open_store(repo).await?;
    for (id, name) in [("c1", "Anna K."), ("c2", "Ben L."), ("c3", "Cara M."), ("c4", "Dan O.")] {
        let outcome = store.add_candidate(profile(id, name, "Engineer")?).await?;
        eyre::ensure!(outcome.is_changed(), "adding {id} should change the pipeline");
    }
    let moves = [
        ("c2", StageId::Interview),
        ("c4", StageId::Interview),
        ("c3", StageId::Offer),
    ];
    for (id, stage) in moves {
        let outcome = store.move_candidate(&candidate_id(id)?, stage).await?;
        eyre::ensure!(outcome.is_changed(), "moving {id} should change the pipeline");
    }
    Ok(store)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_groups_by_stage_in_insertion_order(
    repo: InMemoryPipelineRepository,
) -> Result<(), eyre::Report> {
    let store = populated(&repo).await?;

    let board = store.board().await;

    let stage_ids: Vec<StageId> = board.iter().map(|column| column.stage.id).collect();
    let expected: Vec<StageId> = PIPELINE_STAGES.iter().map(|stage| stage.id).collect();
    eyre::ensure!(stage_ids == expected, "columns out of stage order: {stage_ids:?}");

    let interview = store.candidates_in_stage(StageId::Interview).await;
    let names: Vec<&str> = interview.iter().map(|entry| entry.name()).collect();
    eyre::ensure!(names == ["Ben L.", "Dan O."], "unexpected interview column: {names:?}");

    let sizes: Vec<usize> = board.iter().map(|column| column.len()).collect();
    eyre::ensure!(sizes == [1, 2, 0, 1, 0], "unexpected column sizes: {sizes:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_counts_interviews_and_offers(
    repo: InMemoryPipelineRepository,
) -> Result<(), eyre::Report> {
    let store = populated(&repo).await?;

    let summary = store.summary().await;

    eyre::ensure!(
        summary
            == PipelineSummary {
                total: 4,
                interviewing: 2,
                open_offers: 1,
            },
        "unexpected summary: {summary:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advance_walks_to_onboarding_and_stops(
    repo: InMemoryPipelineRepository,
) -> Result<(), eyre::Report> {
    let store = populated(&repo).await?;
    let c3 = candidate_id("c3")?;

    let to_onboarding = store.advance_candidate(&c3).await?;
    let at_terminal = store.advance_candidate(&c3).await?;

    eyre::ensure!(to_onboarding.is_changed(), "offer should advance to onboarding");
    eyre::ensure!(!at_terminal.is_changed(), "onboarding has no next stage");
    let entry = store
        .candidate(&c3)
        .await
        .ok_or_else(|| eyre::eyre!("missing c3"))?;
    eyre::ensure!(entry.stage_id() == StageId::Onboarding, "c3 should be onboarding");
    Ok(())
}
