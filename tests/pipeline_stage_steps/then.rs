//! Then steps for pipeline stage BDD scenarios.

use super::world::{PipelineWorld, candidate_id, run_async, stage_id};
use hirelane::pipeline::services::MutationOutcome;
use rstest_bdd_macros::then;

fn last_outcome(world: &PipelineWorld) -> Result<&MutationOutcome, eyre::Report> {
    let result = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("operation failed: {err}"))
}

#[then("the pipeline size is {count:usize}")]
fn pipeline_size_is(world: &PipelineWorld, count: usize) -> Result<(), eyre::Report> {
    let found = run_async(world.store.candidates()).len();
    eyre::ensure!(found == count, "expected {count} candidates, found {found}");
    Ok(())
}

#[then(r#"the candidate "{id}" is in stage "{stage}" with {days:u32} days"#)]
fn candidate_in_stage(
    world: &PipelineWorld,
    id: String,
    stage: String,
    days: u32,
) -> Result<(), eyre::Report> {
    let expected_stage = stage_id(&stage)?;
    let candidate = run_async(world.store.candidate(&candidate_id(&id)?))
        .ok_or_else(|| eyre::eyre!("candidate {id} is not in the pipeline"))?;

    if candidate.stage_id() != expected_stage {
        return Err(eyre::eyre!(
            "expected stage {}, found {}",
            expected_stage.as_str(),
            candidate.stage_id().as_str()
        ));
    }
    eyre::ensure!(
        candidate.days_in_stage() == days,
        "expected {days} days in stage, found {}",
        candidate.days_in_stage()
    );
    Ok(())
}

#[then(r#"the candidate "{id}" is not in the pipeline"#)]
fn candidate_absent(world: &PipelineWorld, id: String) -> Result<(), eyre::Report> {
    let present = run_async(world.store.is_candidate_in_pipeline(&candidate_id(&id)?));
    eyre::ensure!(!present, "candidate {id} is still in the pipeline");
    Ok(())
}

#[then("the last operation changed the pipeline")]
fn last_operation_changed(world: &PipelineWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        matches!(outcome, MutationOutcome::Persisted),
        "expected a persisted change, got {outcome:?}"
    );
    Ok(())
}

#[then("the last operation left the pipeline unchanged")]
fn last_operation_unchanged(world: &PipelineWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        matches!(outcome, MutationOutcome::Unchanged),
        "expected no change, got {outcome:?}"
    );
    Ok(())
}
