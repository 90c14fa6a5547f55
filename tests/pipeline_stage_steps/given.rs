//! Given steps for pipeline stage BDD scenarios.

use super::world::{PipelineWorld, candidate_id, profile, run_async, stage_id};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an initialized empty pipeline")]
fn initialized_empty_pipeline(world: &mut PipelineWorld) -> Result<(), eyre::Report> {
    let loaded = run_async(world.store.init())
        .wrap_err("initialize pipeline store")?
        .loaded();
    eyre::ensure!(loaded == 0, "expected an empty pipeline, loaded {loaded}");
    Ok(())
}

#[given(r#"the candidate "{id}" named "{name}" has been added"#)]
fn candidate_has_been_added(
    world: &mut PipelineWorld,
    id: String,
    name: String,
) -> Result<(), eyre::Report> {
    let outcome = run_async(world.store.add_candidate(profile(&id, &name)?))
        .wrap_err("add candidate in scenario setup")?;
    eyre::ensure!(outcome.is_changed(), "candidate {id} was already present");
    Ok(())
}

#[given(r#"the candidate "{id}" has been moved to "{stage}""#)]
fn candidate_has_been_moved(
    world: &mut PipelineWorld,
    id: String,
    stage: String,
) -> Result<(), eyre::Report> {
    let outcome = run_async(
        world
            .store
            .move_candidate(&candidate_id(&id)?, stage_id(&stage)?),
    )
    .wrap_err("move candidate in scenario setup")?;
    eyre::ensure!(outcome.is_changed(), "moving {id} to {stage} changed nothing");
    Ok(())
}
