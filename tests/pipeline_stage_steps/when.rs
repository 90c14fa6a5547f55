//! When steps for pipeline stage BDD scenarios.

use super::world::{PipelineWorld, candidate_id, profile, run_async, stage_id};
use rstest_bdd_macros::when;

#[when(r#"the candidate "{id}" named "{name}" is added"#)]
fn candidate_is_added(
    world: &mut PipelineWorld,
    id: String,
    name: String,
) -> Result<(), eyre::Report> {
    let result = run_async(world.store.add_candidate(profile(&id, &name)?));
    world.last_outcome = Some(result);
    Ok(())
}

#[when(r#"the candidate "{id}" is moved to "{stage}""#)]
fn candidate_is_moved(
    world: &mut PipelineWorld,
    id: String,
    stage: String,
) -> Result<(), eyre::Report> {
    let result = run_async(
        world
            .store
            .move_candidate(&candidate_id(&id)?, stage_id(&stage)?),
    );
    world.last_outcome = Some(result);
    Ok(())
}

#[when(r#"the candidate "{id}" is advanced"#)]
fn candidate_is_advanced(world: &mut PipelineWorld, id: String) -> Result<(), eyre::Report> {
    let result = run_async(world.store.advance_candidate(&candidate_id(&id)?));
    world.last_outcome = Some(result);
    Ok(())
}

#[when(r#"the candidate "{id}" is removed"#)]
fn candidate_is_removed(world: &mut PipelineWorld, id: String) -> Result<(), eyre::Report> {
    let result = run_async(world.store.remove_candidate(&candidate_id(&id)?));
    world.last_outcome = Some(result);
    Ok(())
}
