//! Then steps for auto-assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use rstest_bdd_macros::then;
use taskmatch::assignment::{
    domain::AssignmentError, ports::MemberDirectory, services::TaskAssignmentError,
};

#[then(r#"the task is assigned to "{name}""#)]
fn task_assigned_to(world: &AssignmentWorld, name: String) -> Result<(), eyre::Report> {
    let expected = world
        .members
        .get(&name)
        .ok_or_else(|| eyre::eyre!("unknown scenario member {name}"))?;
    let outcome = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected assignment failure: {err}"))?;

    if outcome.task.assigned_to() != expected.id() {
        return Err(eyre::eyre!(
            "expected task to go to {name}, rationale was: {}",
            outcome.decision.rationale()
        ));
    }
    Ok(())
}

#[then(r#"the workload of "{name}" is {open_tasks:u32}"#)]
fn workload_of_member(
    world: &AssignmentWorld,
    name: String,
    open_tasks: u32,
) -> Result<(), eyre::Report> {
    let member = world
        .members
        .get(&name)
        .ok_or_else(|| eyre::eyre!("unknown scenario member {name}"))?;
    let stored = run_async(world.directory.find_member(member.id()))
        .map_err(|err| eyre::eyre!("member lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("member {name} disappeared from the directory"))?;

    let actual = stored.workload().open_tasks();
    if actual != open_tasks {
        return Err(eyre::eyre!(
            "expected {name} to have {open_tasks} open tasks, found {actual}"
        ));
    }
    Ok(())
}

#[then("assignment fails because there are no candidates")]
fn assignment_has_no_candidates(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing assignment result in scenario world"))?;
    if !matches!(
        result,
        Err(TaskAssignmentError::Assignment(AssignmentError::NoCandidates))
    ) {
        return Err(eyre::eyre!("expected no-candidates failure, got {result:?}"));
    }
    Ok(())
}
