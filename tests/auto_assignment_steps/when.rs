//! When steps for auto-assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use rstest_bdd_macros::when;
use taskmatch::assignment::services::CreateAssignedTaskRequest;

#[when(r#"a "{task_type}" task of complexity {complexity:u8} is created with auto-assignment"#)]
fn create_task_with_auto_assignment(
    world: &mut AssignmentWorld,
    task_type: String,
    complexity: u8,
) {
    let request = CreateAssignedTaskRequest::for_project(world.project, "Scenario task", task_type)
        .with_complexity(complexity);
    world.last_result = Some(run_async(world.service.create_and_assign(request)));
}
