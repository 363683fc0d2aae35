//! Given steps for auto-assignment BDD scenarios.

use super::world::{AssignmentWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskmatch::assignment::{
    domain::{Member, Skill, Workload},
    ports::MemberDirectory,
};

#[given("a project with members")]
fn project_is_registered(world: &mut AssignmentWorld) -> Result<(), eyre::Report> {
    register_project(world)
}

#[given("a project with no members")]
fn empty_project_is_registered(world: &mut AssignmentWorld) -> Result<(), eyre::Report> {
    register_project(world)
}

fn register_project(world: &AssignmentWorld) -> Result<(), eyre::Report> {
    run_async(world.directory.register_project(world.project))
        .wrap_err("register scenario project")?;
    Ok(())
}

#[given(
    r#"member "{name}" has "{skill}" proficiency {level:u8} and {open_tasks:u32} open tasks"#
)]
fn member_with_skill(
    world: &mut AssignmentWorld,
    name: String,
    skill: String,
    level: u8,
    open_tasks: u32,
) -> Result<(), eyre::Report> {
    let member = Member::new(world.project, name.as_str())
        .wrap_err("construct scenario member")?
        .with_skill(Skill::new(&skill, level).wrap_err("construct scenario skill")?)
        .with_workload(Workload::new(open_tasks));
    run_async(world.directory.save_member(&member)).wrap_err("save scenario member")?;
    world.members.insert(name, member);
    Ok(())
}
