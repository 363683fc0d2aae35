//! Shared helpers for in-memory assignment integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskmatch::assignment::{
    adapters::{
        log::TracingDispatcher,
        memory::{InMemoryAssignedTaskRepository, InMemoryMemberDirectory},
    },
    domain::{Member, MemberId, ProjectId, Skill, Workload},
    ports::MemberDirectory,
    services::{AssignmentPorts, TaskAssignmentService},
};

/// Workflow wired to in-memory storage and log-only notifications.
pub type LoggingService = TaskAssignmentService<
    InMemoryMemberDirectory,
    InMemoryAssignedTaskRepository,
    TracingDispatcher,
    DefaultClock,
>;

/// A workflow plus direct handles on its storage.
pub struct Workspace {
    pub service: LoggingService,
    pub directory: Arc<InMemoryMemberDirectory>,
    pub repository: Arc<InMemoryAssignedTaskRepository>,
    pub project: ProjectId,
}

/// Provides a fresh workspace with a registered, empty project.
#[fixture]
pub fn workspace() -> Workspace {
    let directory = Arc::new(InMemoryMemberDirectory::new());
    let repository = Arc::new(InMemoryAssignedTaskRepository::new());
    let service = TaskAssignmentService::new(
        AssignmentPorts {
            directory: Arc::clone(&directory),
            repository: Arc::clone(&repository),
            notifier: Arc::new(TracingDispatcher),
        },
        Arc::new(DefaultClock),
    );
    Workspace {
        service,
        directory,
        repository,
        project: ProjectId::new(),
    }
}

/// Registers the workspace project and adds one member per entry.
///
/// Entries are `(name, skill, proficiency, open_tasks)`.
///
/// # Errors
///
/// Returns an error if the directory rejects the project or a member.
pub async fn staff(
    workspace: &Workspace,
    roster: &[(&str, &str, u8, u32)],
) -> Result<Vec<Member>, eyre::Report> {
    workspace
        .directory
        .register_project(workspace.project)
        .await?;
    let mut members = Vec::with_capacity(roster.len());
    for &(name, skill, level, open_tasks) in roster {
        let member = Member::new(workspace.project, name)?
            .with_skill(Skill::new(skill, level)?)
            .with_workload(Workload::new(open_tasks));
        workspace.directory.save_member(&member).await?;
        members.push(member);
    }
    Ok(members)
}

/// Reads a member's current open-task count from the directory.
///
/// # Errors
///
/// Returns an error if the lookup fails or the member is unknown.
pub async fn open_tasks(workspace: &Workspace, member_id: MemberId) -> Result<u32, eyre::Report> {
    let member = workspace
        .directory
        .find_member(member_id)
        .await?
        .ok_or_else(|| eyre::eyre!("member {member_id} not found"))?;
    Ok(member.workload().open_tasks())
}
