//! Access checks gating the assignment workflow.

use std::sync::Arc;

use super::helpers::{Workspace, staff, workspace};
use chrono::{Duration, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskmatch::access::{
    adapters::memory::InMemoryRevocationStore,
    domain::{Action, Principal, Resource, Role, RolePolicy},
    services::{AccessError, AccessService},
};
use taskmatch::assignment::{
    domain::{MemberId, ProjectId},
    services::CreateAssignedTaskRequest,
};

type Gate = AccessService<RolePolicy, InMemoryRevocationStore, DefaultClock>;

#[fixture]
fn gate() -> Gate {
    AccessService::new(
        Arc::new(RolePolicy),
        Arc::new(InMemoryRevocationStore::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_assignee_may_update_an_assigned_task(
    workspace: Workspace,
    gate: Gate,
) -> Result<(), eyre::Report> {
    let members = staff(
        &workspace,
        &[("Gil", "documentation", 4, 0), ("Hal", "documentation", 2, 0)],
    )
    .await?;
    let (Some(gil), Some(hal)) = (members.first(), members.get(1)) else {
        return Err(eyre::eyre!("expected two members"));
    };

    let leader = Principal::new(MemberId::new(), Role::TeamLeader).with_project(workspace.project);
    gate.authorize(
        "leader-token",
        &leader,
        Action::CreateTask,
        &Resource::Project(workspace.project),
    )
    .await?;
    let outcome = workspace
        .service
        .create_and_assign(CreateAssignedTaskRequest::for_project(
            workspace.project,
            "User guide",
            "docs",
        ))
        .await?;
    assert_eq!(outcome.task.assigned_to(), gil.id());

    let task = Resource::Task {
        project_id: workspace.project,
        assignee: Some(outcome.task.assigned_to()),
    };
    let assignee = Principal::new(gil.id(), Role::Member).with_project(workspace.project);
    let bystander = Principal::new(hal.id(), Role::Member).with_project(workspace.project);

    gate.authorize("gil-token", &assignee, Action::UpdateTask, &task)
        .await?;
    gate.authorize("hal-token", &bystander, Action::ViewTask, &task)
        .await?;
    let refused = gate
        .authorize("hal-token", &bystander, Action::UpdateTask, &task)
        .await;
    assert!(matches!(
        refused,
        Err(AccessError::Forbidden {
            role: "member",
            action: "update_task",
        })
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn revoked_leader_token_is_refused_until_it_expires(
    gate: Gate,
) -> Result<(), eyre::Report> {
    let project = ProjectId::new();
    let leader = Principal::new(MemberId::new(), Role::TeamLeader).with_project(project);
    let resource = Resource::Project(project);

    assert!(gate.revoke("stolen", Utc::now() + Duration::hours(1)).await?);
    let refused = gate
        .authorize("stolen", &leader, Action::AssignTask, &resource)
        .await;
    assert!(matches!(refused, Err(AccessError::TokenRevoked)));

    assert!(!gate.revoke("stale", Utc::now() - Duration::minutes(1)).await?);
    gate.authorize("stale", &leader, Action::AssignTask, &resource)
        .await?;
    assert_eq!(gate.purge_expired().await?, 0);
    Ok(())
}
