//! End-to-end workflow tests against in-memory adapters.

use super::helpers::{Workspace, open_tasks, staff, workspace};
use rstest::rstest;
use taskmatch::assignment::{
    domain::{AssignmentScorer, MemberId, ScoringWeights},
    ports::AssignedTaskRepository,
    services::CreateAssignedTaskRequest,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn equal_members_share_consecutive_tasks(workspace: Workspace) -> Result<(), eyre::Report> {
    let members = staff(
        &workspace,
        &[
            ("Ada", "development", 3, 0),
            ("Bo", "development", 3, 0),
        ],
    )
    .await?;
    let ids: Vec<MemberId> = members.iter().map(|member| member.id()).collect();

    let mut assignees = Vec::new();
    for title in ["First", "Second", "Third", "Fourth"] {
        let outcome = workspace
            .service
            .create_and_assign(CreateAssignedTaskRequest::for_project(
                workspace.project,
                title,
                "development",
            ))
            .await?;
        assignees.push(outcome.task.assigned_to());
    }

    let [ada, bo] = ids.as_slice() else {
        return Err(eyre::eyre!("expected two members"));
    };
    assert_eq!(assignees, vec![*ada, *bo, *ada, *bo]);
    assert_eq!(open_tasks(&workspace, *ada).await?, 2);
    assert_eq!(open_tasks(&workspace, *bo).await?, 2);

    let stored = workspace.repository.find_by_project(workspace.project).await?;
    let titles: Vec<&str> = stored.iter().map(|task| task.title()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third", "Fourth"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn weights_change_the_winner(workspace: Workspace) -> Result<(), eyre::Report> {
    // Busy expert against an idle intermediate on a complexity 9 task.
    let members = staff(
        &workspace,
        &[
            ("Cy", "design", 5, 8),
            ("Di", "design", 3, 0),
        ],
    )
    .await?;
    let (Some(expert), Some(idle)) = (members.first(), members.get(1)) else {
        return Err(eyre::eyre!("expected two members"));
    };
    let request = || {
        CreateAssignedTaskRequest::for_project(workspace.project, "Rebrand", "ux")
            .with_complexity(9)
    };

    let balanced = workspace
        .service
        .clone()
        .with_scorer(AssignmentScorer::new(ScoringWeights::balanced()))
        .preview(request())
        .await?;
    assert_eq!(balanced.decision.member_id(), idle.id());

    let skill_first = workspace
        .service
        .clone()
        .with_scorer(AssignmentScorer::new(ScoringWeights::skill_first()))
        .preview(request())
        .await?;
    assert_eq!(skill_first.decision.member_id(), expert.id());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_tasks_free_capacity_for_new_work(
    workspace: Workspace,
) -> Result<(), eyre::Report> {
    let members = staff(
        &workspace,
        &[
            ("Ed", "testing", 4, 0),
            ("Flo", "testing", 4, 1),
        ],
    )
    .await?;
    let (Some(ed), Some(flo)) = (members.first(), members.get(1)) else {
        return Err(eyre::eyre!("expected two members"));
    };

    let first = workspace
        .service
        .create_and_assign(CreateAssignedTaskRequest::for_project(
            workspace.project,
            "Regression suite",
            "qa",
        ))
        .await?;
    assert_eq!(first.task.assigned_to(), ed.id());

    // Completion frees Ed's slot, so Ed stays ahead of Flo.
    workspace.service.complete_task(first.task.id()).await?;
    let second = workspace
        .service
        .create_and_assign(CreateAssignedTaskRequest::for_project(
            workspace.project,
            "Smoke tests",
            "qa",
        ))
        .await?;
    assert_eq!(second.task.assigned_to(), ed.id());
    assert_eq!(open_tasks(&workspace, ed.id()).await?, 1);
    assert_eq!(open_tasks(&workspace, flo.id()).await?, 1);
    Ok(())
}
