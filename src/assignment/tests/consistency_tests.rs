//! Workflow behaviour when storage fails part-way through an operation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::assignment::{
    adapters::memory::{
        InMemoryAssignedTaskRepository, InMemoryMemberDirectory, RecordingDispatcher,
    },
    domain::{AssignedTask, Member, MemberId, ProjectId, Skill, SkillName, TaskId, TaskState},
    ports::{
        AssignedTaskRepository, AssignedTaskRepositoryError, AssignedTaskRepositoryResult,
        MemberDirectory, MemberDirectoryError, MemberDirectoryResult,
    },
    services::{
        AssignmentPorts, CreateAssignedTaskRequest, TaskAssignmentError, TaskAssignmentService,
    },
};

/// Directory that refuses workload changes for one chosen member.
#[derive(Debug, Default)]
struct FlakyDirectory {
    inner: InMemoryMemberDirectory,
    refuse_assignment: Mutex<Option<MemberId>>,
    refuse_release: Mutex<Option<MemberId>>,
}

impl FlakyDirectory {
    fn refuse_assignment_for(&self, member_id: MemberId) {
        *self.refuse_assignment.lock().expect("lock") = Some(member_id);
    }

    fn refuse_release_for(&self, member_id: MemberId) {
        *self.refuse_release.lock().expect("lock") = Some(member_id);
    }

    fn check(slot: &Mutex<Option<MemberId>>, member_id: MemberId) -> MemberDirectoryResult<()> {
        if *slot.lock().expect("lock") == Some(member_id) {
            return Err(MemberDirectoryError::persistence(std::io::Error::other(
                "directory offline",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl MemberDirectory for FlakyDirectory {
    async fn register_project(&self, project_id: ProjectId) -> MemberDirectoryResult<()> {
        self.inner.register_project(project_id).await
    }

    async fn save_member(&self, member: &Member) -> MemberDirectoryResult<()> {
        self.inner.save_member(member).await
    }

    async fn members_of(&self, project_id: ProjectId) -> MemberDirectoryResult<Vec<Member>> {
        self.inner.members_of(project_id).await
    }

    async fn find_member(&self, member_id: MemberId) -> MemberDirectoryResult<Option<Member>> {
        self.inner.find_member(member_id).await
    }

    async fn record_assignment(&self, member_id: MemberId) -> MemberDirectoryResult<()> {
        Self::check(&self.refuse_assignment, member_id)?;
        self.inner.record_assignment(member_id).await
    }

    async fn record_release(&self, member_id: MemberId) -> MemberDirectoryResult<()> {
        Self::check(&self.refuse_release, member_id)?;
        self.inner.record_release(member_id).await
    }
}

/// Repository whose writes can be switched off.
#[derive(Debug, Default)]
struct FlakyRepository {
    inner: InMemoryAssignedTaskRepository,
    refuse_store: AtomicBool,
    refuse_update: AtomicBool,
}

fn write_refused() -> AssignedTaskRepositoryError {
    AssignedTaskRepositoryError::persistence(std::io::Error::other("database offline"))
}

#[async_trait]
impl AssignedTaskRepository for FlakyRepository {
    async fn store(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()> {
        if self.refuse_store.load(Ordering::SeqCst) {
            return Err(write_refused());
        }
        self.inner.store(task).await
    }

    async fn update(&self, task: &AssignedTask) -> AssignedTaskRepositoryResult<()> {
        if self.refuse_update.load(Ordering::SeqCst) {
            return Err(write_refused());
        }
        self.inner.update(task).await
    }

    async fn find_by_id(&self, id: TaskId) -> AssignedTaskRepositoryResult<Option<AssignedTask>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_assignee(
        &self,
        member_id: MemberId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>> {
        self.inner.find_by_assignee(member_id).await
    }

    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> AssignedTaskRepositoryResult<Vec<AssignedTask>> {
        self.inner.find_by_project(project_id).await
    }
}

type FlakyService =
    TaskAssignmentService<FlakyDirectory, FlakyRepository, RecordingDispatcher, DefaultClock>;

struct Harness {
    service: FlakyService,
    directory: Arc<FlakyDirectory>,
    repository: Arc<FlakyRepository>,
    notifier: Arc<RecordingDispatcher>,
    project: ProjectId,
    expert: Member,
    novice: Member,
}

impl Harness {
    async fn open_tasks(&self, member_id: MemberId) -> u32 {
        self.directory
            .find_member(member_id)
            .await
            .expect("lookup succeeds")
            .expect("member exists")
            .workload()
            .open_tasks()
    }

    async fn stored(&self, task_id: TaskId) -> AssignedTask {
        self.repository
            .find_by_id(task_id)
            .await
            .expect("lookup succeeds")
            .expect("task exists")
    }

    async fn assign_one(&self) -> AssignedTask {
        self.service
            .create_and_assign(self.request())
            .await
            .expect("assignment succeeds")
            .task
    }

    fn request(&self) -> CreateAssignedTaskRequest {
        CreateAssignedTaskRequest::for_project(self.project, "Build API", "backend")
    }
}

#[fixture]
async fn harness() -> Harness {
    let directory = Arc::new(FlakyDirectory::default());
    let repository = Arc::new(FlakyRepository::default());
    let notifier = Arc::new(RecordingDispatcher::new());
    let project = ProjectId::new();
    directory
        .register_project(project)
        .await
        .expect("project registration succeeds");

    let mut roster = Vec::new();
    for (name, level) in [("Ada", 5), ("Bo", 1)] {
        let member = Member::new(project, name)
            .expect("valid member")
            .with_skill(Skill::new("development", level).expect("valid skill"));
        directory.save_member(&member).await.expect("member is saved");
        roster.push(member);
    }
    let [expert, novice]: [Member; 2] = roster.try_into().expect("two members");

    let service = TaskAssignmentService::new(
        AssignmentPorts {
            directory: Arc::clone(&directory),
            repository: Arc::clone(&repository),
            notifier: Arc::clone(&notifier),
        },
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        directory,
        repository,
        notifier,
        project,
        expert,
        novice,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_workload_increment_stores_nothing(#[future] harness: Harness) {
    let harness = harness.await;
    harness.directory.refuse_assignment_for(harness.expert.id());

    let result = harness.service.create_and_assign(harness.request()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Directory(_))));
    let stored = harness
        .repository
        .find_by_project(harness.project)
        .await
        .expect("lookup succeeds");
    assert!(stored.is_empty());
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 0);
    assert!(harness.notifier.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_store_reverts_workload_increment(#[future] harness: Harness) {
    let harness = harness.await;
    harness.repository.refuse_store.store(true, Ordering::SeqCst);

    let result = harness.service.create_and_assign(harness.request()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Repository(_))));
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 0);
    assert!(harness.notifier.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassign_keeps_assignee_when_new_increment_fails(#[future] harness: Harness) {
    let harness = harness.await;
    let task = harness.assign_one().await;
    harness.directory.refuse_assignment_for(harness.novice.id());

    let result = harness.service.reassign(task.id()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Directory(_))));
    assert_eq!(harness.stored(task.id()).await.assigned_to(), harness.expert.id());
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 1);
    assert_eq!(harness.open_tasks(harness.novice.id()).await, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassign_reverts_increment_when_release_fails(#[future] harness: Harness) {
    let harness = harness.await;
    let task = harness.assign_one().await;
    harness.directory.refuse_release_for(harness.expert.id());

    let result = harness.service.reassign(task.id()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Directory(_))));
    assert_eq!(harness.stored(task.id()).await.assigned_to(), harness.expert.id());
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 1);
    assert_eq!(harness.open_tasks(harness.novice.id()).await, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reassign_reverts_both_counters_when_update_fails(#[future] harness: Harness) {
    let harness = harness.await;
    let task = harness.assign_one().await;
    harness.repository.refuse_update.store(true, Ordering::SeqCst);

    let result = harness.service.reassign(task.id()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Repository(_))));
    assert_eq!(harness.stored(task.id()).await.assigned_to(), harness.expert.id());
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 1);
    assert_eq!(harness.open_tasks(harness.novice.id()).await, 0);
    assert_eq!(harness.notifier.sent().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_stays_open_when_release_fails(#[future] harness: Harness) {
    let harness = harness.await;
    let task = harness.assign_one().await;
    harness.directory.refuse_release_for(harness.expert.id());

    let result = harness.service.complete_task(task.id()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Directory(_))));
    assert_eq!(harness.stored(task.id()).await.state(), TaskState::Open);
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_restores_workload_when_update_fails(#[future] harness: Harness) {
    let harness = harness.await;
    let task = harness.assign_one().await;
    harness.repository.refuse_update.store(true, Ordering::SeqCst);

    let result = harness.service.complete_task(task.id()).await;

    assert!(matches!(result, Err(TaskAssignmentError::Repository(_))));
    assert_eq!(harness.stored(task.id()).await.state(), TaskState::Open);
    assert_eq!(harness.open_tasks(harness.expert.id()).await, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn skill_edit_after_assignment_keeps_open_tasks(#[future] harness: Harness) {
    let harness = harness.await;
    let snapshot = harness.expert.clone();
    harness.assign_one().await;

    let edited = snapshot.with_skill(Skill::new("design", 2).expect("valid skill"));
    harness
        .directory
        .save_member(&edited)
        .await
        .expect("member is saved");

    let stored = harness
        .directory
        .find_member(harness.expert.id())
        .await
        .expect("lookup succeeds")
        .expect("member exists");
    let design = SkillName::new("design").expect("valid skill name");
    assert_eq!(stored.workload().open_tasks(), 1);
    assert_eq!(
        stored.proficiency_in(&design).map(|level| level.level()),
        Some(2)
    );
}
