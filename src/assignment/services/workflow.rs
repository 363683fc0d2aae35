//! Task-creation workflow with automatic assignee selection.

use crate::assignment::{
    domain::{
        AssignedTask, AssignmentDecision, AssignmentDomainError, AssignmentError,
        AssignmentScorer, Complexity, Member, MemberId, Priority, ProjectId, ScoreBreakdown,
        TaskId, TaskRequest, TaskState,
    },
    ports::{
        AssignedTaskRepository, AssignedTaskRepositoryError, MemberDirectory,
        MemberDirectoryError, NotificationDispatcher, Recipient,
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::NoticeTemplate;

/// Request payload for creating a task and assigning it automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssignedTaskRequest {
    project_id: String,
    title: String,
    task_type: String,
    description: Option<String>,
    complexity: Option<u8>,
    estimated_hours: Option<u32>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateAssignedTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        project_id: impl Into<String>,
        title: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            title: title.into(),
            task_type: task_type.into(),
            description: None,
            complexity: None,
            estimated_hours: None,
            priority: None,
            due_date: None,
        }
    }

    /// Creates a request for a known project identifier.
    #[must_use]
    pub fn for_project(
        project_id: ProjectId,
        title: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Self {
        Self::new(project_id.to_string(), title, task_type)
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task complexity (1 to 10).
    #[must_use]
    pub const fn with_complexity(mut self, complexity: u8) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Sets the estimated effort in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: u32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Sets the priority (`low`, `medium`, or `high`).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Validates the payload into a domain task request.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::InvalidTask`] when the project reference,
    /// title, or task type is missing, or a value is out of range.
    pub fn into_task_request(self) -> Result<TaskRequest, AssignmentError> {
        let Self {
            project_id,
            title,
            task_type,
            description,
            complexity,
            estimated_hours,
            priority,
            due_date,
        } = self;

        let project = parse_project_id(&project_id)?;
        let mut request = TaskRequest::new(project, title, task_type)?;
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(value) = complexity {
            request = request.with_complexity(Complexity::new(value)?);
        }
        if let Some(hours) = estimated_hours {
            request = request.with_estimated_hours(hours);
        }
        if let Some(raw) = priority {
            request = request.with_priority(Priority::try_from(raw.as_str())?);
        }
        if let Some(due) = due_date {
            request = request.with_due_date(due);
        }
        Ok(request)
    }
}

fn parse_project_id(raw: &str) -> Result<ProjectId, AssignmentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AssignmentError::InvalidTask(
            "project reference is required".to_owned(),
        ));
    }
    Uuid::parse_str(trimmed)
        .map(ProjectId::from_uuid)
        .map_err(|err| AssignmentError::InvalidTask(format!("invalid project reference: {err}")))
}

/// Service-level errors for the assignment workflow.
#[derive(Debug, Error)]
pub enum TaskAssignmentError {
    /// The task could not be assigned.
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    /// A domain rule rejected the operation.
    #[error(transparent)]
    Domain(#[from] AssignmentDomainError),
    /// Member lookup or bookkeeping failed, including unknown projects.
    #[error(transparent)]
    Directory(#[from] MemberDirectoryError),
    /// Task persistence failed.
    #[error(transparent)]
    Repository(#[from] AssignedTaskRepositoryError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Result type for assignment workflow operations.
pub type TaskAssignmentResult<T> = Result<T, TaskAssignmentError>;

/// Stored task together with the decision that placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    /// Persisted task.
    pub task: AssignedTask,
    /// Decision that selected the assignee.
    pub decision: AssignmentDecision,
}

/// Scoring result computed without persisting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPreview {
    /// The member that would be selected.
    pub decision: AssignmentDecision,
    /// Every eligible candidate, best first.
    pub ranking: Vec<ScoreBreakdown>,
}

/// Collaborators the assignment workflow runs against.
pub struct AssignmentPorts<D, R, N> {
    /// Member lookup and workload bookkeeping.
    pub directory: Arc<D>,
    /// Task persistence.
    pub repository: Arc<R>,
    /// Assignee notification.
    pub notifier: Arc<N>,
}

/// Task-creation workflow: validate, score, persist, notify.
pub struct TaskAssignmentService<D, R, N, C>
where
    D: MemberDirectory,
    R: AssignedTaskRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    directory: Arc<D>,
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
    scorer: AssignmentScorer,
    notice: NoticeTemplate,
}

impl<D, R, N, C> Clone for TaskAssignmentService<D, R, N, C>
where
    D: MemberDirectory,
    R: AssignedTaskRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
            scorer: self.scorer,
            notice: self.notice.clone(),
        }
    }
}

impl<D, R, N, C> TaskAssignmentService<D, R, N, C>
where
    D: MemberDirectory,
    R: AssignedTaskRepository,
    N: NotificationDispatcher,
    C: Clock + Send + Sync,
{
    /// Creates a workflow with default scoring weights and notice wording.
    #[must_use]
    pub fn new(ports: AssignmentPorts<D, R, N>, clock: Arc<C>) -> Self {
        let AssignmentPorts {
            directory,
            repository,
            notifier,
        } = ports;
        Self {
            directory,
            repository,
            notifier,
            clock,
            scorer: AssignmentScorer::default(),
            notice: NoticeTemplate::default(),
        }
    }

    /// Replaces the scorer, e.g. to apply configured weights.
    #[must_use]
    pub fn with_scorer(mut self, scorer: AssignmentScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replaces the notice template.
    #[must_use]
    pub fn with_notice(mut self, notice: NoticeTemplate) -> Self {
        self.notice = notice;
        self
    }

    /// Creates a task and assigns it to the best-scoring project member.
    ///
    /// The winner's workload is incremented before the task is stored, and
    /// the increment is reverted if storing fails. A notification is sent
    /// last; notification failures are logged and do not fail the operation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Assignment`] for invalid requests or
    /// projects without eligible members, and
    /// [`TaskAssignmentError::Directory`] with
    /// [`MemberDirectoryError::ProjectNotFound`] for unknown projects.
    pub async fn create_and_assign(
        &self,
        request: CreateAssignedTaskRequest,
    ) -> TaskAssignmentResult<AssignmentOutcome> {
        let task_request = request.into_task_request()?;
        let members = self.directory.members_of(task_request.project_id()).await?;
        let decision = self.decide(&task_request, &members)?;

        let task = AssignedTask::new(task_request, &decision, &*self.clock);
        self.directory.record_assignment(decision.member_id()).await?;
        if let Err(err) = self.repository.store(&task).await {
            self.undo_assignment(decision.member_id()).await;
            return Err(err.into());
        }

        tracing::info!(
            task_id = %task.id(),
            project_id = %task.project_id(),
            member_id = %decision.member_id(),
            score = %decision.score(),
            rationale = decision.rationale(),
            "task auto-assigned"
        );
        self.notify(find_member(&members, decision.member_id()), &task)
            .await;

        Ok(AssignmentOutcome { task, decision })
    }

    /// Scores the project's members for a task without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns the same validation, lookup, and empty-pool errors as
    /// [`Self::create_and_assign`].
    pub async fn preview(
        &self,
        request: CreateAssignedTaskRequest,
    ) -> TaskAssignmentResult<AssignmentPreview> {
        let task_request = request.into_task_request()?;
        let members = self.directory.members_of(task_request.project_id()).await?;
        let ranking = self.scorer.rank(&task_request, &members);
        let decision = ranking
            .first()
            .copied()
            .map(AssignmentDecision::from_breakdown)
            .ok_or(AssignmentError::NoCandidates)?;
        Ok(AssignmentPreview { decision, ranking })
    }

    /// Hands an open task to the best-scoring member other than its current
    /// assignee.
    ///
    /// Workload counters move first; if a later step fails they are moved
    /// back and the stored task keeps its previous assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::TaskNotFound`] for unknown tasks,
    /// [`AssignmentDomainError::TaskAlreadyCompleted`] for finished tasks, and
    /// [`AssignmentError::NoCandidates`] when nobody else is eligible.
    pub async fn reassign(&self, task_id: TaskId) -> TaskAssignmentResult<AssignmentOutcome> {
        let mut task = self.load(task_id).await?;
        if task.state() == TaskState::Done {
            return Err(AssignmentDomainError::TaskAlreadyCompleted(task_id).into());
        }
        let previous = task.assigned_to();

        let members = self.directory.members_of(task.project_id()).await?;
        let others: Vec<Member> = members
            .into_iter()
            .filter(|member| member.id() != previous)
            .collect();
        let decision = self.decide(task.request(), &others)?;

        task.reassign(&decision, &*self.clock)?;
        let next = decision.member_id();
        self.directory.record_assignment(next).await?;
        if let Err(err) = self.directory.record_release(previous).await {
            self.undo_assignment(next).await;
            return Err(err.into());
        }
        if let Err(err) = self.repository.update(&task).await {
            self.undo_assignment(next).await;
            self.undo_release(previous).await;
            return Err(err.into());
        }

        tracing::info!(
            task_id = %task.id(),
            from = %previous,
            to = %decision.member_id(),
            score = %decision.score(),
            "task reassigned"
        );
        self.notify(find_member(&others, decision.member_id()), &task)
            .await;

        Ok(AssignmentOutcome { task, decision })
    }

    /// Marks a task as done and releases it from the assignee's workload.
    ///
    /// The release is reverted when the task update fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::TaskNotFound`] for unknown tasks and
    /// [`AssignmentDomainError::TaskAlreadyCompleted`] when the task is
    /// already done.
    pub async fn complete_task(&self, task_id: TaskId) -> TaskAssignmentResult<AssignedTask> {
        let mut task = self.load(task_id).await?;
        task.complete(&*self.clock)?;
        self.directory.record_release(task.assigned_to()).await?;
        if let Err(err) = self.repository.update(&task).await {
            self.undo_release(task.assigned_to()).await;
            return Err(err.into());
        }
        tracing::info!(task_id = %task.id(), member_id = %task.assigned_to(), "task completed");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Repository`] when lookup fails.
    pub async fn find_task(&self, task_id: TaskId) -> TaskAssignmentResult<Option<AssignedTask>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Lists the tasks assigned to a member, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAssignmentError::Repository`] when lookup fails.
    pub async fn tasks_for_member(
        &self,
        member_id: MemberId,
    ) -> TaskAssignmentResult<Vec<AssignedTask>> {
        Ok(self.repository.find_by_assignee(member_id).await?)
    }

    fn decide(
        &self,
        task: &TaskRequest,
        candidates: &[Member],
    ) -> Result<AssignmentDecision, AssignmentError> {
        let ranking = self.scorer.rank(task, candidates);
        for breakdown in &ranking {
            tracing::debug!(
                member_id = %breakdown.member_id,
                skill_match = breakdown.skill_match,
                workload_capacity = breakdown.workload_capacity,
                complexity_fit = breakdown.complexity_fit,
                score = %breakdown.score,
                "candidate scored"
            );
        }
        ranking
            .first()
            .copied()
            .map(AssignmentDecision::from_breakdown)
            .ok_or(AssignmentError::NoCandidates)
    }

    /// Reverts a workload increment after a later step failed.
    async fn undo_assignment(&self, member_id: MemberId) {
        if let Err(err) = self.directory.record_release(member_id).await {
            tracing::error!(%member_id, error = %err, "could not revert workload increment");
        }
    }

    /// Reverts a workload decrement after a later step failed.
    async fn undo_release(&self, member_id: MemberId) {
        if let Err(err) = self.directory.record_assignment(member_id).await {
            tracing::error!(%member_id, error = %err, "could not revert workload decrement");
        }
    }

    async fn load(&self, task_id: TaskId) -> TaskAssignmentResult<AssignedTask> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskAssignmentError::TaskNotFound(task_id))
    }

    async fn notify(&self, member: Option<&Member>, task: &AssignedTask) {
        let Some(assignee) = member else {
            tracing::warn!(task_id = %task.id(), "assignee missing from roster, notification skipped");
            return;
        };
        let recipient = Recipient::from(assignee);
        let outcome = match self.notice.render(&recipient, task) {
            Ok(message) => self.notifier.dispatch(&recipient, &message).await,
            Err(err) => Err(err),
        };
        if let Err(err) = outcome {
            tracing::warn!(
                task_id = %task.id(),
                member_id = %recipient.member_id,
                error = %err,
                "assignment notification failed"
            );
        }
    }
}

fn find_member(members: &[Member], member_id: MemberId) -> Option<&Member> {
    members.iter().find(|member| member.id() == member_id)
}
