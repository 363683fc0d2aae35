//! Roles, actions, principals, and resources.

use super::ParseRoleError;
use crate::assignment::domain::{MemberId, ProjectId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Role held by a user across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every project.
    Admin,
    /// Runs the projects they lead.
    TeamLeader,
    /// Works on tasks in the projects they belong to.
    Member,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::TeamLeader => "team_leader",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "team_leader" | "teamleader" | "team-leader" => Ok(Self::TeamLeader),
            "member" => Ok(Self::Member),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation a principal attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a task in a project.
    CreateTask,
    /// Run or override task assignment.
    AssignTask,
    /// Edit task fields or progress.
    UpdateTask,
    /// Remove a task.
    DeleteTask,
    /// Read a task or a project's task list.
    ViewTask,
    /// Add, remove, or edit project members.
    ManageMembers,
    /// Change or delete the project itself.
    ManageProject,
}

impl Action {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTask => "create_task",
            Self::AssignTask => "assign_task",
            Self::UpdateTask => "update_task",
            Self::DeleteTask => "delete_task",
            Self::ViewTask => "view_task",
            Self::ManageMembers => "manage_members",
            Self::ManageProject => "manage_project",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// A whole project.
    Project(ProjectId),
    /// A task inside a project.
    Task {
        /// Owning project.
        project_id: ProjectId,
        /// Current assignee, if any.
        assignee: Option<MemberId>,
    },
}

impl Resource {
    /// Returns the project the resource belongs to.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        match self {
            Self::Project(project_id) | Self::Task { project_id, .. } => *project_id,
        }
    }

    /// Returns the task assignee, if the resource is an assigned task.
    #[must_use]
    pub const fn assignee(&self) -> Option<MemberId> {
        match self {
            Self::Project(_) => None,
            Self::Task { assignee, .. } => *assignee,
        }
    }
}

/// An authenticated user and the projects they are attached to.
///
/// For team leaders the projects are the ones they lead; for members, the
/// ones they belong to. Admins need none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    user_id: MemberId,
    role: Role,
    projects: BTreeSet<ProjectId>,
}

impl Principal {
    /// Creates a principal attached to no projects.
    #[must_use]
    pub const fn new(user_id: MemberId, role: Role) -> Self {
        Self {
            user_id,
            role,
            projects: BTreeSet::new(),
        }
    }

    /// Attaches the principal to a project.
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.projects.insert(project_id);
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> MemberId {
        self.user_id
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether the principal is attached to `project_id`.
    #[must_use]
    pub fn is_attached_to(&self, project_id: ProjectId) -> bool {
        self.projects.contains(&project_id)
    }
}
