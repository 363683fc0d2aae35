//! Role-based authorization rules.

use super::{Action, Principal, Resource, Role};

/// Decides whether a principal may perform an action on a resource.
///
/// This is the single authorization entry point; handlers ask it instead of
/// checking roles themselves.
pub trait AccessPolicy: Send + Sync {
    /// Returns `true` when `principal` may perform `action` on `resource`.
    fn can_perform(&self, principal: &Principal, action: Action, resource: &Resource) -> bool;
}

/// Default role-based policy.
///
/// - admins may do anything;
/// - team leaders may do anything but [`Action::ManageProject`] within the
///   projects they lead;
/// - members may view tasks of their projects and update tasks assigned to
///   them;
/// - everything else is denied.
///
/// # Examples
///
/// ```
/// use taskmatch::access::domain::{AccessPolicy, Action, Principal, Resource, Role, RolePolicy};
/// use taskmatch::assignment::domain::{MemberId, ProjectId};
///
/// let project = ProjectId::new();
/// let member = Principal::new(MemberId::new(), Role::Member).with_project(project);
///
/// assert!(RolePolicy.can_perform(&member, Action::ViewTask, &Resource::Project(project)));
/// assert!(!RolePolicy.can_perform(&member, Action::DeleteTask, &Resource::Project(project)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn can_perform(&self, principal: &Principal, action: Action, resource: &Resource) -> bool {
        match principal.role() {
            Role::Admin => true,
            _ if !principal.is_attached_to(resource.project_id()) => false,
            Role::TeamLeader => action != Action::ManageProject,
            Role::Member => match action {
                Action::ViewTask => true,
                Action::UpdateTask => resource.assignee() == Some(principal.user_id()),
                _ => false,
            },
        }
    }
}
