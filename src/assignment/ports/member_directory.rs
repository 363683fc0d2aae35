//! Member directory port: project membership, skills, and workload.

use crate::assignment::domain::{Member, MemberId, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for member directory operations.
pub type MemberDirectoryResult<T> = Result<T, MemberDirectoryError>;

/// Lookup and bookkeeping contract for project members.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Registers a project so members can be attached to it.
    ///
    /// Registering an existing project is a no-op.
    async fn register_project(&self, project_id: ProjectId) -> MemberDirectoryResult<()>;

    /// Inserts or replaces a member, e.g. after skills were edited.
    ///
    /// A new member starts with the workload it carries. For an existing
    /// member the stored workload is kept; it only moves through
    /// [`Self::record_assignment`] and [`Self::record_release`].
    ///
    /// # Errors
    ///
    /// Returns [`MemberDirectoryError::ProjectNotFound`] when the member's
    /// project is unknown.
    async fn save_member(&self, member: &Member) -> MemberDirectoryResult<()>;

    /// Returns the members of a project in a stable order.
    ///
    /// The order is the one the scorer uses for its final tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`MemberDirectoryError::ProjectNotFound`] when the project is
    /// unknown.
    async fn members_of(&self, project_id: ProjectId) -> MemberDirectoryResult<Vec<Member>>;

    /// Finds a member by identifier.
    async fn find_member(&self, member_id: MemberId) -> MemberDirectoryResult<Option<Member>>;

    /// Adds one open task to a member's workload.
    ///
    /// # Errors
    ///
    /// Returns [`MemberDirectoryError::MemberNotFound`] when the member is
    /// unknown.
    async fn record_assignment(&self, member_id: MemberId) -> MemberDirectoryResult<()>;

    /// Removes one open task from a member's workload, never going below zero.
    ///
    /// # Errors
    ///
    /// Returns [`MemberDirectoryError::MemberNotFound`] when the member is
    /// unknown.
    async fn record_release(&self, member_id: MemberId) -> MemberDirectoryResult<()>;
}

/// Errors returned by member directory implementations.
#[derive(Debug, Clone, Error)]
pub enum MemberDirectoryError {
    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The referenced member does not exist.
    #[error("member not found: {0}")]
    MemberNotFound(MemberId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MemberDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
