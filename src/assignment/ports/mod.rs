//! Port contracts for task auto-assignment.
//!
//! Ports define infrastructure-agnostic interfaces used by the assignment
//! workflow.

pub mod member_directory;
pub mod notification;
pub mod repository;

pub use member_directory::{MemberDirectory, MemberDirectoryError, MemberDirectoryResult};
#[cfg(test)]
pub use notification::MockNotificationDispatcher;
pub use notification::{NotificationDispatcher, NotificationError, Recipient};
pub use repository::{
    AssignedTaskRepository, AssignedTaskRepositoryError, AssignedTaskRepositoryResult,
};
