//! Application services for task auto-assignment.

mod notice;
mod workflow;

pub use notice::NoticeTemplate;
pub use workflow::{
    AssignmentOutcome, AssignmentPorts, AssignmentPreview, CreateAssignedTaskRequest,
    TaskAssignmentError, TaskAssignmentResult, TaskAssignmentService,
};
