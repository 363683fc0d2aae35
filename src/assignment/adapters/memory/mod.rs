//! In-memory adapters for the assignment ports.

mod directory;
mod notification;
mod task;

pub use directory::InMemoryMemberDirectory;
pub use notification::{RecordingDispatcher, SentNotification};
pub use task::InMemoryAssignedTaskRepository;
