//! Shared world state for auto-assignment BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskmatch::assignment::{
    adapters::memory::{
        InMemoryAssignedTaskRepository, InMemoryMemberDirectory, RecordingDispatcher,
    },
    domain::{Member, ProjectId},
    services::{AssignmentOutcome, AssignmentPorts, TaskAssignmentError, TaskAssignmentService},
};

/// Service type used by the BDD world.
pub type TestAssignmentService = TaskAssignmentService<
    InMemoryMemberDirectory,
    InMemoryAssignedTaskRepository,
    RecordingDispatcher,
    DefaultClock,
>;

/// Scenario world for auto-assignment behaviour tests.
pub struct AssignmentWorld {
    pub service: TestAssignmentService,
    pub directory: Arc<InMemoryMemberDirectory>,
    pub project: ProjectId,
    pub members: HashMap<String, Member>,
    pub last_result: Option<Result<AssignmentOutcome, TaskAssignmentError>>,
}

impl AssignmentWorld {
    /// Creates a world with an unregistered project and no members.
    #[must_use]
    pub fn new() -> Self {
        let directory = Arc::new(InMemoryMemberDirectory::new());
        let service = TaskAssignmentService::new(
            AssignmentPorts {
                directory: Arc::clone(&directory),
                repository: Arc::new(InMemoryAssignedTaskRepository::new()),
                notifier: Arc::new(RecordingDispatcher::new()),
            },
            Arc::new(DefaultClock),
        );
        Self {
            service,
            directory,
            project: ProjectId::new(),
            members: HashMap::new(),
            last_result: None,
        }
    }
}

impl Default for AssignmentWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AssignmentWorld {
    AssignmentWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
