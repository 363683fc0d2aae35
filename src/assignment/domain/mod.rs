//! Domain model for task auto-assignment.
//!
//! The domain holds the pure scoring logic together with the value types it
//! consumes and produces. Nothing here performs I/O.

mod error;
mod ids;
mod member;
mod score;
mod scorer;
mod skill;
mod task;
mod task_request;
mod weights;

pub use error::{AssignmentDomainError, AssignmentError, ParseTaskStateError};
pub use ids::{MemberId, ProjectId, TaskId};
pub use member::{Member, Workload};
pub use score::{AssignmentDecision, FitBand, Score, ScoreBreakdown, WorkloadBand};
pub use scorer::AssignmentScorer;
pub use skill::{Proficiency, Skill, SkillName};
pub use task::{AssignedTask, Assignment, PersistedAssignedTask, TaskState};
pub use task_request::{Complexity, Priority, TaskRequest};
pub use weights::ScoringWeights;
