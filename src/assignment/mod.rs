//! Task auto-assignment.
//!
//! When a task is created with auto-assignment requested, the workflow ranks
//! the owning project's members by skill match, spare capacity, and fit
//! between their proficiency and the task's complexity, then persists the task
//! against the winner and notifies them. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the pure scorer in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
