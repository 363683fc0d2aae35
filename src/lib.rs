//! Taskmatch: automatic task assignment for project teams.
//!
//! This crate ranks the members of a project against a new task and assigns
//! the task to the best fit, keeping member workload and assignee
//! notification in step. It also provides the access checks that guard
//! those operations.
//!
//! # Architecture
//!
//! Taskmatch follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, logging, etc.)
//!
//! # Modules
//!
//! - [`assignment`]: Candidate scoring and the task-creation workflow
//! - [`access`]: Role-based authorization and token revocation

pub mod access;
pub mod assignment;
