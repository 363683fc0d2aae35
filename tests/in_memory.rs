//! In-memory assignment integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `workflow_tests`: Load spreading, weight presets, completion
//! - `access_tests`: Authorization around assigned tasks, token revocation

mod in_memory {
    pub mod helpers;

    mod access_tests;
    mod workflow_tests;
}
