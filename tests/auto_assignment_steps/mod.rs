//! Step definitions for auto-assignment scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
