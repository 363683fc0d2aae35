//! Adapter implementations for the assignment ports.

pub mod log;
pub mod memory;
pub mod postgres;
