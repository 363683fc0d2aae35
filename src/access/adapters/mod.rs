//! Adapter implementations for the access ports.

pub mod memory;
