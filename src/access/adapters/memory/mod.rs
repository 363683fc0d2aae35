//! In-memory adapters for the access ports.

mod revocation;

pub use revocation::InMemoryRevocationStore;
