//! Port contracts for access control.

pub mod revocation;

pub use revocation::{RevocationStoreError, RevocationStoreResult, TokenRevocationStore};
