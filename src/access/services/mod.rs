//! Application services for access control.

mod guard;

pub use guard::{AccessError, AccessResult, AccessService};
