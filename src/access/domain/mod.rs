//! Domain model for authorization and token revocation.

mod policy;
mod role;
mod token;

pub use policy::{AccessPolicy, RolePolicy};
pub use role::{Action, Principal, Resource, Role};
pub use token::{RevokedToken, TokenDigest};

use thiserror::Error;

/// Error returned while parsing roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);
