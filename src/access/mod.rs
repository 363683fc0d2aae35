//! Access control: one authorization policy and an explicit token
//! revocation store.
//!
//! Token verification itself happens upstream; this module only answers
//! whether an already-identified principal may act, and whether the token it
//! presented was revoked.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
