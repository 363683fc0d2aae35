//! Token revocation store port.

use crate::access::domain::{RevokedToken, TokenDigest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for revocation store operations.
pub type RevocationStoreResult<T> = Result<T, RevocationStoreError>;

/// Persistence contract for revoked tokens.
///
/// Entries live exactly as long as the token they revoke: once the token's
/// own expiry has passed the entry is reported as absent and may be purged.
#[async_trait]
pub trait TokenRevocationStore: Send + Sync {
    /// Records a revocation, replacing any earlier entry for the same digest.
    async fn revoke(&self, token: RevokedToken) -> RevocationStoreResult<()>;

    /// Returns whether `digest` is revoked and its token unexpired at `now`.
    async fn is_revoked(
        &self,
        digest: &TokenDigest,
        now: DateTime<Utc>,
    ) -> RevocationStoreResult<bool>;

    /// Drops entries whose token has expired at `now`, returning how many.
    async fn purge_expired(&self, now: DateTime<Utc>) -> RevocationStoreResult<usize>;
}

/// Errors returned by revocation store implementations.
#[derive(Debug, Clone, Error)]
pub enum RevocationStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RevocationStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
