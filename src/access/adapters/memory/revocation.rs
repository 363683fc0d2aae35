//! In-memory token revocation store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::access::{
    domain::{RevokedToken, TokenDigest},
    ports::{RevocationStoreError, RevocationStoreResult, TokenRevocationStore},
};

/// Thread-safe in-memory revocation store.
///
/// Contents are lost on restart; use a persistent store in production.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRevocationStore {
    entries: Arc<RwLock<HashMap<TokenDigest, DateTime<Utc>>>>,
}

impl InMemoryRevocationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries held, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_error(err: impl ToString) -> RevocationStoreError {
    RevocationStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TokenRevocationStore for InMemoryRevocationStore {
    async fn revoke(&self, token: RevokedToken) -> RevocationStoreResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.insert(token.digest, token.expires_at);
        Ok(())
    }

    async fn is_revoked(
        &self,
        digest: &TokenDigest,
        now: DateTime<Utc>,
    ) -> RevocationStoreResult<bool> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.get(digest).is_some_and(|expires_at| {
            RevokedToken {
                digest: *digest,
                expires_at: *expires_at,
            }
            .is_live_at(now)
        }))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> RevocationStoreResult<usize> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at > now);
        Ok(before - entries.len())
    }
}
