//! Request authorization combining token revocation and role policy.

use crate::access::{
    domain::{AccessPolicy, Action, Principal, Resource, RevokedToken, TokenDigest},
    ports::{RevocationStoreError, TokenRevocationStore},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Reasons a request is refused.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The presented token has been revoked.
    #[error("token has been revoked")]
    TokenRevoked,
    /// The policy does not allow the action.
    #[error("{role} may not {action} here")]
    Forbidden {
        /// Role of the refused principal.
        role: &'static str,
        /// Refused action.
        action: &'static str,
    },
    /// The revocation store failed.
    #[error(transparent)]
    Store(#[from] RevocationStoreError),
}

/// Result type for access service operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Authorization gate and token revocation manager.
pub struct AccessService<P, S, C>
where
    P: AccessPolicy,
    S: TokenRevocationStore,
    C: Clock + Send + Sync,
{
    policy: Arc<P>,
    store: Arc<S>,
    clock: Arc<C>,
}

impl<P, S, C> Clone for AccessService<P, S, C>
where
    P: AccessPolicy,
    S: TokenRevocationStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            policy: Arc::clone(&self.policy),
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, S, C> AccessService<P, S, C>
where
    P: AccessPolicy,
    S: TokenRevocationStore,
    C: Clock + Send + Sync,
{
    /// Creates a new access service.
    #[must_use]
    pub const fn new(policy: Arc<P>, store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            policy,
            store,
            clock,
        }
    }

    /// Revokes a token until its own expiry.
    ///
    /// Returns `false` without touching the store when the token has already
    /// expired.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] when the store rejects the entry.
    pub async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> AccessResult<bool> {
        let entry = RevokedToken {
            digest: TokenDigest::of(token_id),
            expires_at,
        };
        if !entry.is_live_at(self.clock.utc()) {
            return Ok(false);
        }
        self.store.revoke(entry).await?;
        tracing::info!(digest = %entry.digest, %expires_at, "token revoked");
        Ok(true)
    }

    /// Returns whether a token is currently revoked.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] when the lookup fails.
    pub async fn is_revoked(&self, token_id: &str) -> AccessResult<bool> {
        let digest = TokenDigest::of(token_id);
        Ok(self.store.is_revoked(&digest, self.clock.utc()).await?)
    }

    /// Removes revocations whose tokens have expired.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Store`] when the purge fails.
    pub async fn purge_expired(&self) -> AccessResult<usize> {
        let purged = self.store.purge_expired(self.clock.utc()).await?;
        tracing::debug!(purged, "expired revocations purged");
        Ok(purged)
    }

    /// Checks policy alone, without looking at any token.
    #[must_use]
    pub fn can_perform(&self, principal: &Principal, action: Action, resource: &Resource) -> bool {
        self.policy.can_perform(principal, action, resource)
    }

    /// Authorizes a request made with `token_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TokenRevoked`] for revoked tokens and
    /// [`AccessError::Forbidden`] when the policy refuses the action.
    pub async fn authorize(
        &self,
        token_id: &str,
        principal: &Principal,
        action: Action,
        resource: &Resource,
    ) -> AccessResult<()> {
        if self.is_revoked(token_id).await? {
            tracing::warn!(user_id = %principal.user_id(), "request with revoked token refused");
            return Err(AccessError::TokenRevoked);
        }
        if !self.can_perform(principal, action, resource) {
            tracing::warn!(
                user_id = %principal.user_id(),
                role = principal.role().as_str(),
                action = action.as_str(),
                project_id = %resource.project_id(),
                "request forbidden"
            );
            return Err(AccessError::Forbidden {
                role: principal.role().as_str(),
                action: action.as_str(),
            });
        }
        Ok(())
    }
}
