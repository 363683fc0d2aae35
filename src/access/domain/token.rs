//! Revocation entries keyed by token digest.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a token identifier.
///
/// Stores never keep raw token identifiers, only their digests.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenDigest([u8; 32]);

impl TokenDigest {
    /// Digests a token identifier (for JWTs, the `jti` claim).
    #[must_use]
    pub fn of(token_id: &str) -> Self {
        Self(Sha256::digest(token_id.as_bytes()).into())
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for TokenDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for TokenDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenDigest({self})")
    }
}

/// A revoked token, remembered until the token would have expired anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevokedToken {
    /// Token digest.
    pub digest: TokenDigest,
    /// Expiry of the token itself.
    pub expires_at: DateTime<Utc>,
}

impl RevokedToken {
    /// Returns whether the entry is still relevant at `now`.
    #[must_use]
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
