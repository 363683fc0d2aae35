//! Notification port for informing assignees.

use crate::assignment::domain::{Member, MemberId};
use async_trait::async_trait;
use thiserror::Error;

/// Addressee of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// Member being notified.
    pub member_id: MemberId,
    /// Display name.
    pub name: String,
    /// Delivery address, when the member has one.
    pub email: Option<String>,
}

impl From<&Member> for Recipient {
    fn from(member: &Member) -> Self {
        Self {
            member_id: member.id(),
            name: member.name().to_owned(),
            email: member.email().map(ToOwned::to_owned),
        }
    }
}

/// Delivers messages to members.
///
/// Callers treat dispatch as fire-and-forget: a failure is reported back but
/// never undoes the operation that triggered it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Sends `message` to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Delivery`] when the message could not be
    /// handed to the delivery channel.
    async fn dispatch(&self, recipient: &Recipient, message: &str)
    -> Result<(), NotificationError>;
}

/// Errors raised while composing or delivering notifications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// The message template failed to compile or render.
    #[error("notification template error: {0}")]
    Template(String),

    /// The delivery channel rejected the message.
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}
