//! Notification dispatcher that writes messages to the tracing log.

use async_trait::async_trait;

use crate::assignment::ports::{NotificationDispatcher, NotificationError, Recipient};

/// Dispatcher emitting each notification as an `info` tracing event.
///
/// Useful where no delivery channel is configured; the message still shows up
/// in structured logs with the recipient attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDispatcher;

#[async_trait]
impl NotificationDispatcher for TracingDispatcher {
    async fn dispatch(
        &self,
        recipient: &Recipient,
        message: &str,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            member_id = %recipient.member_id,
            email = recipient.email.as_deref().unwrap_or("<none>"),
            body = message,
            "notification dispatched"
        );
        Ok(())
    }
}
