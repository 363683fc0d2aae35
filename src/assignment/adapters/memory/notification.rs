//! Recording notification dispatcher.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::assignment::ports::{NotificationDispatcher, NotificationError, Recipient};

/// A notification captured by [`RecordingDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    /// Addressee.
    pub recipient: Recipient,
    /// Rendered message body.
    pub message: String,
}

/// Dispatcher that keeps every message in memory instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    sent: Arc<Mutex<Vec<SentNotification>>>,
}

impl RecordingDispatcher {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages dispatched so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn dispatch(
        &self,
        recipient: &Recipient,
        message: &str,
    ) -> Result<(), NotificationError> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|err| NotificationError::Delivery(err.to_string()))?;
        sent.push(SentNotification {
            recipient: recipient.clone(),
            message: message.to_owned(),
        });
        Ok(())
    }
}
