//! Notification delivery.

use tracing::{debug, error};
use vkn_api::client::VkClient;

/// Sends formatted notifications to the configured recipients.
///
/// Fire-and-forget: delivery failures are logged, never retried, and
/// never surfaced to the event handler.
pub struct Dispatcher {
    client: VkClient,
    recipients: Vec<i64>,
}

impl Dispatcher {
    pub fn new(client: VkClient, recipients: Vec<i64>) -> Self {
        Self { client, recipients }
    }

    /// Send `message` to every recipient, in order, sequentially.
    ///
    /// A failure on one recipient does not stop the remaining sends.
    pub async fn broadcast(&self, message: &str) {
        for &recipient in &self.recipients {
            match self.client.messages_send(message, recipient).await {
                Ok(body) => {
                    debug!(recipient, response = %body, "notification delivered");
                }
                Err(e) => {
                    error!(recipient, error = %e, "failed to deliver notification");
                }
            }
        }
    }

    pub fn recipients(&self) -> &[i64] {
        &self.recipients
    }
}
