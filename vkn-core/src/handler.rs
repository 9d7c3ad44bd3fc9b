//! The per-event pipeline: classify, resolve, format, dispatch, respond.

use tracing::debug;
use vkn_api::client::VkClient;
use vkn_api::objects::CallbackEvent;

use crate::classify::{Disposition, EventKind};
use crate::config::NotifierConfig;
use crate::dispatcher::Dispatcher;
use crate::format::{Identity, render};
use crate::resolver::IdentityResolver;

/// Acknowledgment returned for every event except `confirmation`.
pub const ACK: &str = "ok";

/// Processes one callback event start to finish.
///
/// Never fails: every path returns a response string, and outbound call
/// failures are absorbed by the resolver and dispatcher.
pub struct EventHandler {
    config: NotifierConfig,
    resolver: IdentityResolver,
    dispatcher: Dispatcher,
}

impl EventHandler {
    pub fn new(config: NotifierConfig, client: VkClient) -> Self {
        let recipients = config.recipients().collect();
        Self {
            resolver: IdentityResolver::new(client.clone()),
            dispatcher: Dispatcher::new(client, recipients),
            config,
        }
    }

    /// Handle one event and produce the plain-text callback response:
    /// the confirmation token for `confirmation` events, [`ACK`] for
    /// everything else.
    pub async fn handle(&self, event: CallbackEvent) -> String {
        let kind = EventKind::parse(&event.event_type);
        debug!(
            event_type = kind.as_str(),
            group_id = event.group_id,
            "callback event received"
        );

        match kind.disposition() {
            Disposition::Confirm => return self.config.confirmation_token.clone(),
            Disposition::Suppress => return ACK.to_string(),
            Disposition::Notify => {}
        }

        let identity = match kind.actor_id(&event.object) {
            Some(actor_id) => self.resolver.resolve(actor_id).await,
            None => Identity::default(),
        };

        let message = render(&kind, &event.object, &identity, &self.config.links);
        self.dispatcher.broadcast(&message).await;

        ACK.to_string()
    }
}
