//! Best-effort display-name lookup for the acting user.

use tracing::{error, warn};
use vkn_api::client::VkClient;
use vkn_api::objects::UserRecord;

use crate::format::Identity;

/// Resolves numeric user ids to display names via `users.get`.
///
/// Infallible by design: lookup failures degrade the notification text
/// (blank names) instead of blocking delivery.
pub struct IdentityResolver {
    client: VkClient,
}

impl IdentityResolver {
    pub fn new(client: VkClient) -> Self {
        Self { client }
    }

    /// Resolve `user_id` to a first/last name pair.
    ///
    /// Transport and decode errors are logged and yield the empty
    /// identity, as does an empty lookup result.
    pub async fn resolve(&self, user_id: i64) -> Identity {
        match self.client.users_get(user_id).await {
            Ok(records) => identity_from_records(user_id, &records),
            Err(e) => {
                error!(user_id, error = %e, "user lookup failed");
                Identity::default()
            }
        }
    }
}

fn identity_from_records(user_id: i64, records: &[UserRecord]) -> Identity {
    match records.first() {
        Some(record) => Identity {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
        },
        None => {
            warn!(user_id, "user lookup returned no records");
            Identity::default()
        }
    }
}
