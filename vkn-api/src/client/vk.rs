//! The VK method client.
//!
//! VK exposes its methods as `GET https://api.vk.com/method/{name}` with
//! the access token and API version passed as query parameters alongside
//! the per-method arguments.

use reqwest::Client;
use std::time::Duration;
use url::Url;

use super::ClientError;
use crate::objects::{UserRecord, UsersGetResponse};

/// Root URL of the VK method API.
pub const VK_API_BASE: &str = "https://api.vk.com/method/";

/// Outbound requests are bounded only by this client-level timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Typed HTTP client for the VK methods the notifier uses
/// (`users.get` and `messages.send`).
#[derive(Debug, Clone)]
pub struct VkClient {
    http: Client,
    base_url: Url,
    access_token: String,
    api_version: String,
}

impl VkClient {
    /// Create a new `VkClient`.
    ///
    /// * `base_url` – root URL of the method API (normally [`VK_API_BASE`]).
    /// * `access_token` – community or user token authorizing the calls.
    /// * `api_version` – VK API version string, e.g. `5.199`.
    pub fn new(
        base_url: Url,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            access_token: access_token.into(),
            api_version: api_version.into(),
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a different timeout or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// `GET users.get` – look up a user's display name by numeric id.
    ///
    /// The response list may be empty, e.g. for deactivated accounts;
    /// that is not an error at this layer.
    pub async fn users_get(&self, user_id: i64) -> Result<Vec<UserRecord>, ClientError> {
        let url = self.base_url.join("users.get")?;
        let user_ids = user_id.to_string();

        let resp = self
            .http
            .get(url)
            .query(&[
                ("user_ids", user_ids.as_str()),
                ("access_token", self.access_token.as_str()),
                ("v", self.api_version.as_str()),
            ])
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let bytes = resp.bytes().await?;
        let parsed: UsersGetResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.response)
    }

    /// `GET messages.send` – deliver a text message to one recipient.
    ///
    /// Returns the raw response body; VK reports errors in the body with
    /// a 200 status, so the caller logs it rather than parsing it.
    /// `random_id=0` opts out of VK's client-side deduplication.
    pub async fn messages_send(&self, message: &str, recipient: i64) -> Result<String, ClientError> {
        let url = self.base_url.join("messages.send")?;
        let user_id = recipient.to_string();

        let resp = self
            .http
            .get(url)
            .query(&[
                ("message", message),
                ("user_id", user_id.as_str()),
                ("access_token", self.access_token.as_str()),
                ("v", self.api_version.as_str()),
                ("random_id", "0"),
            ])
            .send()
            .await?;

        let resp = check_status(resp).await?;
        Ok(resp.text().await?)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    Ok(resp)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn method_urls_join_against_base() {
        let base = Url::parse(VK_API_BASE).unwrap();
        assert_eq!(
            base.join("users.get").unwrap().as_str(),
            "https://api.vk.com/method/users.get"
        );
        assert_eq!(
            base.join("messages.send").unwrap().as_str(),
            "https://api.vk.com/method/messages.send"
        );
    }
}
