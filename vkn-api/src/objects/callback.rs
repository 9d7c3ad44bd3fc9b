//! Inbound Callback API payload types.
//!
//! Every event arrives as a JSON object with a `type` discriminator, an
//! `object` whose shape depends on the type, and the community `group_id`.
//! Only `type` is guaranteed to be present, so every payload field is
//! defaulted and decoding never fails on a partial object.

use serde::Deserialize;

/// One callback notification from VK describing a single state change in
/// the community (new message, new comment, like, membership change, …).
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackEvent {
    /// The event type discriminator, e.g. `message_new` or `like_add`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Type-dependent payload.
    #[serde(default)]
    pub object: EventObject,
    /// Numeric id of the community that produced the event.
    #[serde(default)]
    pub group_id: i64,
}

/// The union of all payload fields the Callback API sends across event
/// types. Which fields are meaningful depends on the event type; the
/// rest decode to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventObject {
    /// Acting user for membership, poll, and photo-upload events.
    #[serde(default)]
    pub user_id: i64,
    /// Acting user for wall, board, and comment events.
    #[serde(default)]
    pub from_id: i64,
    /// Acting user for audio and video events.
    #[serde(default)]
    pub owner_id: i64,
    /// Acting user for like events.
    #[serde(default)]
    pub liker_id: i64,
    /// Id of the photo or comment itself.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub photo_id: i64,
    #[serde(default)]
    pub post_id: i64,
    #[serde(default)]
    pub topic_id: i64,
    #[serde(default)]
    pub item_id: i64,
    #[serde(default)]
    pub poll_id: i64,
    /// Album the photo was added to.
    #[serde(default)]
    pub album_id: i64,
    /// Title of the audio or video record.
    #[serde(default)]
    pub title: String,
    /// Kind of the liked object (`post`, `video`, `photo`, …).
    #[serde(default)]
    pub object_type: String,
    /// Id of the liked object.
    #[serde(default)]
    pub object_id: i64,
    /// How the user joined the group (`accepted`, `request`, …).
    #[serde(default)]
    pub join_type: String,
    /// Free-text content of the post or comment.
    #[serde(default)]
    pub text: String,
    /// Nested personal-message record for the message events.
    #[serde(default)]
    pub message: MessagePayload,
}

/// Personal message record nested inside the message-section events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub id: i64,
    /// Send time in Unixtime.
    #[serde(default)]
    pub date: i64,
    /// Sender id.
    #[serde(default)]
    pub from_id: i64,
    /// Message text.
    #[serde(default)]
    pub text: String,
}
