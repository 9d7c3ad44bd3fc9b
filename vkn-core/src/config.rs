//! Runtime configuration for the notifier.
//!
//! Built once at process start and read-only afterwards. The deep-link
//! prefixes are derived from the group id and name here so that message
//! formatting is pure string assembly.

/// Process-wide immutable settings.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Token returned verbatim for `confirmation` events.
    pub confirmation_token: String,
    /// Community access token for the outbound VK calls.
    pub access_token: String,
    /// VK API version string, e.g. `5.199`.
    pub api_version: String,
    /// Account that receives every notification.
    pub recipient: i64,
    /// Optional second account that receives a copy of every notification.
    pub control_recipient: Option<i64>,
    /// Numeric community id (positive, without the leading minus).
    pub group_id: i64,
    /// Community short name, used to build deep links.
    pub group_name: String,
    /// Link prefixes derived from `group_id` and `group_name`.
    pub links: DeepLinks,
}

impl NotifierConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        confirmation_token: String,
        access_token: String,
        api_version: String,
        recipient: i64,
        control_recipient: Option<i64>,
        group_id: i64,
        group_name: String,
    ) -> Self {
        let links = DeepLinks::new(group_id, &group_name);
        Self {
            confirmation_token,
            access_token,
            api_version,
            recipient,
            control_recipient,
            group_id,
            group_name,
            links,
        }
    }

    /// Delivery targets in send order: primary first, then the control
    /// recipient when one is configured.
    pub fn recipients(&self) -> impl Iterator<Item = i64> + '_ {
        std::iter::once(self.recipient).chain(self.control_recipient)
    }
}

/// Link prefixes pointing into the community. A full deep link is the
/// prefix concatenated with the numeric object id.
#[derive(Debug, Clone)]
pub struct DeepLinks {
    wall: String,
    photo_album: String,
    video: String,
    photo: String,
    topic: String,
}

impl DeepLinks {
    pub fn new(group_id: i64, group_name: &str) -> Self {
        Self {
            wall: format!("{group_name}?w=wall-{group_id}_"),
            photo_album: format!("photo-{group_id}_"),
            video: format!("{group_name}?z=video-{group_id}_"),
            photo: format!("{group_name}?z=photo-{group_id}_"),
            topic: format!("https://vk.com/topic-{group_id}_"),
        }
    }

    pub fn wall_post(&self, post_id: i64) -> String {
        format!("{}{post_id}", self.wall)
    }

    pub fn photo_album(&self, photo_id: i64) -> String {
        format!("{}{photo_id}", self.photo_album)
    }

    pub fn video(&self, video_id: i64) -> String {
        format!("{}{video_id}", self.video)
    }

    pub fn photo(&self, photo_id: i64) -> String {
        format!("{}{photo_id}", self.photo)
    }

    pub fn topic(&self, topic_id: i64) -> String {
        format!("{}{topic_id}", self.topic)
    }

    /// Profile link of a user; not group-dependent.
    pub fn profile(user_id: i64) -> String {
        format!("https://vk.com/id{user_id}")
    }
}
