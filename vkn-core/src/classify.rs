//! Event classification.
//!
//! Maps the callback `type` string onto a closed tag set, decides what to
//! do with each tag, and extracts the acting user from the payload. The
//! Callback API names the acting user differently per event family
//! (`from_id`, `liker_id`, `user_id`, `owner_id`, or the nested message
//! sender), so the extraction table lives here next to the tags.

use vkn_api::objects::EventObject;

/// Every recognized callback event type, plus `Unknown` so that
/// classification is total over arbitrary input strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Confirmation,
    TestConnection,
    MessageReply,
    MessageTypingState,
    MessageNew,
    MessageAllow,
    MessageDeny,
    PhotoNew,
    PhotoCommentNew,
    PhotoCommentEdit,
    PhotoCommentDelete,
    AudioNew,
    VideoNew,
    WallPostNew,
    WallRepost,
    WallReplyNew,
    LikeAdd,
    LikeRemove,
    BoardPostNew,
    BoardPostEdit,
    BoardPostDelete,
    MarketCommentNew,
    MarketCommentEdit,
    MarketCommentDelete,
    GroupLeave,
    GroupJoin,
    PollVoteNew,
    Unknown(String),
}

impl EventKind {
    /// Exact, case-sensitive match against the known type names.
    pub fn parse(event_type: &str) -> Self {
        match event_type {
            "confirmation" => Self::Confirmation,
            "test_connection" => Self::TestConnection,
            "message_reply" => Self::MessageReply,
            "message_typing_state" => Self::MessageTypingState,
            "message_new" => Self::MessageNew,
            "message_allow" => Self::MessageAllow,
            "message_deny" => Self::MessageDeny,
            "photo_new" => Self::PhotoNew,
            "photo_comment_new" => Self::PhotoCommentNew,
            "photo_comment_edit" => Self::PhotoCommentEdit,
            "photo_comment_delete" => Self::PhotoCommentDelete,
            "audio_new" => Self::AudioNew,
            "video_new" => Self::VideoNew,
            "wall_post_new" => Self::WallPostNew,
            "wall_repost" => Self::WallRepost,
            "wall_reply_new" => Self::WallReplyNew,
            "like_add" => Self::LikeAdd,
            "like_remove" => Self::LikeRemove,
            "board_post_new" => Self::BoardPostNew,
            "board_post_edit" => Self::BoardPostEdit,
            "board_post_delete" => Self::BoardPostDelete,
            "market_comment_new" => Self::MarketCommentNew,
            "market_comment_edit" => Self::MarketCommentEdit,
            "market_comment_delete" => Self::MarketCommentDelete,
            "group_leave" => Self::GroupLeave,
            "group_join" => Self::GroupJoin,
            "poll_vote_new" => Self::PollVoteNew,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire name of this event type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Confirmation => "confirmation",
            Self::TestConnection => "test_connection",
            Self::MessageReply => "message_reply",
            Self::MessageTypingState => "message_typing_state",
            Self::MessageNew => "message_new",
            Self::MessageAllow => "message_allow",
            Self::MessageDeny => "message_deny",
            Self::PhotoNew => "photo_new",
            Self::PhotoCommentNew => "photo_comment_new",
            Self::PhotoCommentEdit => "photo_comment_edit",
            Self::PhotoCommentDelete => "photo_comment_delete",
            Self::AudioNew => "audio_new",
            Self::VideoNew => "video_new",
            Self::WallPostNew => "wall_post_new",
            Self::WallRepost => "wall_repost",
            Self::WallReplyNew => "wall_reply_new",
            Self::LikeAdd => "like_add",
            Self::LikeRemove => "like_remove",
            Self::BoardPostNew => "board_post_new",
            Self::BoardPostEdit => "board_post_edit",
            Self::BoardPostDelete => "board_post_delete",
            Self::MarketCommentNew => "market_comment_new",
            Self::MarketCommentEdit => "market_comment_edit",
            Self::MarketCommentDelete => "market_comment_delete",
            Self::GroupLeave => "group_leave",
            Self::GroupJoin => "group_join",
            Self::PollVoteNew => "poll_vote_new",
            Self::Unknown(other) => other,
        }
    }

    /// What the handler does with this event type.
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Confirmation => Disposition::Confirm,
            Self::MessageReply | Self::MessageTypingState => Disposition::Suppress,
            _ => Disposition::Notify,
        }
    }

    /// Which payload field carries "who acted" for this event type.
    ///
    /// `None` means the type has no acting user and no identity lookup
    /// is performed.
    pub fn actor_id(&self, object: &EventObject) -> Option<i64> {
        match self {
            Self::MessageNew | Self::MessageAllow | Self::MessageDeny => {
                Some(object.message.from_id)
            }
            Self::PhotoNew => Some(object.user_id),
            Self::PhotoCommentNew
            | Self::PhotoCommentEdit
            | Self::PhotoCommentDelete
            | Self::WallPostNew
            | Self::WallRepost
            | Self::WallReplyNew
            | Self::BoardPostNew
            | Self::BoardPostEdit
            | Self::MarketCommentNew
            | Self::MarketCommentEdit => Some(object.from_id),
            Self::AudioNew | Self::VideoNew => Some(object.owner_id),
            Self::LikeAdd | Self::LikeRemove => Some(object.liker_id),
            Self::GroupLeave | Self::GroupJoin | Self::PollVoteNew => Some(object.user_id),
            Self::Confirmation
            | Self::TestConnection
            | Self::MessageReply
            | Self::MessageTypingState
            | Self::BoardPostDelete
            | Self::MarketCommentDelete
            | Self::Unknown(_) => None,
        }
    }
}

/// What the handler does with a classified event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Respond with the configured confirmation token; nothing is sent.
    Confirm,
    /// Acknowledge without notifying. Outgoing-message echoes would loop
    /// the bot against itself and typing indicators arrive in bursts.
    Suppress,
    /// Format a notification and deliver it to every recipient.
    Notify,
}

/// Secondary classification code carried by the like events: what kind
/// of object was liked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeTarget {
    Post,
    Video,
    Photo,
    Comment,
    Note,
    TopicComment,
    PhotoComment,
    VideoComment,
    Market,
    MarketComment,
    /// Unrecognized codes fall back to a generic phrase downstream.
    Other(String),
}

impl LikeTarget {
    pub fn parse(object_type: &str) -> Self {
        match object_type {
            "post" => Self::Post,
            "video" => Self::Video,
            "photo" => Self::Photo,
            "comment" => Self::Comment,
            "note" => Self::Note,
            "topic_comment" => Self::TopicComment,
            "photo_comment" => Self::PhotoComment,
            "video_comment" => Self::VideoComment,
            "market" => Self::Market,
            "market_comment" => Self::MarketComment,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Join sub-state carried by `group_join` events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinKind {
    Accepted,
    Request,
    Other(String),
}

impl JoinKind {
    pub fn parse(join_type: &str) -> Self {
        match join_type {
            "accepted" => Self::Accepted,
            "request" => Self::Request,
            other => Self::Other(other.to_string()),
        }
    }

    /// Phrase fragment for the notification text; unrecognized sub-states
    /// yield no fragment.
    pub fn phrase(&self) -> Option<&'static str> {
        match self {
            Self::Accepted => Some("принял приглашение"),
            Self::Request => Some("подал заявку"),
            Self::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(EventKind::parse("like_add"), EventKind::LikeAdd);
        assert_eq!(
            EventKind::parse("Like_Add"),
            EventKind::Unknown("Like_Add".to_string())
        );
        assert_eq!(
            EventKind::parse("unknown_event_x"),
            EventKind::Unknown("unknown_event_x".to_string())
        );
    }

    #[test]
    fn confirmation_is_terminal() {
        assert_eq!(
            EventKind::Confirmation.disposition(),
            Disposition::Confirm
        );
    }

    #[test]
    fn echo_and_typing_events_are_suppressed() {
        assert_eq!(
            EventKind::MessageReply.disposition(),
            Disposition::Suppress
        );
        assert_eq!(
            EventKind::MessageTypingState.disposition(),
            Disposition::Suppress
        );
    }

    #[test]
    fn unknown_types_still_notify() {
        let kind = EventKind::parse("unknown_event_x");
        assert_eq!(kind.disposition(), Disposition::Notify);
    }

    #[test]
    fn actor_field_depends_on_event_family() {
        let object = EventObject {
            user_id: 1,
            from_id: 2,
            owner_id: 3,
            liker_id: 4,
            message: vkn_api::objects::MessagePayload {
                from_id: 5,
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(EventKind::MessageNew.actor_id(&object), Some(5));
        assert_eq!(EventKind::PhotoNew.actor_id(&object), Some(1));
        assert_eq!(EventKind::WallPostNew.actor_id(&object), Some(2));
        assert_eq!(EventKind::PhotoCommentDelete.actor_id(&object), Some(2));
        assert_eq!(EventKind::AudioNew.actor_id(&object), Some(3));
        assert_eq!(EventKind::LikeAdd.actor_id(&object), Some(4));
        assert_eq!(EventKind::GroupJoin.actor_id(&object), Some(1));
        assert_eq!(EventKind::BoardPostDelete.actor_id(&object), None);
        assert_eq!(EventKind::TestConnection.actor_id(&object), None);
    }

    #[test]
    fn like_target_falls_back_on_unknown_codes() {
        assert_eq!(LikeTarget::parse("post"), LikeTarget::Post);
        assert_eq!(
            LikeTarget::parse("sticker"),
            LikeTarget::Other("sticker".to_string())
        );
    }

    #[test]
    fn join_kind_phrases() {
        assert_eq!(
            JoinKind::parse("accepted").phrase(),
            Some("принял приглашение")
        );
        assert_eq!(JoinKind::parse("request").phrase(), Some("подал заявку"));
        assert_eq!(JoinKind::parse("approved").phrase(), None);
    }
}
