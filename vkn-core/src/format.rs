//! Message rendering.
//!
//! Turns a classified event, its payload, and the resolved identity of
//! the acting user into the outbound notification text. Pure string
//! assembly over the configured deep-link prefixes; no I/O.

use vkn_api::objects::EventObject;

use crate::classify::{EventKind, JoinKind, LikeTarget};
use crate::config::DeepLinks;

/// Resolved display name of the acting user. Empty names are valid and
/// simply render as blanks; delivery never depends on a successful
/// lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
}

/// `{last_name} {first_name} {profile link}` — how every template refers
/// to the acting user.
fn mention(identity: &Identity, actor_id: i64) -> String {
    format!(
        "{} {} {}",
        identity.last_name,
        identity.first_name,
        DeepLinks::profile(actor_id)
    )
}

/// Render the notification text for one event.
///
/// Total over every [`EventKind`]: unknown types get a generic line with
/// the raw type name, and absent payload fields render as zeros or
/// blanks rather than failing.
pub fn render(
    kind: &EventKind,
    object: &EventObject,
    identity: &Identity,
    links: &DeepLinks,
) -> String {
    let actor = kind.actor_id(object).unwrap_or_default();
    let who = mention(identity, actor);

    match kind {
        EventKind::TestConnection => "проверка связи".to_string(),

        EventKind::MessageNew => {
            format!("входящее сообщение от {who}: {}", object.message.text)
        }
        EventKind::MessageAllow => {
            format!("подписка на сообщения от сообщества: от {who}")
        }
        EventKind::MessageDeny => {
            format!("новый запрет сообщений от сообщества: от {who}")
        }

        EventKind::PhotoNew => format!(
            "добавление фотографии в альбом {} от {who} фото {}",
            links.photo_album(object.album_id),
            links.photo_album(object.id)
        ),
        EventKind::PhotoCommentNew => format!(
            "Добавлен комментарий под фото https://vk.com/{} {} от {who}",
            links.photo_album(object.photo_id),
            object.text
        ),
        EventKind::PhotoCommentEdit => format!(
            "Отредактирован комментарий под фото https://vk.com/{} {} от {who}",
            links.photo_album(object.photo_id),
            object.text
        ),
        EventKind::PhotoCommentDelete => format!(
            "Удален комментарий под фото https://vk.com/{} {} от {who}",
            links.photo_album(object.photo_id),
            object.text
        ),

        EventKind::AudioNew => {
            format!("Добавлена аудиозапись {} от {who}", object.title)
        }
        EventKind::VideoNew => {
            format!("Добавлена видеозапись {} от {who}", object.title)
        }

        EventKind::WallPostNew => {
            format!("Добавлена запись на стене: {} от {who}", object.text)
        }
        EventKind::WallRepost => {
            format!("Добавлен репост записи на стене: {} от {who}", object.text)
        }
        EventKind::WallReplyNew => format!(
            "{who} оставил комментарий на стене: {} ссылка на запись https://vk.com/{}",
            object.text,
            links.wall_post(object.post_id)
        ),

        EventKind::LikeAdd => {
            format!("{who} поставил лайк {}", like_target(object, links))
        }
        EventKind::LikeRemove => {
            format!("{who} удалил лайк {}", like_target(object, links))
        }

        EventKind::BoardPostNew => format!(
            "Создан комментарий в обсуждении: {} с текстом {} от {who}",
            links.topic(object.topic_id),
            object.text
        ),
        EventKind::BoardPostEdit => format!(
            "Отредактирован комментарий в обсуждении: {} с текстом {} от {who}",
            links.topic(object.topic_id),
            object.text
        ),
        EventKind::BoardPostDelete => format!(
            "Удален комментарий в обсуждении: {}",
            links.topic(object.topic_id)
        ),

        EventKind::MarketCommentNew => format!(
            "Новый комментарий к товару: {} от {who} идентификатор товара {}",
            object.text, object.item_id
        ),
        EventKind::MarketCommentEdit => format!(
            "Редактирование комментария к товару: {} от {who} идентификатор товара {}",
            object.text, object.item_id
        ),
        EventKind::MarketCommentDelete => format!(
            "Удаление комментария к товару: идентификатор товара {}",
            object.item_id
        ),

        EventKind::GroupLeave => format!("{who} покинул группу"),
        EventKind::GroupJoin => {
            let mut message = format!("{who} вступил в группу");
            if let Some(phrase) = JoinKind::parse(&object.join_type).phrase() {
                message.push_str(" (");
                message.push_str(phrase);
                message.push(')');
            }
            message
        }

        EventKind::PollVoteNew => format!(
            "добавление голоса в публичном опросе: {} от {who}",
            object.poll_id
        ),

        // Filtered out before rendering by the handler; kept here so the
        // mapping stays total.
        EventKind::Confirmation | EventKind::MessageReply | EventKind::MessageTypingState => {
            format!("Произошло событие: {}", kind.as_str())
        }

        EventKind::Unknown(event_type) => {
            format!("Произошло событие: {event_type}")
        }
    }
}

/// Phrase describing the liked object and its deep link. Unrecognized
/// codes produce the generic `под {code} {id}` phrase.
fn like_target(object: &EventObject, links: &DeepLinks) -> String {
    let id = object.object_id;
    match LikeTarget::parse(&object.object_type) {
        LikeTarget::Post => format!("под записью {}", links.wall_post(id)),
        LikeTarget::Video => format!("под видеозаписью {}", links.video(id)),
        LikeTarget::Photo => format!("под фото {}", links.photo(id)),
        LikeTarget::Comment => format!("под комментарием в записи {}", links.wall_post(id)),
        LikeTarget::Note => format!("под заметкой {id}"),
        LikeTarget::TopicComment => format!("под комментарием в обсуждении {id}"),
        LikeTarget::PhotoComment => format!("под комментарием к фото {id}"),
        LikeTarget::VideoComment => format!("под комментарием к видео {id}"),
        LikeTarget::Market => format!("под товаром {id}"),
        LikeTarget::MarketComment => format!("под комментарием к товару {id}"),
        LikeTarget::Other(code) => format!("под {code} {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkn_api::objects::MessagePayload;

    fn links() -> DeepLinks {
        DeepLinks::new(123, "club")
    }

    fn named() -> Identity {
        Identity {
            first_name: "Иван".to_string(),
            last_name: "Петров".to_string(),
        }
    }

    const ALL_KINDS: &[&str] = &[
        "confirmation",
        "test_connection",
        "message_reply",
        "message_typing_state",
        "message_new",
        "message_allow",
        "message_deny",
        "photo_new",
        "photo_comment_new",
        "photo_comment_edit",
        "photo_comment_delete",
        "audio_new",
        "video_new",
        "wall_post_new",
        "wall_repost",
        "wall_reply_new",
        "like_add",
        "like_remove",
        "board_post_new",
        "board_post_edit",
        "board_post_delete",
        "market_comment_new",
        "market_comment_edit",
        "market_comment_delete",
        "group_leave",
        "group_join",
        "poll_vote_new",
        "unknown_event_x",
    ];

    #[test]
    fn every_kind_renders_on_empty_payload() {
        let object = EventObject::default();
        let identity = Identity::default();
        for event_type in ALL_KINDS {
            let kind = EventKind::parse(event_type);
            let message = render(&kind, &object, &identity, &links());
            assert!(!message.is_empty(), "empty message for {event_type}");
        }
    }

    #[test]
    fn incoming_message_includes_sender_and_text() {
        let object = EventObject {
            message: MessagePayload {
                from_id: 55,
                text: "добрый день".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let message = render(&EventKind::MessageNew, &object, &named(), &links());
        assert_eq!(
            message,
            "входящее сообщение от Петров Иван https://vk.com/id55: добрый день"
        );
    }

    #[test]
    fn video_like_links_to_the_video() {
        let object = EventObject {
            liker_id: 9,
            object_type: "video".to_string(),
            object_id: 42,
            ..Default::default()
        };
        let message = render(&EventKind::LikeAdd, &object, &named(), &links());
        assert!(message.contains("club?z=video-123_42"), "{message}");
        assert!(message.contains("поставил лайк"), "{message}");
    }

    #[test]
    fn like_removal_uses_the_same_target_table() {
        let object = EventObject {
            liker_id: 9,
            object_type: "post".to_string(),
            object_id: 7,
            ..Default::default()
        };
        let message = render(&EventKind::LikeRemove, &object, &named(), &links());
        assert!(message.contains("удалил лайк под записью club?w=wall-123_7"), "{message}");
    }

    #[test]
    fn unknown_like_target_falls_back_to_generic_phrase() {
        let object = EventObject {
            object_type: "sticker".to_string(),
            object_id: 3,
            ..Default::default()
        };
        let message = render(&EventKind::LikeAdd, &object, &named(), &links());
        assert!(message.contains("под sticker 3"), "{message}");
    }

    #[test]
    fn group_join_phrase_follows_join_type() {
        let base = EventObject {
            user_id: 77,
            ..Default::default()
        };

        let accepted = EventObject {
            join_type: "accepted".to_string(),
            ..base.clone()
        };
        let message = render(&EventKind::GroupJoin, &accepted, &named(), &links());
        assert!(message.contains("принял приглашение"), "{message}");

        let request = EventObject {
            join_type: "request".to_string(),
            ..base.clone()
        };
        let message = render(&EventKind::GroupJoin, &request, &named(), &links());
        assert!(message.contains("подал заявку"), "{message}");

        let odd = EventObject {
            join_type: "approved".to_string(),
            ..base
        };
        let message = render(&EventKind::GroupJoin, &odd, &named(), &links());
        assert!(!message.contains("принял приглашение"), "{message}");
        assert!(!message.contains("подал заявку"), "{message}");
        assert!(message.ends_with("вступил в группу"), "{message}");
    }

    #[test]
    fn unknown_event_message_carries_the_raw_type() {
        let kind = EventKind::parse("unknown_event_x");
        let message = render(&kind, &EventObject::default(), &Identity::default(), &links());
        assert_eq!(message, "Произошло событие: unknown_event_x");
    }

    #[test]
    fn empty_identity_still_renders_profile_link() {
        let object = EventObject {
            user_id: 88,
            ..Default::default()
        };
        let message = render(&EventKind::GroupLeave, &object, &Identity::default(), &links());
        assert!(message.contains("https://vk.com/id88"), "{message}");
        assert!(message.contains("покинул группу"), "{message}");
    }

    #[test]
    fn photo_upload_links_album_and_photo() {
        let object = EventObject {
            user_id: 5,
            id: 600,
            album_id: 44,
            ..Default::default()
        };
        let message = render(&EventKind::PhotoNew, &object, &named(), &links());
        assert!(message.contains("photo-123_44"), "{message}");
        assert!(message.contains("photo-123_600"), "{message}");
    }

    #[test]
    fn wall_reply_links_the_post() {
        let object = EventObject {
            from_id: 2,
            post_id: 31,
            text: "неплохо".to_string(),
            ..Default::default()
        };
        let message = render(&EventKind::WallReplyNew, &object, &named(), &links());
        assert!(
            message.contains("ссылка на запись https://vk.com/club?w=wall-123_31"),
            "{message}"
        );
    }
}
