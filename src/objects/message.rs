use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    ids::{BusinessConnectionId, ChatId, CustomEmojiId, MessageId, MessageThreadId, UserId},
    objects::{
        Animation,
        Audio,
        Chat,
        Document,
        InlineKeyboardMarkup,
        LinkPreviewOptions,
        ParseMode,
        PhotoSize,
        Sticker,
        User,
        Video,
        VideoNote,
        Voice,
        is_false,
    },
};

/// This object represents a [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Message {
    #[serde(rename = "message_id")]
    pub id: MessageId,

    /// Unique identifier of a message thread to which the message belongs; for supergroups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<MessageThreadId>,

    /// Sender of the message; empty for messages sent to channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,

    /// Sender of the message, sent on behalf of a chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_chat: Option<Chat>,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_connection_id: Option<BusinessConnectionId>,

    pub chat: Chat,

    /// Information about the original message for forwarded messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_origin: Option<MessageOrigin>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_topic_message: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_automatic_forward: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,

    /// Bot through which the message was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_bot: Option<User>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub edit_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub has_protected_content: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_signature: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,

    /// Available sizes of the photo.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_note: Option<VideoNote>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<Voice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caption_entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub has_media_spoiler: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice: Option<Dice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<Poll>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub new_chat_members: Vec<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub new_chat_photo: Vec<PhotoSize>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub delete_chat_photo: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub group_chat_created: bool,

    /// The group has been migrated to a supergroup with the specified identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<ChatId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_from_chat_id: Option<ChatId>,

    /// Inline keyboard attached to the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Identifier of a sent message, as returned by `copyMessage` and alike.
///
/// See also: <https://core.telegram.org/bots/api#messageid>.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessageId {
    pub message_id: MessageId,
}

/// This object represents one [special entity][1] in a text message.
///
/// [1]: https://core.telegram.org/bots/api#messageentity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityKind,

    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: u32,

    /// Length of the entity in UTF-16 code units.
    pub length: u32,

    /// For `text_link` only, URL that will be opened after user taps on the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// For `text_mention` only, the mentioned user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// For `pre` only, the programming language of the entity text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<CustomEmojiId>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityKind {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Blockquote,
    ExpandableBlockquote,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// This object describes the [origin of a message][1].
///
/// [1]: https://core.telegram.org/bots/api#messageorigin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageOrigin {
    User {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,

        sender_user: User,
    },

    HiddenUser {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,

        sender_user_name: String,
    },

    Chat {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,

        sender_chat: Chat,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        author_signature: Option<String>,
    },

    Channel {
        #[serde(with = "chrono::serde::ts_seconds")]
        date: DateTime<Utc>,

        chat: Chat,
        message_id: MessageId,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        author_signature: Option<String>,
    },
}

/// This object describes the type of a [reaction][1].
///
/// [1]: https://core.telegram.org/bots/api#reactiontype
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReactionType {
    Emoji { emoji: String },
    CustomEmoji { custom_emoji_id: CustomEmojiId },
    Paid,
}

/// This object represents a phone [contact][1].
///
/// [1]: https://core.telegram.org/bots/api#contact
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Additional data about the contact in the form of a [vCard](https://en.wikipedia.org/wiki/VCard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
}

/// This object represents a point on the map.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,

    /// The radius of uncertainty for the location, measured in meters; 0-1500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
}

/// This object represents a [venue][1].
///
/// [1]: https://core.telegram.org/bots/api#venue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
}

/// This object represents an animated emoji that displays a random value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub emoji: String,
    pub value: u8,
}

/// This object contains information about a [poll][1].
///
/// [1]: https://core.telegram.org/bots/api#poll
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: u32,
    pub is_closed: bool,
    pub is_anonymous: bool,

    #[serde(rename = "type")]
    pub kind: PollKind,

    pub allows_multiple_answers: bool,

    /// 0-based identifier of the correct answer option.
    ///
    /// Available only for polls in the quiz mode, which are closed, or was sent (not forwarded) by the bot
    /// or to the private chat with the bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_period: Option<u32>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_date: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollKind {
    Regular,
    Quiz,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub voter_count: u32,
}

/// This object contains information about one answer option in a poll to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPollOption {
    /// Option text, 1-100 characters.
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_parse_mode: Option<ParseMode>,
}

impl From<&str> for InputPollOption {
    fn from(text: &str) -> Self {
        Self { text: text.to_owned(), text_parse_mode: None }
    }
}

/// This object represents an answer of a user in a non-anonymous poll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,

    /// The chat that changed the answer to the poll, if the voter is anonymous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter_chat: Option<Chat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// 0-based identifiers of chosen answer options. May be empty if the vote was retracted.
    pub option_ids: Vec<u32>,
}

/// Type of action to broadcast with `sendChatAction`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    ChooseSticker,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{objects::ChatType, prelude::*};

    #[test]
    fn decode_text_message_ok() -> Result {
        // language=json
        let message: Message = serde_json::from_str(
            r#"{
                "message_id": 7,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private", "first_name": "Alice"},
                "text": "/start hi",
                "entities": [{"type": "bot_command", "offset": 0, "length": 6}]
            }"#,
        )?;
        assert_eq!(message.id, MessageId(7));
        assert_eq!(message.chat.id, ChatId(42));
        assert_eq!(message.chat.kind, ChatType::Private);
        assert_eq!(message.date.timestamp(), 1_700_000_000);
        assert_eq!(message.entities[0].kind, MessageEntityKind::BotCommand);
        assert_eq!(message.edit_date, None);
        Ok(())
    }

    #[test]
    fn forward_origin_by_type_ok() -> Result {
        let origin: MessageOrigin = serde_json::from_value(json!({
            "type": "hidden_user",
            "date": 1_700_000_000,
            "sender_user_name": "Anonymous"
        }))?;
        assert!(matches!(origin, MessageOrigin::HiddenUser { ref sender_user_name, .. } if sender_user_name == "Anonymous"));
        Ok(())
    }

    #[test]
    fn reaction_type_round_trip_ok() -> Result {
        let reaction = ReactionType::Emoji { emoji: "👍".to_owned() };
        let value = serde_json::to_value(&reaction)?;
        assert_eq!(value, json!({"type": "emoji", "emoji": "👍"}));
        assert_eq!(serde_json::from_value::<ReactionType>(value)?, reaction);
        assert_eq!(serde_json::to_value(ReactionType::Paid)?, json!({"type": "paid"}));
        Ok(())
    }

    #[test]
    fn unknown_reaction_type_fails() {
        let error = serde_json::from_value::<ReactionType>(json!({"type": "sparkles"})).unwrap_err();
        assert!(error.to_string().contains("sparkles"), "{error}");
    }
}
