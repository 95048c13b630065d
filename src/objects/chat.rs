use serde::{Deserialize, Serialize};

use crate::{
    ids::{ChatId, CustomEmojiId, FileId, FileUniqueId, MessageThreadId},
    objects::{ChatPermissions, Location, Message, ReactionType, is_false},
};

/// This object represents a [chat][1].
///
/// [1]: https://core.telegram.org/bots/api#chat
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Chat {
    pub id: ChatId,

    #[serde(rename = "type")]
    pub kind: ChatType,

    /// Title, for supergroups, channels and group chats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// `true`, if the supergroup chat is a forum.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_forum: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Full information about a chat, as returned by `getChat`.
///
/// See also: <https://core.telegram.org/bots/api#chatfullinfo>.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ChatFullInfo {
    #[serde(flatten)]
    pub chat: Chat,

    /// Identifier of the accent color for the chat name and backgrounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reaction_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ChatPhoto>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_usernames: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_reactions: Vec<ReactionType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<String>,

    /// The most recent pinned message (by sending date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,

    /// Default chat member permissions, for groups and supergroups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<ChatPermissions>,

    /// The minimum allowed delay between consecutive messages sent by each unprivileged user, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slow_mode_delay: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_auto_delete_time: Option<u32>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub has_protected_content: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_set_name: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub can_set_sticker_set: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_sticker_set_name: Option<String>,

    /// Unique identifier for the linked chat, i.e. the discussion group identifier for a channel and vice versa.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_chat_id: Option<ChatId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ChatLocation>,
}

/// This object represents a [chat photo][1].
///
/// [1]: https://core.telegram.org/bots/api#chatphoto
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPhoto {
    pub small_file_id: FileId,
    pub small_file_unique_id: FileUniqueId,
    pub big_file_id: FileId,
    pub big_file_unique_id: FileUniqueId,
}

/// Represents a location to which a chat is connected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatLocation {
    pub location: Location,
    pub address: String,
}

/// This object represents a [forum topic][1].
///
/// [1]: https://core.telegram.org/bots/api#forumtopic
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ForumTopic {
    pub message_thread_id: MessageThreadId,
    pub name: String,

    /// Color of the topic icon in RGB format.
    pub icon_color: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_custom_emoji_id: Option<CustomEmojiId>,
}
