use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    ids::UserId,
    objects::{Chat, User, is_false},
};

/// Information about one [member of a chat][1], selected by its `status`.
///
/// [1]: https://core.telegram.org/bots/api#chatmember
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
#[must_use]
pub enum ChatMember {
    #[serde(rename = "creator")]
    Owner(ChatMemberOwner),

    #[serde(rename = "administrator")]
    Administrator(ChatMemberAdministrator),

    #[serde(rename = "member")]
    Member(ChatMemberMember),

    #[serde(rename = "restricted")]
    Restricted(ChatMemberRestricted),

    #[serde(rename = "left")]
    Left(ChatMemberLeft),

    #[serde(rename = "kicked")]
    Banned(ChatMemberBanned),
}

impl ChatMember {
    pub const fn user(&self) -> &User {
        match self {
            Self::Owner(member) => &member.user,
            Self::Administrator(member) => &member.user,
            Self::Member(member) => &member.user,
            Self::Restricted(member) => &member.user,
            Self::Left(member) => &member.user,
            Self::Banned(member) => &member.user,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberOwner {
    pub user: User,
    pub is_anonymous: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberAdministrator {
    pub user: User,

    /// `true`, if the bot is allowed to edit administrator privileges of that user.
    pub can_be_edited: bool,

    #[serde(flatten)]
    pub rights: ChatAdministratorRights,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberMember {
    pub user: User,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub until_date: Option<DateTime<Utc>>,
}

/// A chat member that is under certain restrictions in the chat. Supergroups only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberRestricted {
    pub user: User,

    /// `true`, if the user is a member of the chat at the moment of the request.
    pub is_member: bool,

    #[serde(flatten)]
    pub permissions: ChatPermissions,

    /// Date when restrictions will be lifted for this user; 0 means forever.
    pub until_date: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberLeft {
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberBanned {
    pub user: User,

    /// Date when restrictions will be lifted for this user; 0 means forever.
    pub until_date: i64,
}

/// Rights of an administrator in a chat.
///
/// See also: <https://core.telegram.org/bots/api#chatadministratorrights>.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatAdministratorRights {
    pub is_anonymous: bool,
    pub can_manage_chat: bool,
    pub can_delete_messages: bool,
    pub can_manage_video_chats: bool,
    pub can_restrict_members: bool,
    pub can_promote_members: bool,
    pub can_change_info: bool,
    pub can_invite_users: bool,
    pub can_post_stories: bool,
    pub can_edit_stories: bool,
    pub can_delete_stories: bool,

    /// Channels only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,

    /// Channels only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,

    /// Groups and supergroups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,

    /// Supergroups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
}

/// Actions that a non-administrator user is allowed to take in a chat.
///
/// Absent permissions keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct ChatPermissions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_messages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_audios: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_documents: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_photos: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_videos: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_video_notes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_voice_notes: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_polls: Option<bool>,

    /// Animations, games, stickers and inline bots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_other_messages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_add_web_page_previews: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_topics: Option<bool>,
}

/// Represents an [invite link][1] for a chat.
///
/// [1]: https://core.telegram.org/bots/api#chatinvitelink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatInviteLink {
    /// The invite link. If the link was created by another chat administrator, then the second part of the link
    /// will be replaced with «…».
    pub invite_link: String,

    pub creator: User,
    pub creates_join_request: bool,
    pub is_primary: bool,
    pub is_revoked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expire_date: Option<DateTime<Utc>>,

    /// The maximum number of users that can be members of the chat simultaneously; 1-99999.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_join_request_count: Option<u32>,
}

/// Represents changes in the status of a chat member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,

    /// Performer of the action, which resulted in the change.
    pub from: User,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub via_chat_folder_invite_link: bool,
}

/// Represents a join request sent to a chat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatJoinRequest {
    pub chat: Chat,
    pub from: User,

    /// Identifier of a private chat with the user who sent the join request.
    pub user_chat_id: UserId,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_link: Option<ChatInviteLink>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn chat_member_by_status_ok() -> Result {
        let member: ChatMember = serde_json::from_value(json!({
            "status": "kicked",
            "user": {"id": 42, "is_bot": false, "first_name": "Alice"},
            "until_date": 0
        }))?;
        let ChatMember::Banned(banned) = &member else {
            bail!("expected a banned member, got {member:?}");
        };
        assert_eq!(banned.until_date, 0);
        assert_eq!(member.user().id, UserId(42));
        Ok(())
    }

    #[test]
    fn administrator_flattens_rights_ok() -> Result {
        let member: ChatMember = serde_json::from_value(json!({
            "status": "administrator",
            "user": {"id": 42, "is_bot": true, "first_name": "Bot"},
            "can_be_edited": false,
            "is_anonymous": false,
            "can_manage_chat": true,
            "can_delete_messages": true,
            "can_manage_video_chats": false,
            "can_restrict_members": true,
            "can_promote_members": false,
            "can_change_info": false,
            "can_invite_users": true,
            "can_post_stories": false,
            "can_edit_stories": false,
            "can_delete_stories": false,
            "can_pin_messages": true
        }))?;
        let ChatMember::Administrator(administrator) = member else {
            bail!("expected an administrator");
        };
        assert!(administrator.rights.can_restrict_members);
        assert_eq!(administrator.rights.can_pin_messages, Some(true));
        assert_eq!(administrator.rights.can_post_messages, None);
        Ok(())
    }

    #[test]
    fn unknown_member_status_fails() {
        let error = serde_json::from_value::<ChatMember>(json!({
            "status": "ghost",
            "user": {"id": 42, "is_bot": false, "first_name": "Alice"}
        }))
        .unwrap_err();
        assert!(error.to_string().contains("unknown variant `ghost`"), "{error}");
    }

    #[test]
    fn permissions_omit_absent_ok() -> Result {
        let permissions = ChatPermissions::builder().can_send_messages(true).can_send_polls(false).build();
        assert_eq!(
            serde_json::to_string(&permissions)?,
            // language=json
            r#"{"can_send_messages":true,"can_send_polls":false}"#,
        );
        Ok(())
    }
}
