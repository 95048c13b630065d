use chrono::{DateTime, Utc};

use crate::{
    ids::{BusinessConnectionId, ChatId, MessageId, Recipient, UserId},
    objects::{ChatFullInfo, ChatInviteLink, ChatMember, ChatPermissions, InputFile},
};

methods! {
    CHATS;

    /// Ban a user in a group, a supergroup or a channel.
    ///
    /// In the case of supergroups and channels, the user will not be able to return to the chat on their own
    /// using invite links, unless unbanned first.
    BanChatMember = "banChatMember" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
        }
        optional {
            /// If user is banned for more than 366 days or less than 30 seconds from the current time
            /// they are considered to be banned forever.
            #[serde(with = "chrono::serde::ts_seconds_option")]
            until_date: DateTime<Utc>,

            /// Delete all messages from the chat for the user that is being removed.
            revoke_messages: bool,
        }
    };

    /// Unban a previously banned user in a supergroup or channel.
    ///
    /// By default, this method guarantees that after the call the user is not a member of the chat,
    /// but will be able to join it. So if the user is a member of the chat they will also be removed from the chat.
    UnbanChatMember = "unbanChatMember" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
        }
        optional {
            /// Do nothing if the user is not banned.
            only_if_banned: bool,
        }
    };

    RestrictChatMember = "restrictChatMember" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
            permissions: ChatPermissions,
        }
        optional {
            use_independent_chat_permissions: bool,

            #[serde(with = "chrono::serde::ts_seconds_option")]
            until_date: DateTime<Utc>,
        }
    };

    /// Promote or demote a user in a supergroup or a channel.
    ///
    /// Pass `false` for all boolean parameters to demote a user.
    PromoteChatMember = "promoteChatMember" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
        }
        optional {
            is_anonymous: bool,
            can_manage_chat: bool,
            can_delete_messages: bool,
            can_manage_video_chats: bool,
            can_restrict_members: bool,
            can_promote_members: bool,
            can_change_info: bool,
            can_invite_users: bool,
            can_post_stories: bool,
            can_edit_stories: bool,
            can_delete_stories: bool,
            can_post_messages: bool,
            can_edit_messages: bool,
            can_pin_messages: bool,
            can_manage_topics: bool,
        }
    };

    SetChatAdministratorCustomTitle = "setChatAdministratorCustomTitle" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,

            /// 0-16 characters, emoji are not allowed.
            #[builder(into)]
            custom_title: String,
        }
        optional {}
    };

    /// Ban a channel chat in a supergroup or a channel.
    BanChatSenderChat = "banChatSenderChat" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            sender_chat_id: ChatId,
        }
        optional {}
    };

    UnbanChatSenderChat = "unbanChatSenderChat" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            sender_chat_id: ChatId,
        }
        optional {}
    };

    /// Set default chat permissions for all members.
    SetChatPermissions = "setChatPermissions" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            permissions: ChatPermissions,
        }
        optional {
            use_independent_chat_permissions: bool,
        }
    };

    /// Generate a new primary invite link for a chat; any previously generated primary link is revoked.
    ExportChatInviteLink = "exportChatInviteLink" -> String {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    CreateChatInviteLink = "createChatInviteLink" -> ChatInviteLink {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {
            /// Invite link name; 0-32 characters.
            #[builder(into)]
            name: String,

            #[serde(with = "chrono::serde::ts_seconds_option")]
            expire_date: DateTime<Utc>,

            /// The maximum number of users that can be members of the chat simultaneously
            /// after joining the chat via this invite link; 1-99999.
            member_limit: u32,

            /// Users joining the chat via the link need to be approved by chat administrators.
            /// If `true`, `member_limit` can't be specified.
            creates_join_request: bool,
        }
    };

    /// Edit a non-primary invite link created by the bot.
    EditChatInviteLink = "editChatInviteLink" -> ChatInviteLink {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            invite_link: String,
        }
        optional {
            #[builder(into)]
            name: String,

            #[serde(with = "chrono::serde::ts_seconds_option")]
            expire_date: DateTime<Utc>,

            member_limit: u32,
            creates_join_request: bool,
        }
    };

    /// Revoke an invite link created by the bot.
    ///
    /// If the primary link is revoked, a new link is automatically generated.
    RevokeChatInviteLink = "revokeChatInviteLink" -> ChatInviteLink {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            invite_link: String,
        }
        optional {}
    };

    ApproveChatJoinRequest = "approveChatJoinRequest" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
        }
        optional {}
    };

    DeclineChatJoinRequest = "declineChatJoinRequest" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
        }
        optional {}
    };

    /// Set a new profile photo for the chat. Photos can't be changed for private chats.
    SetChatPhoto = "setChatPhoto" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// Must be an uploaded attachment.
            #[builder(into)]
            photo: InputFile,
        }
        optional {}
    };

    DeleteChatPhoto = "deleteChatPhoto" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    /// Change the title of a chat. Titles can't be changed for private chats.
    SetChatTitle = "setChatTitle" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// New chat title, 1-128 characters.
            #[builder(into)]
            title: String,
        }
        optional {}
    };

    SetChatDescription = "setChatDescription" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {
            /// New chat description, 0-255 characters.
            #[builder(into)]
            description: String,
        }
    };

    /// Add a message to the list of pinned messages in a chat.
    PinChatMessage = "pinChatMessage" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,
        }
        optional {
            business_connection_id: BusinessConnectionId,

            /// It is not necessary to send a notification to all chat members about the new pinned message.
            disable_notification: bool,
        }
    };

    UnpinChatMessage = "unpinChatMessage" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {
            business_connection_id: BusinessConnectionId,

            /// If not specified, the most recent pinned message (by sending date) will be unpinned.
            message_id: MessageId,
        }
    };

    UnpinAllChatMessages = "unpinAllChatMessages" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    /// Leave a group, supergroup or channel.
    LeaveChat = "leaveChat" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    /// Get up-to-date information about the chat.
    GetChat = "getChat" -> ChatFullInfo {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    /// Get a list of administrators in a chat, which aren't bots.
    GetChatAdministrators = "getChatAdministrators" -> Vec<ChatMember> {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    GetChatMemberCount = "getChatMemberCount" -> u32 {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };

    /// Get information about a member of a chat.
    ///
    /// The method is only guaranteed to work for other users if the bot is an administrator in the chat.
    GetChatMember = "getChatMember" -> ChatMember {
        required {
            #[builder(into)]
            chat_id: Recipient,

            user_id: UserId,
        }
        optional {}
    };

    /// Set a new group sticker set for a supergroup.
    SetChatStickerSet = "setChatStickerSet" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            sticker_set_name: String,
        }
        optional {}
    };

    DeleteChatStickerSet = "deleteChatStickerSet" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {}
    };
}
