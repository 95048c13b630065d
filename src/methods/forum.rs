use crate::{
    ids::{CustomEmojiId, MessageThreadId, Recipient},
    objects::{ForumTopic, Sticker},
};

methods! {
    FORUM;

    /// Get custom emoji stickers, which can be used as a forum topic icon by any user.
    GetForumTopicIconStickers = "getForumTopicIconStickers" -> Vec<Sticker>;

    /// Create a topic in a forum supergroup chat.
    CreateForumTopic = "createForumTopic" -> ForumTopic {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// Topic name, 1-128 characters.
            #[builder(into)]
            name: String,
        }
        optional {
            /// Color of the topic icon in RGB format.
            icon_color: u32,

            #[builder(into)]
            icon_custom_emoji_id: CustomEmojiId,
        }
    };

    EditForumTopic = "editForumTopic" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_thread_id: MessageThreadId,
        }
        optional {
            /// If not specified or empty, the current name of the topic will be kept.
            #[builder(into)]
            name: String,

            /// Pass an empty string to remove the icon.
            #[builder(into)]
            icon_custom_emoji_id: CustomEmojiId,
        }
    };

    CloseForumTopic = "closeForumTopic" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_thread_id: MessageThreadId,
        }
        optional {}
    };

    ReopenForumTopic = "reopenForumTopic" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_thread_id: MessageThreadId,
        }
        optional {}
    };

    /// Delete a forum topic along with all its messages.
    DeleteForumTopic = "deleteForumTopic" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_thread_id: MessageThreadId,
        }
        optional {}
    };

    UnpinAllForumTopicMessages = "unpinAllForumTopicMessages" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_thread_id: MessageThreadId,
        }
        optional {}
    };
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{ids::ChatId, methods::tests::assert_round_trip, prelude::*};

    #[test]
    fn create_forum_topic_ok() -> Result {
        assert_round_trip(
            &CreateForumTopic::builder().chat_id(ChatId(-100_123)).name("Announcements").build(),
            &json!({"chat_id": -100_123, "name": "Announcements"}),
        )?;
        assert_round_trip(
            &CreateForumTopic::builder()
                .chat_id("@forum")
                .name("Support")
                .icon_color(0x6F_B9F0)
                .icon_custom_emoji_id("5368324170671202286")
                .build(),
            &json!({
                "chat_id": "@forum",
                "name": "Support",
                "icon_color": 0x6F_B9F0,
                "icon_custom_emoji_id": "5368324170671202286"
            }),
        )?;
        Ok(())
    }

    #[test]
    fn topic_methods_ok() -> Result {
        let thread = MessageThreadId(5);
        assert_round_trip(
            &EditForumTopic::builder().chat_id(ChatId(-1)).message_thread_id(thread).icon_custom_emoji_id("").build(),
            &json!({"chat_id": -1, "message_thread_id": 5, "icon_custom_emoji_id": ""}),
        )?;
        assert_round_trip(
            &CloseForumTopic::builder().chat_id(ChatId(-1)).message_thread_id(thread).build(),
            &json!({"chat_id": -1, "message_thread_id": 5}),
        )?;
        assert_round_trip(
            &ReopenForumTopic::builder().chat_id(ChatId(-1)).message_thread_id(thread).build(),
            &json!({"chat_id": -1, "message_thread_id": 5}),
        )?;
        assert_round_trip(
            &DeleteForumTopic::builder().chat_id("@forum").message_thread_id(thread).build(),
            &json!({"chat_id": "@forum", "message_thread_id": 5}),
        )?;
        assert_round_trip(
            &UnpinAllForumTopicMessages::builder().chat_id(ChatId(-1)).message_thread_id(thread).build(),
            &json!({"chat_id": -1, "message_thread_id": 5}),
        )?;
        assert_round_trip(&GetForumTopicIconStickers, &Value::Null)?;
        Ok(())
    }
}
