use crate::{
    ids::{BusinessConnectionId, CustomEmojiId, FileId, MessageThreadId, Recipient},
    objects::{InputFile, Message, ReplyMarkup, ReplyParameters, Sticker, StickerSet},
};

methods! {
    STICKERS;

    /// Send static `.WEBP`, animated `.TGS`, or video `.WEBM` stickers.
    SendSticker = "sendSticker" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            sticker: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            /// Emoji associated with the sticker; only for just uploaded stickers.
            #[builder(into)]
            emoji: String,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    GetStickerSet = "getStickerSet" -> StickerSet {
        required {
            #[builder(into)]
            name: String,
        }
        optional {}
    };

    /// Get information about custom emoji stickers by their identifiers.
    GetCustomEmojiStickers = "getCustomEmojiStickers" -> Vec<Sticker> {
        required {
            /// At most 200 custom emoji identifiers can be specified.
            custom_emoji_ids: Vec<CustomEmojiId>,
        }
        optional {}
    };

    /// Move a sticker in a set created by the bot to a specific position.
    SetStickerPositionInSet = "setStickerPositionInSet" -> bool {
        required {
            #[builder(into)]
            sticker: FileId,

            /// New sticker position in the set, zero-based.
            position: u32,
        }
        optional {}
    };

    DeleteStickerFromSet = "deleteStickerFromSet" -> bool {
        required {
            #[builder(into)]
            sticker: FileId,
        }
        optional {}
    };

    /// Change the list of emoji assigned to a regular or custom emoji sticker.
    SetStickerEmojiList = "setStickerEmojiList" -> bool {
        required {
            #[builder(into)]
            sticker: FileId,

            /// 1-20 emoji associated with the sticker.
            emoji_list: Vec<String>,
        }
        optional {}
    };

    SetStickerSetTitle = "setStickerSetTitle" -> bool {
        required {
            #[builder(into)]
            name: String,

            /// Sticker set title, 1-64 characters.
            #[builder(into)]
            title: String,
        }
        optional {}
    };

    /// Delete a sticker set that was created by the bot.
    DeleteStickerSet = "deleteStickerSet" -> bool {
        required {
            #[builder(into)]
            name: String,
        }
        optional {}
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        ids::ChatId,
        methods::tests::assert_round_trip,
        objects::{InlineKeyboardButton, InlineKeyboardMarkup},
        prelude::*,
    };

    #[test]
    fn send_sticker_ok() -> Result {
        assert_round_trip(
            &SendSticker::builder().chat_id(ChatId(42)).sticker(FileId::from("CAACAgIAAxk")).build(),
            &json!({"chat_id": 42, "sticker": "CAACAgIAAxk"}),
        )?;
        assert_round_trip(
            &SendSticker::builder()
                .chat_id("@channel")
                .sticker("https://example.org/cat.webp")
                .emoji("🐱")
                .disable_notification(true)
                .reply_markup(InlineKeyboardMarkup::single_button(InlineKeyboardButton::url("More", "https://example.org")))
                .build(),
            &json!({
                "chat_id": "@channel",
                "sticker": "https://example.org/cat.webp",
                "emoji": "🐱",
                "disable_notification": true,
                "reply_markup": {"inline_keyboard": [[{"text": "More", "url": "https://example.org"}]]}
            }),
        )?;
        Ok(())
    }

    #[test]
    fn sticker_set_methods_ok() -> Result {
        assert_round_trip(
            &SetStickerEmojiList::builder()
                .sticker("CAACAgIAAxk")
                .emoji_list(vec!["🐱".to_owned(), "😺".to_owned()])
                .build(),
            &json!({"sticker": "CAACAgIAAxk", "emoji_list": ["🐱", "😺"]}),
        )?;
        assert_round_trip(
            &SetStickerPositionInSet::builder().sticker("CAACAgIAAxk").position(0).build(),
            &json!({"sticker": "CAACAgIAAxk", "position": 0}),
        )?;
        assert_round_trip(
            &GetCustomEmojiStickers::builder().custom_emoji_ids(vec![CustomEmojiId::from("5368324170671202286")]).build(),
            &json!({"custom_emoji_ids": ["5368324170671202286"]}),
        )?;
        assert_round_trip(
            &SetStickerSetTitle::builder().name("cats_by_test_bot").title("Cats").build(),
            &json!({"name": "cats_by_test_bot", "title": "Cats"}),
        )?;
        assert_round_trip(
            &GetStickerSet::builder().name("cats_by_test_bot").build(),
            &json!({"name": "cats_by_test_bot"}),
        )?;
        assert_round_trip(
            &DeleteStickerFromSet::builder().sticker("CAACAgIAAxk").build(),
            &json!({"sticker": "CAACAgIAAxk"}),
        )?;
        assert_round_trip(
            &DeleteStickerSet::builder().name("cats_by_test_bot").build(),
            &json!({"name": "cats_by_test_bot"}),
        )?;
        Ok(())
    }
}
