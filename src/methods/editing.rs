//! Updating messages.
//!
//! Editing methods answer with the edited [`Message`] when the target is addressed by `chat_id` and `message_id`,
//! and with `true` when it is an inline message addressed by `inline_message_id`.

use crate::{
    ids::{BusinessConnectionId, InlineMessageId, MessageId, Recipient},
    objects::{InlineKeyboardMarkup, InputMedia, LinkPreviewOptions, Message, MessageEntity, ParseMode, Poll},
};

dual_methods! {
    EDITING_DUAL;

    /// Edit text and game messages.
    ///
    /// See also: <https://core.telegram.org/bots/api#editmessagetext>.
    EditMessageText = "editMessageText" {
        required {
            /// New text of the message, 1-4096 characters after entities parsing.
            #[builder(into)]
            text: String,
        }
        optional {
            business_connection_id: BusinessConnectionId,

            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,

            parse_mode: ParseMode,
            entities: Vec<MessageEntity>,
            link_preview_options: LinkPreviewOptions,
            reply_markup: InlineKeyboardMarkup,
        }
    } => {
        EditChatMessageText -> Message,
        EditInlineMessageText -> bool,
    };

    /// Edit captions of messages.
    EditMessageCaption = "editMessageCaption" {
        required {}
        optional {
            business_connection_id: BusinessConnectionId,

            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,

            /// New caption of the message, 0-1024 characters after entities parsing.
            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            show_caption_above_media: bool,
            reply_markup: InlineKeyboardMarkup,
        }
    } => {
        EditChatMessageCaption -> Message,
        EditInlineMessageCaption -> bool,
    };

    /// Edit animation, audio, document, photo, or video messages.
    ///
    /// If a message is part of a message album, then it can be edited only to an audio for audio albums,
    /// only to a document for document albums and to a photo or a video otherwise.
    EditMessageMedia = "editMessageMedia" {
        required {
            #[builder(into)]
            media: InputMedia,
        }
        optional {
            business_connection_id: BusinessConnectionId,

            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,

            reply_markup: InlineKeyboardMarkup,
        }
    } => {
        EditChatMessageMedia -> Message,
        EditInlineMessageMedia -> bool,
    };

    /// Edit live location messages.
    ///
    /// A location can be edited until its `live_period` expires or editing is explicitly disabled
    /// by a call to `stopMessageLiveLocation`.
    EditMessageLiveLocation = "editMessageLiveLocation" {
        required {
            latitude: f64,
            longitude: f64,
        }
        optional {
            business_connection_id: BusinessConnectionId,

            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,

            /// New period in seconds during which the location can be updated, starting from the message send date.
            live_period: u32,

            horizontal_accuracy: f64,
            heading: u32,
            proximity_alert_radius: u32,
            reply_markup: InlineKeyboardMarkup,
        }
    } => {
        EditChatMessageLiveLocation -> Message,
        EditInlineMessageLiveLocation -> bool,
    };

    /// Stop updating a live location message before `live_period` expires.
    StopMessageLiveLocation = "stopMessageLiveLocation" {
        required {}
        optional {
            business_connection_id: BusinessConnectionId,

            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,

            reply_markup: InlineKeyboardMarkup,
        }
    } => {
        StopChatMessageLiveLocation -> Message,
        StopInlineMessageLiveLocation -> bool,
    };

    /// Edit only the reply markup of messages.
    EditMessageReplyMarkup = "editMessageReplyMarkup" {
        required {}
        optional {
            business_connection_id: BusinessConnectionId,

            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,

            /// Omit to remove the inline keyboard.
            reply_markup: InlineKeyboardMarkup,
        }
    } => {
        EditChatMessageReplyMarkup -> Message,
        EditInlineMessageReplyMarkup -> bool,
    };
}

methods! {
    EDITING;

    /// Stop a poll which was sent by the bot. On success, the stopped [`Poll`] is returned.
    StopPoll = "stopPoll" -> Poll {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            reply_markup: InlineKeyboardMarkup,
        }
    };

    /// Delete a message, including service messages.
    ///
    /// A message can only be deleted if it was sent less than 48 hours ago.
    DeleteMessage = "deleteMessage" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,
        }
        optional {}
    };

    /// Delete multiple messages simultaneously. If some of the specified messages can't be found, they are skipped.
    DeleteMessages = "deleteMessages" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// 1-100 identifiers of messages to delete.
            message_ids: Vec<MessageId>,
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
        methods::{Method, tests::assert_round_trip},
        objects::{InlineKeyboardButton, InputMediaPhoto},
        prelude::*,
    };

    #[test]
    fn dual_bindings_share_the_record_ok() -> Result {
        let request = EditMessageText::builder().inline_message_id("AgAAAA").text("edited").build();
        let by_chat = EditChatMessageText::from(request.clone());
        let inline = EditInlineMessageText::from(request);
        assert_eq!(serde_json::to_string(&by_chat)?, serde_json::to_string(&inline)?);
        assert_eq!(EditChatMessageText::NAME, EditInlineMessageText::NAME);
        Ok(())
    }

    #[test]
    fn edit_message_reply_markup_removal_ok() -> Result {
        let method = EditChatMessageReplyMarkup(
            EditMessageReplyMarkup::builder().chat_id(ChatId(42)).message_id(MessageId(7)).build(),
        );
        // language=json
        assert_eq!(serde_json::to_string(&method)?, r#"{"chat_id":42,"message_id":7}"#);
        Ok(())
    }

    #[test]
    fn dual_records_round_trip_ok() -> Result {
        assert_round_trip(
            &EditChatMessageText(
                EditMessageText::builder()
                    .chat_id("@channel")
                    .message_id(MessageId(7))
                    .text("<b>edited</b>")
                    .parse_mode(ParseMode::Html)
                    .build(),
            ),
            &json!({"chat_id": "@channel", "message_id": 7, "text": "<b>edited</b>", "parse_mode": "HTML"}),
        )?;
        assert_round_trip(
            &EditInlineMessageText(EditMessageText::builder().inline_message_id("AgAAAA").text("edited").build()),
            &json!({"inline_message_id": "AgAAAA", "text": "edited"}),
        )?;
        assert_round_trip(
            &EditInlineMessageCaption(EditMessageCaption::builder().inline_message_id("AgAAAA").caption("").build()),
            &json!({"inline_message_id": "AgAAAA", "caption": ""}),
        )?;
        assert_round_trip(
            &EditChatMessageMedia(
                EditMessageMedia::builder()
                    .chat_id(ChatId(42))
                    .message_id(MessageId(7))
                    .media(InputMediaPhoto::builder().media("attach://photo").caption("New").build())
                    .build(),
            ),
            &json!({
                "chat_id": 42,
                "message_id": 7,
                "media": {"type": "photo", "media": "attach://photo", "caption": "New"}
            }),
        )?;
        assert_round_trip(
            &EditChatMessageLiveLocation(
                EditMessageLiveLocation::builder()
                    .chat_id(ChatId(42))
                    .message_id(MessageId(7))
                    .latitude(52.5)
                    .longitude(4.25)
                    .heading(90)
                    .build(),
            ),
            &json!({"chat_id": 42, "message_id": 7, "latitude": 52.5, "longitude": 4.25, "heading": 90}),
        )?;
        assert_round_trip(
            &StopInlineMessageLiveLocation(StopMessageLiveLocation::builder().inline_message_id("AgAAAA").build()),
            &json!({"inline_message_id": "AgAAAA"}),
        )?;
        assert_round_trip(
            &EditInlineMessageReplyMarkup(
                EditMessageReplyMarkup::builder()
                    .inline_message_id("AgAAAA")
                    .reply_markup(InlineKeyboardMarkup::single_button(InlineKeyboardButton::callback("Undo", "undo")))
                    .build(),
            ),
            &json!({
                "inline_message_id": "AgAAAA",
                "reply_markup": {"inline_keyboard": [[{"text": "Undo", "callback_data": "undo"}]]}
            }),
        )?;
        Ok(())
    }

    #[test]
    fn deleting_round_trip_ok() -> Result {
        assert_round_trip(
            &StopPoll::builder().chat_id(ChatId(42)).message_id(MessageId(7)).build(),
            &json!({"chat_id": 42, "message_id": 7}),
        )?;
        assert_round_trip(
            &DeleteMessage::builder().chat_id("@channel").message_id(MessageId(7)).build(),
            &json!({"chat_id": "@channel", "message_id": 7}),
        )?;
        assert_round_trip(
            &DeleteMessages::builder().chat_id(ChatId(42)).message_ids(vec![MessageId(7), MessageId(8)]).build(),
            &json!({"chat_id": 42, "message_ids": [7, 8]}),
        )?;
        Ok(())
    }
}
