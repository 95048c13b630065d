use crate::{
    ids::{BusinessConnectionId, FileId, MessageId, MessageThreadId, Recipient, UserId},
    objects::{
        ChatAction,
        File,
        InputFile,
        InputMedia,
        InputPollOption,
        LinkPreviewOptions,
        Message,
        MessageEntity,
        ParseMode,
        PollKind,
        ReactionType,
        ReplyMarkup,
        ReplyParameters,
        SentMessageId,
        UserProfilePhotos,
    },
};

methods! {
    MESSAGES;

    /// [Send a message][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#sendmessage
    SendMessage = "sendMessage" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// Text of the message to be sent, 1-4096 characters after entities parsing.
            #[builder(into)]
            text: String,
        }
        optional {
            business_connection_id: BusinessConnectionId,

            /// Target message thread (topic) of the forum; for forum supergroups only.
            message_thread_id: MessageThreadId,

            parse_mode: ParseMode,

            /// Special entities that appear in message text, which can be specified instead of `parse_mode`.
            entities: Vec<MessageEntity>,

            link_preview_options: LinkPreviewOptions,

            /// Sends the message silently. Users will receive a notification with no sound.
            disable_notification: bool,

            /// Protects the contents of the sent message from forwarding and saving.
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Forward a message of any kind. Service messages and messages with protected content can't be forwarded.
    ForwardMessage = "forwardMessage" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            from_chat_id: Recipient,

            message_id: MessageId,
        }
        optional {
            message_thread_id: MessageThreadId,
            disable_notification: bool,
            protect_content: bool,
        }
    };

    /// Forward multiple messages of any kind.
    ///
    /// Album grouping is kept for forwarded messages.
    /// Returns identifiers of the sent messages, skipping those which could not be forwarded.
    ForwardMessages = "forwardMessages" -> Vec<SentMessageId> {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            from_chat_id: Recipient,

            /// 1-100 identifiers of messages in the chat `from_chat_id` to forward,
            /// in strictly increasing order.
            message_ids: Vec<MessageId>,
        }
        optional {
            message_thread_id: MessageThreadId,
            disable_notification: bool,
            protect_content: bool,
        }
    };

    /// Copy a message without a link to the original message.
    CopyMessage = "copyMessage" -> SentMessageId {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            from_chat_id: Recipient,

            message_id: MessageId,
        }
        optional {
            message_thread_id: MessageThreadId,

            /// New caption for media. If not specified, the original caption is kept.
            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            show_caption_above_media: bool,
            disable_notification: bool,
            protect_content: bool,
            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    CopyMessages = "copyMessages" -> Vec<SentMessageId> {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            from_chat_id: Recipient,

            message_ids: Vec<MessageId>,
        }
        optional {
            message_thread_id: MessageThreadId,
            disable_notification: bool,
            protect_content: bool,

            /// Copy the messages without their captions.
            remove_caption: bool,
        }
    };

    SendPhoto = "sendPhoto" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// Photo to send. The photo must be at most 10 MB in size.
            #[builder(into)]
            photo: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            show_caption_above_media: bool,

            /// Cover the photo with a spoiler animation.
            has_spoiler: bool,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send an audio file to be displayed in the music player. Audio must be in the `.MP3` or `.M4A` format.
    SendAudio = "sendAudio" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            audio: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,

            /// Duration of the audio in seconds.
            duration: u32,

            #[builder(into)]
            performer: String,

            #[builder(into)]
            title: String,

            #[builder(into)]
            thumbnail: InputFile,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    SendDocument = "sendDocument" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            document: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            #[builder(into)]
            thumbnail: InputFile,

            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,

            /// Disables automatic server-side content type detection for files uploaded using multipart/form-data.
            disable_content_type_detection: bool,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send a video file. Telegram clients support MPEG4 videos, other formats may be sent as documents.
    SendVideo = "sendVideo" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            video: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
            duration: u32,
            width: u32,
            height: u32,

            #[builder(into)]
            thumbnail: InputFile,

            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            show_caption_above_media: bool,
            has_spoiler: bool,

            /// The uploaded video is suitable for streaming.
            supports_streaming: bool,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send an animation file (GIF or H.264/MPEG-4 AVC video without sound).
    SendAnimation = "sendAnimation" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            animation: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
            duration: u32,
            width: u32,
            height: u32,

            #[builder(into)]
            thumbnail: InputFile,

            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            show_caption_above_media: bool,
            has_spoiler: bool,
            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send an audio file to be displayed as a playable voice message.
    ///
    /// The audio must be in an `.OGG` file encoded with OPUS, or in `.MP3` or `.M4A` format.
    SendVoice = "sendVoice" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            voice: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            #[builder(into)]
            caption: String,

            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            duration: u32,
            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send a rounded square MPEG4 video of up to 1 minute long.
    SendVideoNote = "sendVideoNote" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            video_note: InputFile,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
            duration: u32,

            /// Video width and height, i.e. diameter of the video message.
            length: u32,

            #[builder(into)]
            thumbnail: InputFile,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send a group of photos, videos, documents or audios as an album.
    ///
    /// Documents and audio files can be only grouped in an album with messages of the same type.
    SendMediaGroup = "sendMediaGroup" -> Vec<Message> {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// 2-10 items.
            media: Vec<InputMedia>,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,
        }
    };

    SendLocation = "sendLocation" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            latitude: f64,
            longitude: f64,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            /// The radius of uncertainty for the location, measured in meters; 0-1500.
            horizontal_accuracy: f64,

            /// Period in seconds during which the location will be updated.
            live_period: u32,

            /// For live locations, a direction in which the user is moving, in degrees. Must be between 1 and 360.
            heading: u32,

            proximity_alert_radius: u32,
            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    SendVenue = "sendVenue" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            latitude: f64,
            longitude: f64,

            #[builder(into)]
            title: String,

            #[builder(into)]
            address: String,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            #[builder(into)]
            foursquare_id: String,

            #[builder(into)]
            foursquare_type: String,

            #[builder(into)]
            google_place_id: String,

            #[builder(into)]
            google_place_type: String,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    SendContact = "sendContact" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            #[builder(into)]
            phone_number: String,

            #[builder(into)]
            first_name: String,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            #[builder(into)]
            last_name: String,

            /// Additional data about the contact in the form of a vCard, 0-2048 bytes.
            #[builder(into)]
            vcard: String,

            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send a native poll.
    SendPoll = "sendPoll" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,

            /// Poll question, 1-300 characters.
            #[builder(into)]
            question: String,

            /// 2-10 answer options.
            options: Vec<InputPollOption>,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
            question_parse_mode: ParseMode,
            is_anonymous: bool,

            /// Defaults to [`PollKind::Regular`].
            kind as "type": PollKind,

            allows_multiple_answers: bool,

            /// 0-based identifier of the correct answer option, required for polls in quiz mode.
            correct_option_id: u32,

            #[builder(into)]
            explanation: String,

            explanation_parse_mode: ParseMode,

            /// Amount of time in seconds the poll will be active after creation, 5-600.
            open_period: u32,

            is_closed: bool,
            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            #[builder(into)]
            reply_markup: ReplyMarkup,
        }
    };

    /// Send an animated emoji that will display a random value.
    SendDice = "sendDice" -> Message {
        required {
            #[builder(into)]
            chat_id: Recipient,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,

            /// Emoji on which the dice throw animation is based. Defaults to «🎲».
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

    /// Tell the user that something is happening on the bot's side.
    ///
    /// The status is set for 5 seconds or less (when a message arrives from your bot, clients clear its typing status).
    SendChatAction = "sendChatAction" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            action: ChatAction,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
        }
    };

    /// Change the chosen reactions on a message.
    SetMessageReaction = "setMessageReaction" -> bool {
        required {
            #[builder(into)]
            chat_id: Recipient,

            message_id: MessageId,
        }
        optional {
            /// New list of reaction types to set on the message. Omit to remove the reactions.
            reaction: Vec<ReactionType>,

            /// Set the reaction with a big animation.
            is_big: bool,
        }
    };

    GetUserProfilePhotos = "getUserProfilePhotos" -> UserProfilePhotos {
        required {
            user_id: UserId,
        }
        optional {
            offset: u32,

            /// Limits the number of photos to be retrieved. Values between 1-100 are accepted. Defaults to 100.
            limit: u32,
        }
    };

    /// Get basic information about a file and prepare it for downloading.
    ///
    /// For the moment, bots can download files of up to 20MB in size.
    GetFile = "getFile" -> File {
        required {
            #[builder(into)]
            file_id: FileId,
        }
        optional {}
    };
}
