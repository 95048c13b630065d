//! Bot API [available types][1].
//!
//! [1]: https://core.telegram.org/bots/api#available-types

mod chat;
mod game;
mod inline;
mod markup;
mod media;
mod member;
mod message;
mod settings;
mod sticker;
mod update;
mod user;

pub use self::{
    chat::{Chat, ChatFullInfo, ChatLocation, ChatPhoto, ChatType, ForumTopic},
    game::GameHighScore,
    inline::{
        CallbackQuery,
        ChosenInlineResult,
        InlineQuery,
        InlineQueryResult,
        InlineQueryResultArticle,
        InlineQueryResultAudio,
        InlineQueryResultCachedAudio,
        InlineQueryResultCachedDocument,
        InlineQueryResultCachedGif,
        InlineQueryResultCachedMpeg4Gif,
        InlineQueryResultCachedPhoto,
        InlineQueryResultCachedSticker,
        InlineQueryResultCachedVideo,
        InlineQueryResultCachedVoice,
        InlineQueryResultContact,
        InlineQueryResultDocument,
        InlineQueryResultGame,
        InlineQueryResultGif,
        InlineQueryResultLocation,
        InlineQueryResultMpeg4Gif,
        InlineQueryResultPhoto,
        InlineQueryResultVenue,
        InlineQueryResultVideo,
        InlineQueryResultVoice,
        InlineQueryResultsButton,
        InputContactMessageContent,
        InputLocationMessageContent,
        InputMessageContent,
        InputTextMessageContent,
        InputVenueMessageContent,
        SentWebAppMessage,
    },
    markup::{
        ForceReply,
        InlineKeyboardButton,
        InlineKeyboardButtonAction,
        InlineKeyboardMarkup,
        KeyboardButton,
        LinkPreviewOptions,
        ParseMode,
        ReplyKeyboardMarkup,
        ReplyKeyboardRemove,
        ReplyMarkup,
        ReplyParameters,
    },
    media::{
        Animation,
        Audio,
        Document,
        File,
        InputFile,
        InputMedia,
        InputMediaAnimation,
        InputMediaAudio,
        InputMediaDocument,
        InputMediaPhoto,
        InputMediaVideo,
        PhotoSize,
        UserProfilePhotos,
        Video,
        VideoNote,
        Voice,
    },
    member::{
        ChatAdministratorRights,
        ChatInviteLink,
        ChatJoinRequest,
        ChatMember,
        ChatMemberAdministrator,
        ChatMemberBanned,
        ChatMemberLeft,
        ChatMemberMember,
        ChatMemberOwner,
        ChatMemberRestricted,
        ChatMemberUpdated,
        ChatPermissions,
    },
    message::{
        ChatAction,
        Contact,
        Dice,
        InputPollOption,
        Location,
        Message,
        MessageEntity,
        MessageEntityKind,
        MessageOrigin,
        Poll,
        PollAnswer,
        PollKind,
        PollOption,
        ReactionType,
        SentMessageId,
        Venue,
    },
    settings::{
        BotCommand,
        BotCommandScope,
        BotDescription,
        BotName,
        BotShortDescription,
        MenuButton,
        WebAppInfo,
    },
    sticker::{Sticker, StickerKind, StickerSet},
    update::{AllowedUpdate, Update, UpdateKind, WebhookInfo},
    user::User,
};

/// Serde helper for `skip_serializing_if` on flags that default to `false`.
#[expect(clippy::trivially_copy_pass_by_ref)]
pub(crate) const fn is_false(value: &bool) -> bool {
    !*value
}
