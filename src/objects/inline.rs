use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::{Map, Value};

use crate::{
    ids::{CallbackQueryId, FileId, InlineMessageId, InlineQueryId},
    objects::{
        InlineKeyboardMarkup,
        LinkPreviewOptions,
        Location,
        Message,
        MessageEntity,
        ParseMode,
        User,
        WebAppInfo,
        is_false,
    },
};

/// An incoming [callback query][1] from a callback button in an inline keyboard.
///
/// [1]: https://core.telegram.org/bots/api#callbackquery
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct CallbackQuery {
    pub id: CallbackQueryId,
    pub from: User,

    /// Message sent by the bot with the callback button that originated the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<InlineMessageId>,

    /// Global identifier, uniquely corresponding to the chat to which the message with the callback button was sent.
    pub chat_instance: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// An incoming [inline query][1].
///
/// [1]: https://core.telegram.org/bots/api#inlinequery
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct InlineQuery {
    pub id: InlineQueryId,
    pub from: User,

    /// Text of the query (up to 256 characters).
    pub query: String,

    /// Offset of the results to be returned, can be controlled by the bot.
    pub offset: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// A [result][1] of an inline query that was chosen by the user and sent to their chat partner.
///
/// [1]: https://core.telegram.org/bots/api#choseninlineresult
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<InlineMessageId>,

    pub query: String,
}

/// A button to be shown above inline query results.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct InlineQueryResultsButton {
    #[builder(into)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,

    /// [Deep-linking][1] parameter for the `/start` message sent to the bot when a user presses the button.
    ///
    /// [1]: https://core.telegram.org/bots/features#deep-linking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub start_parameter: Option<String>,
}

/// Describes an inline message sent by a [Web App][1] on behalf of a user.
///
/// [1]: https://core.telegram.org/bots/webapps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct SentWebAppMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<InlineMessageId>,
}

/// One [result of an inline query][1].
///
/// The `type` tag alone does not identify the variant: media results exist both as URL-based
/// and as cached ones sharing the tag. The cached variant is selected when `<media>_file_id` is present.
///
/// [1]: https://core.telegram.org/bots/api#inlinequeryresult
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Video(InlineQueryResultVideo),
    Audio(InlineQueryResultAudio),
    Voice(InlineQueryResultVoice),
    Document(InlineQueryResultDocument),
    Location(InlineQueryResultLocation),
    Venue(InlineQueryResultVenue),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
    CachedPhoto(InlineQueryResultCachedPhoto),
    CachedGif(InlineQueryResultCachedGif),
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif),
    CachedSticker(InlineQueryResultCachedSticker),
    CachedDocument(InlineQueryResultCachedDocument),
    CachedVideo(InlineQueryResultCachedVideo),
    CachedVoice(InlineQueryResultCachedVoice),
    CachedAudio(InlineQueryResultCachedAudio),
}

impl InlineQueryResult {
    const TAGS: &'static [&'static str] = &[
        "article",
        "photo",
        "gif",
        "mpeg4_gif",
        "video",
        "audio",
        "voice",
        "document",
        "location",
        "venue",
        "contact",
        "game",
        "sticker",
    ];

    /// Wire `type` tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Article(_) => "article",
            Self::Photo(_) | Self::CachedPhoto(_) => "photo",
            Self::Gif(_) | Self::CachedGif(_) => "gif",
            Self::Mpeg4Gif(_) | Self::CachedMpeg4Gif(_) => "mpeg4_gif",
            Self::Video(_) | Self::CachedVideo(_) => "video",
            Self::Audio(_) | Self::CachedAudio(_) => "audio",
            Self::Voice(_) | Self::CachedVoice(_) => "voice",
            Self::Document(_) | Self::CachedDocument(_) => "document",
            Self::Location(_) => "location",
            Self::Venue(_) => "venue",
            Self::Contact(_) => "contact",
            Self::Game(_) => "game",
            Self::CachedSticker(_) => "sticker",
        }
    }

    /// Key whose presence marks the cached flavour of a media result.
    fn file_id_key(tag: &str) -> Option<&'static str> {
        match tag {
            "photo" => Some("photo_file_id"),
            "gif" => Some("gif_file_id"),
            "mpeg4_gif" => Some("mpeg4_file_id"),
            "video" => Some("video_file_id"),
            "audio" => Some("audio_file_id"),
            "voice" => Some("voice_file_id"),
            "document" => Some("document_file_id"),
            "sticker" => Some("sticker_file_id"),
            _ => None,
        }
    }

    fn to_untagged_value(&self) -> serde_json::Result<Value> {
        match self {
            Self::Article(inner) => serde_json::to_value(inner),
            Self::Photo(inner) => serde_json::to_value(inner),
            Self::Gif(inner) => serde_json::to_value(inner),
            Self::Mpeg4Gif(inner) => serde_json::to_value(inner),
            Self::Video(inner) => serde_json::to_value(inner),
            Self::Audio(inner) => serde_json::to_value(inner),
            Self::Voice(inner) => serde_json::to_value(inner),
            Self::Document(inner) => serde_json::to_value(inner),
            Self::Location(inner) => serde_json::to_value(inner),
            Self::Venue(inner) => serde_json::to_value(inner),
            Self::Contact(inner) => serde_json::to_value(inner),
            Self::Game(inner) => serde_json::to_value(inner),
            Self::CachedPhoto(inner) => serde_json::to_value(inner),
            Self::CachedGif(inner) => serde_json::to_value(inner),
            Self::CachedMpeg4Gif(inner) => serde_json::to_value(inner),
            Self::CachedSticker(inner) => serde_json::to_value(inner),
            Self::CachedDocument(inner) => serde_json::to_value(inner),
            Self::CachedVideo(inner) => serde_json::to_value(inner),
            Self::CachedVoice(inner) => serde_json::to_value(inner),
            Self::CachedAudio(inner) => serde_json::to_value(inner),
        }
    }

    fn from_object<E: de::Error>(mut object: Map<String, Value>) -> Result<Self, E> {
        let tag = match object.remove("type") {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return Err(E::custom(format_args!("inline query result `type` must be a string, got {other}")));
            }
            None => return Err(E::missing_field("type")),
        };
        let is_cached = Self::file_id_key(&tag).is_some_and(|key| object.contains_key(key));
        let value = Value::Object(object);
        let result = match (tag.as_str(), is_cached) {
            ("article", _) => serde_json::from_value(value).map(Self::Article),
            ("photo", false) => serde_json::from_value(value).map(Self::Photo),
            ("photo", true) => serde_json::from_value(value).map(Self::CachedPhoto),
            ("gif", false) => serde_json::from_value(value).map(Self::Gif),
            ("gif", true) => serde_json::from_value(value).map(Self::CachedGif),
            ("mpeg4_gif", false) => serde_json::from_value(value).map(Self::Mpeg4Gif),
            ("mpeg4_gif", true) => serde_json::from_value(value).map(Self::CachedMpeg4Gif),
            ("video", false) => serde_json::from_value(value).map(Self::Video),
            ("video", true) => serde_json::from_value(value).map(Self::CachedVideo),
            ("audio", false) => serde_json::from_value(value).map(Self::Audio),
            ("audio", true) => serde_json::from_value(value).map(Self::CachedAudio),
            ("voice", false) => serde_json::from_value(value).map(Self::Voice),
            ("voice", true) => serde_json::from_value(value).map(Self::CachedVoice),
            ("document", false) => serde_json::from_value(value).map(Self::Document),
            ("document", true) => serde_json::from_value(value).map(Self::CachedDocument),
            ("location", _) => serde_json::from_value(value).map(Self::Location),
            ("venue", _) => serde_json::from_value(value).map(Self::Venue),
            ("contact", _) => serde_json::from_value(value).map(Self::Contact),
            ("game", _) => serde_json::from_value(value).map(Self::Game),
            // Stickers can only be sent from the cache.
            ("sticker", _) => serde_json::from_value(value).map(Self::CachedSticker),
            (other, _) => return Err(E::unknown_variant(other, Self::TAGS)),
        };
        result.map_err(|error| E::custom(format_args!("invalid `{tag}` inline query result: {error}")))
    }
}

impl Serialize for InlineQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut value = self.to_untagged_value().map_err(ser::Error::custom)?;
        if let Value::Object(object) = &mut value {
            object.insert("type".to_owned(), Value::from(self.tag()));
        }
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_object(Map::deserialize(deserializer)?)
    }
}

/// Link to an article or web page.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultArticle {
    /// Unique identifier for this result, 1-64 bytes.
    pub id: String,

    pub title: String,

    /// Content of the message to be sent.
    #[builder(into)]
    pub input_message_content: InputMessageContent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Link to a photo. By default, this photo will be sent by the user with optional caption.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultPhoto {
    pub id: String,

    /// A valid URL of the photo. Photo must be in JPEG format. Photo size must not exceed 5MB.
    pub photo_url: String,

    pub thumbnail_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub caption_entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub show_caption_above_media: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Link to an animated GIF file.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    pub thumbnail_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Link to a video animation (H.264/MPEG-4 AVC video without sound).
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    pub thumbnail_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mpeg4_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Link to a page containing an embedded video player or a video file.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,

    /// `text/html` or `video/mp4`.
    pub mime_type: String,

    pub thumbnail_url: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    /// Required if the result is used to send an HTML page as a result (e.g., a YouTube video).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Link to an MP3 audio file.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Link to a voice recording in an `.OGG` container encoded with OPUS.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Link to a file. Currently, only `.PDF` and `.ZIP` files can be sent using this method.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    pub document_url: String,

    /// `application/pdf` or `application/zip`.
    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Location on a map.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,

    /// Period in seconds during which the location can be updated, should be between 60 and 86400,
    /// or `0x7FFFFFFF` for live locations that can be edited indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Venue.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
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

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Contact with a phone number.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// [Game](https://core.telegram.org/bots/api#games).
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Link to a photo stored on the Telegram servers.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedPhoto {
    pub id: String,

    #[builder(into)]
    pub photo_file_id: FileId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedGif {
    pub id: String,

    #[builder(into)]
    pub gif_file_id: FileId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedMpeg4Gif {
    pub id: String,

    #[builder(into)]
    pub mpeg4_file_id: FileId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedSticker {
    pub id: String,

    #[builder(into)]
    pub sticker_file_id: FileId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedDocument {
    pub id: String,
    pub title: String,

    #[builder(into)]
    pub document_file_id: FileId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedVideo {
    pub id: String,

    #[builder(into)]
    pub video_file_id: FileId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedVoice {
    pub id: String,

    #[builder(into)]
    pub voice_file_id: FileId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct InlineQueryResultCachedAudio {
    pub id: String,

    #[builder(into)]
    pub audio_file_id: FileId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

/// Content of a [message to be sent][1] as a result of an inline query.
///
/// There is no tag on the wire. The kind is selected by its distinctive key:
/// `message_text`, `phone_number`, `address`, or `latitude` without `address`.
///
/// [1]: https://core.telegram.org/bots/api#inputmessagecontent
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Contact(InputContactMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
}

impl InputMessageContent {
    fn from_object<E: de::Error>(object: Map<String, Value>) -> Result<Self, E> {
        let has = |key: &str| object.contains_key(key);
        let candidates = [
            ("message_text", has("message_text")),
            ("phone_number", has("phone_number")),
            ("address", has("address")),
            ("latitude", has("latitude") && !has("address")),
        ];
        let present: Vec<&str> =
            candidates.into_iter().filter_map(|(key, is_present)| is_present.then_some(key)).collect();
        let value = Value::Object(object);
        let content = match present.as_slice() {
            ["message_text"] => serde_json::from_value(value).map(Self::Text),
            ["phone_number"] => serde_json::from_value(value).map(Self::Contact),
            ["address"] => serde_json::from_value(value).map(Self::Venue),
            ["latitude"] => serde_json::from_value(value).map(Self::Location),
            [] => return Err(E::custom(format_args!("unrecognized input message content: {value}"))),
            _ => {
                return Err(E::custom(format_args!(
                    "ambiguous input message content with keys {present:?}: {value}",
                )));
            }
        };
        content.map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for InputMessageContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_object(Map::deserialize(deserializer)?)
    }
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(content: InputTextMessageContent) -> Self {
        Self::Text(content)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    /// Text of the message to be sent, 1-4096 characters.
    #[builder(into)]
    pub message_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_preview_options: Option<LinkPreviewOptions>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
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

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    fn text_content(text: &str) -> InputMessageContent {
        InputTextMessageContent::builder().message_text(text).build().into()
    }

    #[test]
    fn article_ok() -> Result {
        let result = InlineQueryResult::Article(
            InlineQueryResultArticle::builder()
                .id("1")
                .title("Hello")
                .input_message_content(text_content("Hello, world"))
                .build(),
        );
        let value = serde_json::to_value(&result)?;
        assert_eq!(
            value,
            // language=json
            json!({
                "type": "article",
                "id": "1",
                "title": "Hello",
                "input_message_content": {"message_text": "Hello, world"}
            }),
        );
        assert_eq!(serde_json::from_value::<InlineQueryResult>(value)?, result);
        Ok(())
    }

    #[test]
    fn cached_photo_shares_tag_ok() -> Result {
        let cached = InlineQueryResult::CachedPhoto(
            InlineQueryResultCachedPhoto::builder().id("1").photo_file_id("AgAD").build(),
        );
        let linked = InlineQueryResult::Photo(
            InlineQueryResultPhoto::builder()
                .id("2")
                .photo_url("https://example.org/cat.jpg")
                .thumbnail_url("https://example.org/cat_thumb.jpg")
                .build(),
        );
        for result in [cached, linked] {
            let value = serde_json::to_value(&result)?;
            assert_eq!(value["type"], "photo");
            assert_eq!(serde_json::from_value::<InlineQueryResult>(value)?, result);
        }
        Ok(())
    }

    #[test]
    fn cached_mpeg4_gif_ok() -> Result {
        let result: InlineQueryResult =
            serde_json::from_value(json!({"type": "mpeg4_gif", "id": "1", "mpeg4_file_id": "CgAD"}))?;
        assert!(matches!(result, InlineQueryResult::CachedMpeg4Gif(_)));
        Ok(())
    }

    #[test]
    fn sticker_is_always_cached_ok() -> Result {
        let result: InlineQueryResult =
            serde_json::from_value(json!({"type": "sticker", "id": "1", "sticker_file_id": "CAAD"}))?;
        assert_eq!(result.tag(), "sticker");
        assert!(matches!(result, InlineQueryResult::CachedSticker(_)));
        Ok(())
    }

    #[test]
    fn unknown_result_type_fails() {
        let error = serde_json::from_value::<InlineQueryResult>(json!({"type": "hologram", "id": "1"})).unwrap_err();
        assert!(error.to_string().contains("unknown variant `hologram`"), "{error}");
    }

    #[test]
    fn missing_result_type_fails() {
        let error = serde_json::from_value::<InlineQueryResult>(json!({"id": "1"})).unwrap_err();
        assert!(error.to_string().contains("missing field `type`"), "{error}");
    }

    #[test]
    fn input_message_content_by_key_ok() -> Result {
        let venue: InputMessageContent = serde_json::from_value(json!({
            "latitude": 52.37,
            "longitude": 4.89,
            "title": "Dam Square",
            "address": "Dam, Amsterdam"
        }))?;
        assert!(matches!(venue, InputMessageContent::Venue(_)));

        let location: InputMessageContent = serde_json::from_value(json!({"latitude": 52.37, "longitude": 4.89}))?;
        assert!(matches!(location, InputMessageContent::Location(_)));

        let contact: InputMessageContent =
            serde_json::from_value(json!({"phone_number": "+31000000000", "first_name": "Alice"}))?;
        assert!(matches!(contact, InputMessageContent::Contact(_)));
        Ok(())
    }

    #[test]
    fn ambiguous_input_message_content_fails() {
        let error = serde_json::from_value::<InputMessageContent>(json!({
            "message_text": "hi",
            "phone_number": "+31000000000",
            "first_name": "Alice"
        }))
        .unwrap_err();
        assert!(error.to_string().contains("ambiguous"), "{error}");
    }
}
