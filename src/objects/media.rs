use std::fmt::{self, Display, Formatter};

use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ids::{FileId, FileUniqueId},
    objects::{MessageEntity, ParseMode, is_false},
};

/// This object represents one size of a photo or a file / sticker thumbnail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,
    pub width: u32,
    pub height: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// This object represents an audio file to be treated as music by the Telegram clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,

    /// Duration of the audio in seconds as defined by the sender.
    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
}

/// This object represents a general file (as opposed to photos, voice messages and audio files).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,
    pub width: u32,
    pub height: u32,
    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// Animation file (GIF or H.264/MPEG-4 AVC video without sound).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,
    pub width: u32,
    pub height: u32,
    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,
    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// A [video message][1].
///
/// [1]: https://telegram.org/blog/video-messages-and-telescope
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoNote {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,

    /// Video width and height (diameter of the video message) as defined by the sender.
    pub length: u32,

    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

/// A file ready to be downloaded, as returned by `getFile`.
///
/// The file can be downloaded via `https://api.telegram.org/file/bot<token>/<file_path>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct File {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// A user's profile pictures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct UserProfilePhotos {
    pub total_count: u32,

    /// Requested profile pictures (in up to 4 sizes each).
    pub photos: Vec<Vec<PhotoSize>>,
}

/// File to send: a file already stored on the Telegram servers, a URL for Telegram to fetch,
/// or a multipart attachment uploaded alongside the request.
///
/// On the wire all three are strings and are told apart by their shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum InputFile {
    FileId(FileId),

    /// HTTP URL for Telegram to get the file from the Internet.
    Url(String),

    /// Name of a multipart form field, sent as `attach://<name>`.
    Attachment(String),
}

impl InputFile {
    const ATTACHMENT_PREFIX: &'static str = "attach://";

    fn parse(text: String) -> Self {
        if let Some(name) = text.strip_prefix(Self::ATTACHMENT_PREFIX) {
            Self::Attachment(name.to_owned())
        } else if text.starts_with("https://") || text.starts_with("http://") {
            Self::Url(text)
        } else {
            Self::FileId(FileId(text))
        }
    }
}

impl From<String> for InputFile {
    fn from(text: String) -> Self {
        Self::parse(text)
    }
}

impl From<&str> for InputFile {
    fn from(text: &str) -> Self {
        Self::parse(text.to_owned())
    }
}

impl From<FileId> for InputFile {
    fn from(file_id: FileId) -> Self {
        Self::FileId(file_id)
    }
}

impl Display for InputFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileId(file_id) => Display::fmt(file_id, f),
            Self::Url(url) => f.write_str(url),
            Self::Attachment(name) => write!(f, "{}{name}", Self::ATTACHMENT_PREFIX),
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InputFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::parse)
    }
}

/// Content of a [media message][1] to be sent.
///
/// [1]: https://core.telegram.org/bots/api#inputmedia
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(media: InputMediaPhoto) -> Self {
        Self::Photo(media)
    }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(media: InputMediaVideo) -> Self {
        Self::Video(media)
    }
}

impl From<InputMediaAnimation> for InputMedia {
    fn from(media: InputMediaAnimation) -> Self {
        Self::Animation(media)
    }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(media: InputMediaAudio) -> Self {
        Self::Audio(media)
    }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(media: InputMediaDocument) -> Self {
        Self::Document(media)
    }
}

/// Represents a [photo][1] to be sent.
///
/// [1]: https://core.telegram.org/bots/api#inputmediaphoto
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct InputMediaPhoto {
    #[builder(into)]
    pub media: InputFile,

    /// Caption of the photo to be sent, 0-1024 characters after entities parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub caption_entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub show_caption_above_media: bool,

    /// Pass `true` if the photo needs to be covered with a spoiler animation.
    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub has_spoiler: bool,
}

/// Represents a video to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct InputMediaVideo {
    #[builder(into)]
    pub media: InputFile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
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
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub supports_streaming: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub has_spoiler: bool,
}

/// Represents an animation file (GIF or H.264/MPEG-4 AVC video without sound) to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct InputMediaAnimation {
    #[builder(into)]
    pub media: InputFile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
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
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub has_spoiler: bool,
}

/// Represents an audio file to be treated as music to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct InputMediaAudio {
    #[builder(into)]
    pub media: InputFile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub caption_entities: Vec<MessageEntity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub performer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub title: Option<String>,
}

/// Represents a general file to be sent.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct InputMediaDocument {
    #[builder(into)]
    pub media: InputFile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub caption_entities: Vec<MessageEntity>,

    /// Disables automatic server-side content type detection for files uploaded using multipart/form-data.
    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub disable_content_type_detection: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn input_file_by_shape_ok() -> Result {
        assert_eq!(
            serde_json::from_value::<InputFile>(json!("attach://photo"))?,
            InputFile::Attachment("photo".to_owned()),
        );
        assert_eq!(
            serde_json::from_value::<InputFile>(json!("https://example.org/cat.jpg"))?,
            InputFile::Url("https://example.org/cat.jpg".to_owned()),
        );
        assert_eq!(
            serde_json::from_value::<InputFile>(json!("AgACAgIAAxkBAAI"))?,
            InputFile::FileId(FileId::from("AgACAgIAAxkBAAI")),
        );
        assert_eq!(serde_json::to_value(InputFile::Attachment("photo".to_owned()))?, json!("attach://photo"));
        Ok(())
    }

    #[test]
    fn input_media_photo_ok() -> Result {
        let media = InputMedia::from(
            InputMediaPhoto::builder()
                .media(InputFile::Url("https://example.org/cat.jpg".to_owned()))
                .caption("Cat")
                .parse_mode(ParseMode::Html)
                .build(),
        );
        let value = serde_json::to_value(&media)?;
        assert_eq!(
            value,
            // language=json
            json!({"type": "photo", "media": "https://example.org/cat.jpg", "caption": "Cat", "parse_mode": "HTML"}),
        );
        assert_eq!(serde_json::from_value::<InputMedia>(value)?, media);
        Ok(())
    }

    #[test]
    fn input_media_document_ok() -> Result {
        let media: InputMedia = serde_json::from_value(json!({
            "type": "document",
            "media": "attach://report",
            "disable_content_type_detection": true
        }))?;
        let InputMedia::Document(document) = media else {
            bail!("expected a document, got {media:?}");
        };
        assert_eq!(document.media, InputFile::Attachment("report".to_owned()));
        assert!(document.disable_content_type_detection);
        Ok(())
    }

    #[test]
    fn unknown_input_media_type_fails() {
        let error = serde_json::from_value::<InputMedia>(json!({"type": "hologram", "media": "x"})).unwrap_err();
        assert!(error.to_string().contains("unknown variant `hologram`"), "{error}");
    }
}
