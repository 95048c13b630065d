use serde::{Deserialize, Serialize};

use crate::{
    ids::{CustomEmojiId, FileId, FileUniqueId},
    objects::{File, PhotoSize, is_false},
};

/// This object represents a [sticker][1].
///
/// [1]: https://core.telegram.org/bots/api#sticker
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Sticker {
    pub file_id: FileId,
    pub file_unique_id: FileUniqueId,

    #[serde(rename = "type")]
    pub kind: StickerKind,

    pub width: u32,
    pub height: u32,
    pub is_animated: bool,
    pub is_video: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,

    /// Emoji associated with the sticker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,

    /// For premium regular stickers, premium animation for the sticker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_animation: Option<File>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<CustomEmojiId>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub needs_repainting: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerKind {
    Regular,
    Mask,
    CustomEmoji,
}

/// This object represents a [sticker set][1].
///
/// [1]: https://core.telegram.org/bots/api#stickerset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct StickerSet {
    pub name: String,
    pub title: String,

    #[serde(rename = "sticker_type")]
    pub kind: StickerKind,

    pub stickers: Vec<Sticker>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<PhotoSize>,
}
