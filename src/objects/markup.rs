use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

use crate::{
    ids::{MessageId, Recipient},
    objects::{MessageEntity, WebAppInfo, is_false},
};

/// [Formatting option][1] for message text and captions.
///
/// [1]: https://core.telegram.org/bots/api#formatting-options
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[must_use]
pub enum ParseMode {
    /// [HTML style][1].
    ///
    /// [1]: https://core.telegram.org/bots/api#html-style
    #[serde(rename = "HTML")]
    Html,

    #[serde(rename = "MarkdownV2")]
    MarkdownV2,

    /// Legacy mode, retained for backward compatibility.
    #[serde(rename = "Markdown")]
    Markdown,
}

/// Describes the [options][1] used for link preview generation.
///
/// [1]: https://core.telegram.org/bots/api#linkpreviewoptions
#[derive(Clone, Debug, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct LinkPreviewOptions {
    /// `true`, if the link preview is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    /// URL to use for the link preview.
    ///
    /// If empty, then the first URL found in the message text will be used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_small_media: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_large_media: Option<bool>,

    /// `true`, if the link preview must be shown above the message text;
    /// otherwise, the link preview will be shown below the message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_above_text: Option<bool>,
}

impl LinkPreviewOptions {
    pub const DISABLED: Self = Self {
        is_disabled: Some(true),
        url: None,
        prefer_small_media: None,
        prefer_large_media: None,
        show_above_text: None,
    };
}

/// Describes [reply parameters][1] for the message that is being sent.
///
/// [1]: https://core.telegram.org/bots/api#replyparameters
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[must_use]
pub struct ReplyParameters {
    /// Identifier of the message that will be replied to in the current chat, or in the chat `chat_id` if it is specified.
    #[builder(into)]
    pub message_id: MessageId,

    /// If the message to be replied to is from a different chat, the chat ID or the channel username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub chat_id: Option<Recipient>,

    /// Pass `true` if the message should be sent even if the specified message to be replied to is not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,

    /// Quoted part of the message to be replied to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub quote: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_parse_mode: Option<ParseMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_entities: Option<Vec<MessageEntity>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_position: Option<u32>,
}

/// Additional interface options: an inline keyboard, a custom reply keyboard,
/// instructions to remove a reply keyboard or to force a reply from the user.
///
/// On the wire the kinds are told apart by which of their distinct keys is present:
/// `inline_keyboard`, `keyboard`, `remove_keyboard`, or `force_reply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl ReplyMarkup {
    const DISCRIMINANTS: [&'static str; 4] = ["inline_keyboard", "keyboard", "remove_keyboard", "force_reply"];

    fn from_object<E: de::Error>(object: Map<String, Value>) -> Result<Self, E> {
        let present: Vec<&str> =
            Self::DISCRIMINANTS.into_iter().filter(|key| object.contains_key(*key)).collect();
        let value = Value::Object(object);
        let markup = match present.as_slice() {
            ["inline_keyboard"] => serde_json::from_value(value).map(Self::InlineKeyboard),
            ["keyboard"] => serde_json::from_value(value).map(Self::Keyboard),
            ["remove_keyboard"] => serde_json::from_value(value).map(Self::Remove),
            ["force_reply"] => serde_json::from_value(value).map(Self::ForceReply),
            [] => {
                return Err(E::custom(format_args!(
                    "reply markup has none of the keys {:?}: {value}",
                    Self::DISCRIMINANTS,
                )));
            }
            _ => {
                return Err(E::custom(format_args!(
                    "ambiguous reply markup with keys {present:?}: {value}",
                )));
            }
        };
        markup.map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ReplyMarkup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::from_object(Map::deserialize(deserializer)?)
    }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(markup: ReplyKeyboardRemove) -> Self {
        Self::Remove(markup)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(markup: ForceReply) -> Self {
        Self::ForceReply(markup)
    }
}

/// This object represents an [inline keyboard][1] that appears right next to the message it belongs to.
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardmarkup
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn single_button(button: InlineKeyboardButton) -> Self {
        Self { inline_keyboard: vec![vec![button]] }
    }
}

impl From<Vec<InlineKeyboardButton>> for InlineKeyboardMarkup {
    /// Converts a single row into a single-row inline keyboard.
    fn from(row: Vec<InlineKeyboardButton>) -> Self {
        Self { inline_keyboard: vec![row] }
    }
}

/// This object represents [one button of an inline keyboard][1].
///
/// [1]: https://core.telegram.org/bots/api#inlinekeyboardbutton
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Label text on the button.
    pub text: String,

    #[serde(flatten)]
    pub action: InlineKeyboardButtonAction,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), action: InlineKeyboardButtonAction::Url(url.into()) }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { text: text.into(), action: InlineKeyboardButtonAction::CallbackData(data.into()) }
    }
}

/// Exactly one action per button.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineKeyboardButtonAction {
    /// HTTP or `tg://` URL to be opened when the button is pressed.
    ///
    /// Links `tg://user?id=<user_id>` can be used to mention a user by their identifier
    /// without using a username, if this is allowed by their privacy settings.
    Url(String),

    /// Data to be sent in a callback query to the bot when the button is pressed, 1-64 bytes.
    CallbackData(String),

    /// Description of the [Web App][1] that will be launched when the user presses the button.
    ///
    /// [1]: https://core.telegram.org/bots/webapps
    WebApp(WebAppInfo),

    /// Prompts the user to select one of their chats and insert the bot's username and the query in the input field.
    SwitchInlineQuery(String),

    /// Inserts the bot's username and the query in the current chat's input field.
    SwitchInlineQueryCurrentChat(String),

    /// Send a Pay button. Must be the first button in the first row.
    Pay(bool),
}

/// A [custom keyboard][1] with reply options.
///
/// [1]: https://core.telegram.org/bots/features#keyboards
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,

    /// Requests clients to always show the keyboard when the regular keyboard is hidden.
    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub is_persistent: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub resize_keyboard: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub one_time_keyboard: bool,

    /// The placeholder to be shown in the input field when the keyboard is active; 1-64 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub input_field_placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    #[builder(default)]
    pub selective: bool,
}

/// One button of the reply keyboard.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub request_contact: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub request_location: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        Self { text: text.to_owned(), request_contact: false, request_location: false, web_app: None }
    }
}

/// Removes the current custom keyboard and displays the default letter-keyboard.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true`.
    pub remove_keyboard: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub selective: bool,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self { remove_keyboard: true, selective: false }
    }
}

/// Displays a reply interface to the user, as if the user has selected the bot's message and tapped «Reply».
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true`.
    pub force_reply: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub selective: bool,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self { force_reply: true, input_field_placeholder: None, selective: false }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn inline_keyboard_ok() -> Result {
        let markup = ReplyMarkup::from(InlineKeyboardMarkup::single_button(InlineKeyboardButton::url(
            "Test",
            "https://example.org",
        )));
        assert_eq!(
            serde_json::to_string(&markup)?,
            // language=json
            r#"{"inline_keyboard":[[{"text":"Test","url":"https://example.org"}]]}"#,
        );
        Ok(())
    }

    #[test]
    fn reply_markup_by_key_ok() -> Result {
        let markups = [
            ReplyMarkup::from(InlineKeyboardMarkup::from(vec![InlineKeyboardButton::callback("Yes", "yes")])),
            ReplyMarkup::from(
                ReplyKeyboardMarkup::builder()
                    .keyboard(vec![vec![KeyboardButton::from("Hello")]])
                    .resize_keyboard(true)
                    .build(),
            ),
            ReplyMarkup::from(ReplyKeyboardRemove::default()),
            ReplyMarkup::from(ForceReply::default()),
        ];
        for markup in markups {
            let value = serde_json::to_value(&markup)?;
            assert_eq!(serde_json::from_value::<ReplyMarkup>(value)?, markup);
        }
        Ok(())
    }

    #[test]
    fn reply_markup_without_discriminant_fails() {
        let error = serde_json::from_value::<ReplyMarkup>(json!({"selective": true})).unwrap_err();
        assert!(error.to_string().contains("none of the keys"), "{error}");
    }

    #[test]
    fn ambiguous_reply_markup_fails() {
        let error = serde_json::from_value::<ReplyMarkup>(json!({
            "remove_keyboard": true,
            "force_reply": true
        }))
        .unwrap_err();
        assert!(error.to_string().contains(r#"["remove_keyboard", "force_reply"]"#), "{error}");
    }

    #[test]
    fn inline_keyboard_button_action_ok() -> Result {
        let button: InlineKeyboardButton =
            serde_json::from_value(json!({"text": "Open", "web_app": {"url": "https://example.org/app"}}))?;
        assert_eq!(
            button.action,
            InlineKeyboardButtonAction::WebApp(WebAppInfo { url: "https://example.org/app".to_owned() }),
        );
        Ok(())
    }

    #[test]
    fn reply_parameters_chat_reference_ok() -> Result {
        let by_username: ReplyParameters = serde_json::from_value(json!({"message_id": 1, "chat_id": "@channel"}))?;
        assert_eq!(by_username.chat_id, Some(Recipient::Username("@channel".to_owned())));

        let by_id = ReplyParameters::builder().message_id(MessageId(1)).chat_id(-100_i64).build();
        // language=json
        assert_eq!(serde_json::to_string(&by_id)?, r#"{"message_id":1,"chat_id":-100}"#);

        let same_chat = ReplyParameters::builder().message_id(MessageId(1)).build();
        // language=json
        assert_eq!(serde_json::to_string(&same_chat)?, r#"{"message_id":1}"#);
        Ok(())
    }

    #[test]
    fn link_preview_disabled_ok() -> Result {
        assert_eq!(serde_json::to_string(&LinkPreviewOptions::DISABLED)?, r#"{"is_disabled":true}"#);
        Ok(())
    }
}
