use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::{Map, Value};

use crate::{
    ids::UpdateId,
    objects::{
        CallbackQuery,
        ChatJoinRequest,
        ChatMemberUpdated,
        ChosenInlineResult,
        InlineQuery,
        Message,
        Poll,
        PollAnswer,
    },
};

/// This object represents an incoming [update][1].
///
/// At most one of the optional payloads can be present in any given update.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Update {
    /// The update's unique identifier.
    ///
    /// Update identifiers start from a certain positive number and increase sequentially.
    pub id: UpdateId,

    pub kind: UpdateKind,
}

#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum UpdateKind {
    Message(Box<Message>),
    EditedMessage(Box<Message>),
    ChannelPost(Box<Message>),
    EditedChannelPost(Box<Message>),
    CallbackQuery(Box<CallbackQuery>),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    Poll(Poll),
    PollAnswer(PollAnswer),

    /// The bot's chat member status was updated in a chat.
    MyChatMember(ChatMemberUpdated),

    /// A chat member's status was updated in a chat.
    ChatMember(ChatMemberUpdated),

    ChatJoinRequest(ChatJoinRequest),

    /// Payload kind which this crate does not model, kept verbatim.
    Other { kind: String, payload: Value },
}

impl UpdateKind {
    /// Wire key under which the payload is carried.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Message(_) => "message",
            Self::EditedMessage(_) => "edited_message",
            Self::ChannelPost(_) => "channel_post",
            Self::EditedChannelPost(_) => "edited_channel_post",
            Self::CallbackQuery(_) => "callback_query",
            Self::InlineQuery(_) => "inline_query",
            Self::ChosenInlineResult(_) => "chosen_inline_result",
            Self::Poll(_) => "poll",
            Self::PollAnswer(_) => "poll_answer",
            Self::MyChatMember(_) => "my_chat_member",
            Self::ChatMember(_) => "chat_member",
            Self::ChatJoinRequest(_) => "chat_join_request",
            Self::Other { kind, .. } => kind,
        }
    }

    fn to_payload(&self) -> serde_json::Result<Value> {
        match self {
            Self::Message(message)
            | Self::EditedMessage(message)
            | Self::ChannelPost(message)
            | Self::EditedChannelPost(message) => serde_json::to_value(message),
            Self::CallbackQuery(query) => serde_json::to_value(query),
            Self::InlineQuery(query) => serde_json::to_value(query),
            Self::ChosenInlineResult(result) => serde_json::to_value(result),
            Self::Poll(poll) => serde_json::to_value(poll),
            Self::PollAnswer(answer) => serde_json::to_value(answer),
            Self::MyChatMember(updated) | Self::ChatMember(updated) => serde_json::to_value(updated),
            Self::ChatJoinRequest(request) => serde_json::to_value(request),
            Self::Other { payload, .. } => Ok(payload.clone()),
        }
    }

    fn from_payload(kind: String, payload: Value) -> serde_json::Result<Self> {
        Ok(match kind.as_str() {
            "message" => Self::Message(serde_json::from_value(payload)?),
            "edited_message" => Self::EditedMessage(serde_json::from_value(payload)?),
            "channel_post" => Self::ChannelPost(serde_json::from_value(payload)?),
            "edited_channel_post" => Self::EditedChannelPost(serde_json::from_value(payload)?),
            "callback_query" => Self::CallbackQuery(serde_json::from_value(payload)?),
            "inline_query" => Self::InlineQuery(serde_json::from_value(payload)?),
            "chosen_inline_result" => Self::ChosenInlineResult(serde_json::from_value(payload)?),
            "poll" => Self::Poll(serde_json::from_value(payload)?),
            "poll_answer" => Self::PollAnswer(serde_json::from_value(payload)?),
            "my_chat_member" => Self::MyChatMember(serde_json::from_value(payload)?),
            "chat_member" => Self::ChatMember(serde_json::from_value(payload)?),
            "chat_join_request" => Self::ChatJoinRequest(serde_json::from_value(payload)?),
            _ => Self::Other { kind, payload },
        })
    }
}

impl Serialize for Update {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = self.kind.to_payload().map_err(ser::Error::custom)?;
        let mut object = Map::new();
        object.insert("update_id".to_owned(), Value::from(self.id.0));
        object.insert(self.kind.key().to_owned(), payload);
        object.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Update {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::deserialize(deserializer)?;
        let id = object.remove("update_id").ok_or_else(|| de::Error::missing_field("update_id"))?;
        let id = UpdateId::deserialize(id).map_err(de::Error::custom)?;
        let mut payloads = object.into_iter();
        let (Some((kind, payload)), None) = (payloads.next(), payloads.next()) else {
            return Err(de::Error::custom(format_args!("update #{id} must carry exactly one payload")));
        };
        let kind = UpdateKind::from_payload(kind, payload)
            .map_err(|error| de::Error::custom(format_args!("invalid payload in update #{id}: {error}")))?;
        Ok(Self { id, kind })
    }
}

/// [Update][1] types that the client wants to listen to.
///
/// [1]: https://core.telegram.org/bots/api#update
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AllowedUpdate {
    Message,
    EditedMessage,
    ChannelPost,
    EditedChannelPost,
    CallbackQuery,
    InlineQuery,
    ChosenInlineResult,
    Poll,
    PollAnswer,
    MyChatMember,
    ChatMember,
    ChatJoinRequest,
}

/// Describes the current status of a [webhook][1].
///
/// [1]: https://core.telegram.org/bots/api#webhookinfo
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WebhookInfo {
    /// Webhook URL, may be empty if webhook is not set up.
    pub url: String,

    pub has_custom_certificate: bool,
    pub pending_update_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_error_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_synchronization_error_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    /// Kept as strings so that newly introduced update types still decode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn message_update_ok() -> Result {
        let update: Update = serde_json::from_value(json!({
            "update_id": 100,
            "message": {
                "message_id": 7,
                "date": 1_700_000_000,
                "chat": {"id": 42, "type": "private"},
                "text": "hi"
            }
        }))?;
        assert_eq!(update.id, UpdateId(100));
        let UpdateKind::Message(message) = &update.kind else {
            bail!("expected a message, got {update:?}");
        };
        assert_eq!(message.text.as_deref(), Some("hi"));
        assert_eq!(update.kind.key(), "message");
        Ok(())
    }

    #[test]
    fn unknown_update_kept_ok() -> Result {
        let raw = json!({"update_id": 101, "business_message": {"message_id": 1}});
        let update: Update = serde_json::from_value(raw.clone())?;
        let UpdateKind::Other { kind, payload } = &update.kind else {
            bail!("expected an unmodelled update, got {update:?}");
        };
        assert_eq!(kind, "business_message");
        assert_eq!(payload, &json!({"message_id": 1}));
        assert_eq!(serde_json::to_value(&update)?, raw);
        Ok(())
    }

    #[test]
    fn update_without_payload_fails() {
        let error = serde_json::from_value::<Update>(json!({"update_id": 1})).unwrap_err();
        assert!(error.to_string().contains("exactly one payload"), "{error}");
    }

    #[test]
    fn update_without_id_fails() {
        let error = serde_json::from_value::<Update>(json!({"poll": {}})).unwrap_err();
        assert!(error.to_string().contains("missing field `update_id`"), "{error}");
    }

    #[test]
    fn allowed_update_ok() -> Result {
        assert_eq!(
            serde_json::to_string(&[AllowedUpdate::Message, AllowedUpdate::MyChatMember])?,
            r#"["message","my_chat_member"]"#,
        );
        Ok(())
    }

    #[test]
    fn webhook_info_ok() -> Result {
        let info: WebhookInfo = serde_json::from_value(json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 3
        }))?;
        assert_eq!(info.pending_update_count, 3);
        assert!(info.allowed_updates.is_empty());
        Ok(())
    }
}
