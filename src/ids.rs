//! Domain-typed identifiers.
//!
//! Every identifier is its own type, so a [`UserId`] cannot be passed where a [`ChatId`] is expected
//! even though both wrap an `i64`.

use std::fmt::{self, Display, Formatter};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de::{self, Unexpected, Visitor},
};

macro_rules! integer_id {
    ($($(#[$meta:meta])* $name:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    )*};
}

macro_rules! string_id {
    ($($(#[$meta:meta])* $name:ident;)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

integer_id! {
    /// Unique identifier of a chat. May exceed 32 bits.
    ChatId;

    /// Unique identifier of a user or bot.
    UserId;

    /// Unique message identifier inside a chat.
    MessageId;

    /// Unique identifier of a forum topic or message thread.
    MessageThreadId;

    /// Sequential identifier of an incoming update.
    UpdateId;
}

string_id! {
    /// Identifier of a file, which can be used to download or reuse the file.
    FileId;

    /// Identifier of a file which is supposed to be the same over time and for different bots.
    FileUniqueId;

    CallbackQueryId;

    InlineQueryId;

    /// Identifier of a message sent via the bot in inline mode.
    InlineMessageId;

    CustomEmojiId;

    BusinessConnectionId;
}

/// Target chat: either a numeric identifier, or a username of a channel or supergroup (`@channelusername`).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[must_use]
pub enum Recipient {
    Id(ChatId),
    Username(String),
}

impl From<ChatId> for Recipient {
    fn from(chat_id: ChatId) -> Self {
        Self::Id(chat_id)
    }
}

impl From<i64> for Recipient {
    fn from(chat_id: i64) -> Self {
        Self::Id(ChatId(chat_id))
    }
}

impl From<String> for Recipient {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl From<&str> for Recipient {
    fn from(username: &str) -> Self {
        Self::Username(username.to_owned())
    }
}

impl Display for Recipient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(chat_id) => Display::fmt(chat_id, f),
            Self::Username(username) => f.write_str(username),
        }
    }
}

impl Serialize for Recipient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(chat_id) => serializer.serialize_i64(chat_id.0),
            Self::Username(username) => serializer.serialize_str(username),
        }
    }
}

/// Selects the variant by the kind of the source value: numbers are identifiers, strings are usernames.
impl<'de> Deserialize<'de> for Recipient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecipientVisitor)
    }
}

struct RecipientVisitor;

impl Visitor<'_> for RecipientVisitor {
    type Value = Recipient;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("an integer chat ID or a username string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Recipient::Id(ChatId(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value)
            .map(|value| Recipient::Id(ChatId(value)))
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Recipient::Username(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Recipient::Username(value))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn numeric_recipient_ok() -> Result {
        let recipient = Recipient::from(123_456_i64);
        assert_eq!(serde_json::to_string(&recipient)?, "123456");
        assert_eq!(serde_json::from_str::<Recipient>("123456")?, Recipient::Id(ChatId(123_456)));
        Ok(())
    }

    #[test]
    fn negative_recipient_ok() -> Result {
        let recipient: Recipient = serde_json::from_str("-1001234567890")?;
        assert_eq!(recipient, Recipient::Id(ChatId(-1_001_234_567_890)));
        Ok(())
    }

    #[test]
    fn username_recipient_ok() -> Result {
        let recipient = Recipient::from("@channelname");
        assert_eq!(serde_json::to_string(&recipient)?, r#""@channelname""#);
        assert_eq!(serde_json::from_str::<Recipient>(r#""@channelname""#)?, recipient);
        Ok(())
    }

    #[test]
    fn numeric_looking_string_stays_username_ok() -> Result {
        let recipient: Recipient = serde_json::from_value(json!("123456"))?;
        assert_eq!(recipient, Recipient::Username("123456".to_owned()));
        Ok(())
    }

    #[test]
    fn recipient_of_other_kind_fails() {
        let error = serde_json::from_value::<Recipient>(json!(true)).unwrap_err();
        assert!(error.to_string().contains("an integer chat ID or a username string"), "{error}");
    }

    #[test]
    fn identifiers_are_transparent_ok() -> Result {
        assert_eq!(serde_json::to_string(&MessageId(7))?, "7");
        assert_eq!(serde_json::from_str::<FileId>(r#""AgAD""#)?, FileId::from("AgAD"));
        assert_eq!(UserId(42).to_string(), "42");
        Ok(())
    }
}
