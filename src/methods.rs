//! Bot API [available methods][1].
//!
//! Every operation is a request record bound to its wire name, HTTP verb and response type
//! through [`Method`]. The records are generated from declarative tables, one module per group
//! of operations, and [`bindings`] lists the complete table.
//!
//! [1]: https://core.telegram.org/bots/api#available-methods

use std::{
    fmt::{self, Display, Formatter},
    future::Future,
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{bot::Bot, error::Error, transport::Transport};

/// Telegram bot API method.
pub trait Method: Serialize + Sync {
    /// Wire name of the method.
    const NAME: &'static str;

    const VERB: Verb;

    /// Wire keys which the request record may carry.
    const FIELDS: &'static [&'static str];

    type Response: DeserializeOwned + Send;

    /// Shorthand for [`Bot::execute`].
    fn call_on<T: Transport>(&self, bot: &Bot<T>) -> impl Future<Output = Result<Self::Response, Error>> + Send
    where
        Self: Sized,
    {
        bot.execute(self)
    }
}

/// How a method is submitted to the service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Parameterless method, no request body.
    Get,

    /// Request record is sent as the JSON body.
    Post,
}

impl Display for Verb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// Entry of the binding table: how one operation maps onto the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    /// Rust name of the request record.
    pub operation: &'static str,

    pub wire_name: &'static str,
    pub verb: Verb,
    pub fields: &'static [&'static str],

    /// Rust name of the response type.
    pub response: &'static str,
}

impl Binding {
    pub(crate) const fn of<M: Method>(operation: &'static str, response: &'static str) -> Self {
        Self { operation, wire_name: M::NAME, verb: M::VERB, fields: M::FIELDS, response }
    }
}

impl Display for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4} {} -> {}", self.verb, self.wire_name, self.response)
    }
}

/// Generates request records along with their [`Method`] implementations and a binding table.
///
/// An entry without a body is a parameterless `GET` method and becomes a unit struct.
/// Fields may be renamed on the wire with `field as "key": Type`.
macro_rules! methods {
    (@key $field:ident) => { stringify!($field) };
    (@key $field:ident $key:literal) => { $key };

    (@record
        $(#[$meta:meta])*
        $name:ident {
            required { $($(#[$rmeta:meta])* $rfield:ident $(as $rkey:literal)? : $rty:ty),* $(,)? }
            optional { $($(#[$ometa:meta])* $ofield:ident $(as $okey:literal)? : $oty:ty),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize, ::bon::Builder)]
        #[must_use]
        pub struct $name {
            $(
                $(#[$rmeta])*
                $(#[serde(rename = $rkey)])?
                pub $rfield: $rty,
            )*
            $(
                $(#[$ometa])*
                $(#[serde(rename = $okey)])?
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $ofield: Option<$oty>,
            )*
        }
    };

    (@method $name:ident = $wire:literal -> $response:ty, $verb:ident, [$($key:expr),* $(,)?]) => {
        impl $crate::methods::Method for $name {
            const NAME: &'static str = $wire;
            const VERB: $crate::methods::Verb = $crate::methods::Verb::$verb;
            const FIELDS: &'static [&'static str] = &[$($key),*];
            type Response = $response;
        }
    };

    (@entry
        $(#[$meta:meta])*
        $name:ident = $wire:literal -> $response:ty {
            required { $($(#[$rmeta:meta])* $rfield:ident $(as $rkey:literal)? : $rty:ty),* $(,)? }
            optional { $($(#[$ometa:meta])* $ofield:ident $(as $okey:literal)? : $oty:ty),* $(,)? }
        }
    ) => {
        methods!(@record
            $(#[$meta])*
            $name {
                required { $($(#[$rmeta])* $rfield $(as $rkey)? : $rty),* }
                optional { $($(#[$ometa])* $ofield $(as $okey)? : $oty),* }
            }
        );
        methods!(@method $name = $wire -> $response, Post, [
            $(methods!(@key $rfield $($rkey)?),)*
            $(methods!(@key $ofield $($okey)?),)*
        ]);
    };

    (@entry $(#[$meta:meta])* $name:ident = $wire:literal -> $response:ty) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
        #[must_use]
        pub struct $name;

        methods!(@method $name = $wire -> $response, Get, []);
    };

    (
        $table:ident;
        $(
            $(#[$meta:meta])*
            $name:ident = $wire:literal -> $response:ty $({ $($body:tt)* })?;
        )*
    ) => {
        $(methods!(@entry $(#[$meta])* $name = $wire -> $response $({ $($body)* })?);)*

        pub(super) const $table: &[$crate::methods::Binding] = &[
            $($crate::methods::Binding::of::<$name>(stringify!($name), stringify!($response)),)*
        ];
    };
}

/// Generates operations whose response type depends on how the target message is addressed.
///
/// The shared request record gets no [`Method`] implementation of its own.
/// Instead, it is wrapped into two transparent bindings under the same wire name:
/// the first one for messages addressed by `chat_id` and `message_id`,
/// the second one for inline messages addressed by `inline_message_id`.
macro_rules! dual_methods {
    (@binding $shared:ident => $name:ident, $addressing:literal) => {
        #[doc = concat!("[`", stringify!($shared), "`] ", $addressing, ".")]
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        #[must_use]
        pub struct $name(pub $shared);

        impl From<$shared> for $name {
            fn from(request: $shared) -> Self {
                Self(request)
            }
        }
    };

    (
        $table:ident;
        $(
            $(#[$meta:meta])*
            $name:ident = $wire:literal {
                required { $($(#[$rmeta:meta])* $rfield:ident $(as $rkey:literal)? : $rty:ty),* $(,)? }
                optional { $($(#[$ometa:meta])* $ofield:ident $(as $okey:literal)? : $oty:ty),* $(,)? }
            } => {
                $chat:ident -> $chat_response:ty,
                $inline:ident -> $inline_response:ty $(,)?
            };
        )*
    ) => {
        $(
            methods!(@record
                $(#[$meta])*
                $name {
                    required { $($(#[$rmeta])* $rfield $(as $rkey)? : $rty),* }
                    optional { $($(#[$ometa])* $ofield $(as $okey)? : $oty),* }
                }
            );

            dual_methods!(@binding $name => $chat, "addressed by `chat_id` and `message_id`");
            dual_methods!(@binding $name => $inline, "addressed by `inline_message_id`");

            methods!(@method $chat = $wire -> $chat_response, Post, [
                $(methods!(@key $rfield $($rkey)?),)*
                $(methods!(@key $ofield $($okey)?),)*
            ]);
            methods!(@method $inline = $wire -> $inline_response, Post, [
                $(methods!(@key $rfield $($rkey)?),)*
                $(methods!(@key $ofield $($okey)?),)*
            ]);
        )*

        pub(super) const $table: &[$crate::methods::Binding] = &[
            $(
                $crate::methods::Binding::of::<$chat>(stringify!($chat), stringify!($chat_response)),
                $crate::methods::Binding::of::<$inline>(stringify!($inline), stringify!($inline_response)),
            )*
        ];
    };
}

mod chats;
mod editing;
mod forum;
mod games;
mod messages;
mod profile;
mod queries;
mod stickers;
mod updates;

pub use self::{
    chats::*,
    editing::*,
    forum::*,
    games::*,
    messages::*,
    profile::*,
    queries::*,
    stickers::*,
    updates::*,
};

/// Complete binding table.
pub fn bindings() -> impl Iterator<Item = &'static Binding> {
    [
        updates::UPDATES,
        profile::PROFILE,
        messages::MESSAGES,
        editing::EDITING,
        editing::EDITING_DUAL,
        chats::CHATS,
        forum::FORUM,
        queries::QUERIES,
        stickers::STICKERS,
        games::GAMES,
        games::GAMES_DUAL,
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use serde_json::{Value, json};

    use super::*;
    use crate::{
        ids::{ChatId, MessageId, MessageThreadId},
        objects::{InlineKeyboardMarkup, InputPollOption, ParseMode, PollKind},
        prelude::*,
    };

    /// Check the encoding against the expected body, then decode it back into an equal record.
    pub(super) fn assert_round_trip<M>(method: &M, expected: &Value) -> Result
    where
        M: Method + DeserializeOwned + PartialEq + fmt::Debug,
    {
        let encoded = serde_json::to_value(method)?;
        assert_eq!(&encoded, expected, "`{}`", M::NAME);
        assert_keys_are_bound(method)?;
        let decoded: M = serde_json::from_value(encoded)?;
        assert_eq!(&decoded, method, "`{}`", M::NAME);
        Ok(())
    }

    pub(super) fn assert_keys_are_bound<M: Method>(method: &M) -> Result {
        let body = match serde_json::to_value(method)? {
            Value::Object(body) => body,
            Value::Null => return Ok(()),
            other => bail!("`{}` serializes into {other}", M::NAME),
        };
        for key in body.keys() {
            assert!(M::FIELDS.contains(&key.as_str()), "`{key}` is not bound for `{}`", M::NAME);
        }
        Ok(())
    }

    #[test]
    fn send_message_minimal_body_ok() -> Result {
        let method = SendMessage::builder().chat_id(42_i64).text("hi").build();
        // language=json
        assert_eq!(serde_json::to_string(&method)?, r#"{"chat_id":42,"text":"hi"}"#);
        Ok(())
    }

    #[test]
    fn send_message_round_trip_ok() -> Result {
        let method = SendMessage::builder()
            .chat_id("@channel")
            .text("*hi*")
            .parse_mode(ParseMode::MarkdownV2)
            .disable_notification(true)
            .build();
        assert_round_trip(
            &method,
            &json!({"chat_id": "@channel", "text": "*hi*", "parse_mode": "MarkdownV2", "disable_notification": true}),
        )?;
        assert_round_trip(&GetMe, &Value::Null)?;
        Ok(())
    }

    #[test]
    fn empty_string_is_not_absent_ok() -> Result {
        let method = SetMyName::builder().name(String::new()).build();
        // language=json
        assert_eq!(serde_json::to_string(&method)?, r#"{"name":""}"#);
        // language=json
        assert_eq!(serde_json::to_string(&SetMyName::builder().build())?, "{}");
        Ok(())
    }

    #[test]
    fn renamed_field_ok() -> Result {
        let method = SendPoll::builder()
            .chat_id(42_i64)
            .question("Tea or coffee?")
            .options(vec![InputPollOption::from("Tea"), InputPollOption::from("Coffee")])
            .kind(PollKind::Quiz)
            .correct_option_id(0)
            .build();
        let value = serde_json::to_value(&method)?;
        assert_eq!(value["type"], "quiz");
        assert_keys_are_bound(&method)?;
        Ok(())
    }

    #[test]
    fn serialized_keys_are_bound_ok() -> Result {
        assert_keys_are_bound(
            &SendMessage::builder()
                .chat_id(ChatId(1))
                .text("hi")
                .parse_mode(ParseMode::Html)
                .message_thread_id(MessageThreadId(2))
                .reply_markup(InlineKeyboardMarkup::from(vec![]))
                .build(),
        )?;
        assert_keys_are_bound(
            &EditChatMessageText::from(
                EditMessageText::builder()
                    .chat_id(ChatId(1))
                    .message_id(MessageId(2))
                    .text("edited")
                    .build(),
            ),
        )?;
        assert_keys_are_bound(&GetUpdates::builder().offset(10).timeout(30).build())?;
        assert_keys_are_bound(&GetMe)?;
        Ok(())
    }

    #[test]
    fn operation_names_are_unique_ok() {
        let mut operations = HashSet::new();
        for binding in bindings() {
            assert!(operations.insert(binding.operation), "duplicate operation `{}`", binding.operation);
        }
    }

    #[test]
    fn only_dual_pairs_share_wire_names_ok() {
        let mut by_wire_name = HashMap::<_, Vec<_>>::new();
        for binding in bindings() {
            by_wire_name.entry(binding.wire_name).or_default().push(binding);
        }
        let shared: Vec<_> = by_wire_name.values().filter(|bindings| bindings.len() > 1).collect();
        assert_eq!(shared.len(), 7);
        for pair in shared {
            assert_eq!(pair.len(), 2, "{pair:?}");
            assert_eq!(pair[0].fields, pair[1].fields);
            assert_eq!(pair[0].response, "Message");
            assert_eq!(pair[1].response, "bool");
        }
    }

    #[test]
    fn get_if_and_only_if_parameterless_ok() {
        for binding in bindings() {
            assert_eq!(binding.verb == Verb::Get, binding.fields.is_empty(), "{binding:?}");
        }
        let get: Vec<_> = bindings()
            .filter(|binding| binding.verb == Verb::Get)
            .map(|binding| binding.wire_name)
            .collect();
        assert_eq!(get, ["getWebhookInfo", "getMe", "logOut", "close", "getForumTopicIconStickers"]);
    }

    #[test]
    fn wire_names_are_camel_case_ok() {
        for binding in bindings() {
            let mut chars = binding.wire_name.chars();
            assert!(chars.next().is_some_and(|first| first.is_ascii_lowercase()), "{binding:?}");
            assert!(chars.all(|symbol| symbol.is_ascii_alphanumeric()), "{binding:?}");
        }
    }

    #[test]
    fn binding_display_ok() {
        let binding = bindings().find(|binding| binding.wire_name == "getMe");
        assert_eq!(binding.map(ToString::to_string).as_deref(), Some("GET  getMe -> User"));
    }

    #[test]
    fn verb_display_honors_width_ok() {
        assert_eq!(format!("{:<4}|", Verb::Get), "GET |");
        assert_eq!(format!("{:<4}|", Verb::Post), "POST|");
        assert_eq!(Verb::Get.to_string(), "GET");
    }

    #[test]
    fn table_is_complete_ok() {
        assert_eq!(bindings().count(), 107);
    }
}
