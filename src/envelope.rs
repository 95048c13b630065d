use std::time::Duration;

use monostate::MustBe;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{error::DecodeError, ids::ChatId};

/// Bot API [response][1]: exactly one of a decoded result or a reported failure.
///
/// [1]: https://core.telegram.org/bots/api#making-requests
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Envelope<T> {
    Ok(T),
    Failed(Failure),
}

/// Failure reported by the service along with `ok: false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("API error {error_code}: {description}")]
pub struct Failure {
    pub error_code: i32,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// [Additional details][1] on why a request was unsuccessful.
///
/// [1]: https://core.telegram.org/bots/api#responseparameters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with the specified identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<ChatId>,

    /// In case of exceeding flood control, the number of seconds left to wait before the request can be repeated.
    #[serde(rename = "retry_after", default, skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u32>,
}

impl Failure {
    pub const TOO_MANY_REQUESTS: i32 = 429;

    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        self.parameters
            .as_ref()
            .and_then(|parameters| parameters.retry_after_secs)
            .map(|secs| Duration::from_secs(u64::from(secs)))
    }

    #[must_use]
    pub fn migrate_to_chat_id(&self) -> Option<ChatId> {
        self.parameters.as_ref().and_then(|parameters| parameters.migrate_to_chat_id)
    }

    #[must_use]
    pub const fn is_too_many_requests(&self) -> bool {
        self.error_code == Self::TOO_MANY_REQUESTS
    }
}

#[derive(Deserialize)]
struct Success<T> {
    #[allow(dead_code)]
    ok: MustBe!(true),

    result: T,
}

#[derive(Deserialize)]
struct Unsuccessful {
    #[allow(dead_code)]
    ok: MustBe!(false),

    #[serde(flatten)]
    failure: Failure,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a raw payload returned by a transport.
    ///
    /// The `ok` marker selects the state. Decoding of the result is delegated to `T`.
    pub fn decode(raw: Value) -> Result<Self, DecodeError> {
        let decoded = match raw.get("ok") {
            Some(Value::Bool(true)) => Success::<T>::deserialize(&raw).map(|success| Self::Ok(success.result)),
            Some(Value::Bool(false)) => {
                Unsuccessful::deserialize(&raw).map(|unsuccessful| Self::Failed(unsuccessful.failure))
            }
            Some(other) => Err(serde::de::Error::invalid_type(unexpected(other), &"a boolean `ok`")),
            None => Err(serde::de::Error::missing_field("ok")),
        };
        decoded.map_err(|source| DecodeError::new(raw, source))
    }
}

impl<T> Envelope<T> {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(result) => Some(result),
            Self::Failed(_) => None,
        }
    }

    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<T, Failure> {
        self.into()
    }

    pub fn map<R>(self, f: impl FnOnce(T) -> R) -> Envelope<R> {
        match self {
            Self::Ok(result) => Envelope::Ok(f(result)),
            Self::Failed(failure) => Envelope::Failed(failure),
        }
    }
}

impl<T> From<Envelope<T>> for Result<T, Failure> {
    fn from(envelope: Envelope<T>) -> Self {
        match envelope {
            Envelope::Ok(result) => Ok(result),
            Envelope::Failed(failure) => Err(failure),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Envelope<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::decode(raw).map_err(|error| serde::de::Error::custom(error.source))
    }
}

fn unexpected(value: &Value) -> serde::de::Unexpected<'_> {
    use serde::de::Unexpected;

    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(value) => Unexpected::Bool(*value),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(value) => Unexpected::Str(value),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
