use serde::{Deserialize, Serialize};

use crate::{ids::UserId, objects::is_false};

/// This object represents a Telegram [user or bot][1].
///
/// [1]: https://core.telegram.org/bots/api#user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct User {
    pub id: UserId,

    pub is_bot: bool,

    pub first_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// [IETF language tag][1] of the user's language.
    ///
    /// [1]: https://en.wikipedia.org/wiki/IETF_language_tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_premium: bool,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_join_groups: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_read_all_group_messages: Option<bool>,

    /// Returned only in `getMe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_inline_queries: Option<bool>,
}
