use serde::{Deserialize, Serialize};

use crate::ids::{Recipient, UserId};

/// This object represents a [bot command][1].
///
/// [1]: https://core.telegram.org/bots/api#botcommand
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotCommand {
    /// Text of the command; 1-32 characters. Can contain only lowercase English letters, digits and underscores.
    pub command: String,

    /// Description of the command; 1-256 characters.
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}

/// The [scope][1] to which bot commands are applied.
///
/// [1]: https://core.telegram.org/bots/api#botcommandscope
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotCommandScope {
    /// Used if no commands with a narrower scope are specified for the user.
    Default,

    AllPrivateChats,
    AllGroupChats,
    AllChatAdministrators,
    Chat { chat_id: Recipient },
    ChatAdministrators { chat_id: Recipient },
    ChatMember { chat_id: Recipient, user_id: UserId },
}

/// This object describes the bot's [menu button][1] in a private chat.
///
/// [1]: https://core.telegram.org/bots/api#menubutton
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuButton {
    /// Opens the bot's list of commands.
    Commands,

    /// Launches a [Web App](https://core.telegram.org/bots/webapps).
    WebApp { text: String, web_app: WebAppInfo },

    /// No specific value for the menu button was set.
    Default,
}

/// Describes a [Web App](https://core.telegram.org/bots/webapps).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    /// An HTTPS URL of a Web App to be opened.
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotName {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotDescription {
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotShortDescription {
    pub short_description: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ids::ChatId, prelude::*};

    #[test]
    fn command_scope_ok() -> Result {
        let scope = BotCommandScope::ChatMember { chat_id: Recipient::Id(ChatId(-100)), user_id: UserId(42) };
        let value = serde_json::to_value(&scope)?;
        // language=json
        assert_eq!(value, json!({"type": "chat_member", "chat_id": -100, "user_id": 42}));
        assert_eq!(serde_json::from_value::<BotCommandScope>(value)?, scope);
        assert_eq!(serde_json::to_value(BotCommandScope::AllPrivateChats)?, json!({"type": "all_private_chats"}));
        Ok(())
    }

    #[test]
    fn command_scope_with_username_ok() -> Result {
        let scope: BotCommandScope = serde_json::from_value(json!({"type": "chat", "chat_id": "@channel"}))?;
        assert_eq!(scope, BotCommandScope::Chat { chat_id: Recipient::from("@channel") });
        Ok(())
    }

    #[test]
    fn menu_button_ok() -> Result {
        let button: MenuButton = serde_json::from_value(json!({
            "type": "web_app",
            "text": "Open",
            "web_app": {"url": "https://example.org/app"}
        }))?;
        assert!(matches!(button, MenuButton::WebApp { ref text, .. } if text == "Open"));
        assert_eq!(serde_json::from_value::<MenuButton>(json!({"type": "default"}))?, MenuButton::Default);
        Ok(())
    }
}
