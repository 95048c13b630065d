//! The bot's own profile: identity, commands, descriptions and default rights.

use crate::{
    ids::ChatId,
    objects::{
        BotCommand,
        BotCommandScope,
        BotDescription,
        BotName,
        BotShortDescription,
        ChatAdministratorRights,
        MenuButton,
        User,
    },
};

methods! {
    PROFILE;

    /// A simple method for testing your bot's authentication token.
    ///
    /// See also: <https://core.telegram.org/bots/api#getme>.
    GetMe = "getMe" -> User;

    /// Log out from the cloud Bot API server before launching the bot locally.
    LogOut = "logOut" -> bool;

    /// Close the bot instance before moving it from one local server to another.
    Close = "close" -> bool;

    /// Change the list of the bot's commands.
    ///
    /// See also: <https://core.telegram.org/bots/api#setmycommands>.
    SetMyCommands = "setMyCommands" -> bool {
        required {
            /// At most 100 commands can be specified.
            commands: Vec<BotCommand>,
        }
        optional {
            /// Defaults to [`BotCommandScope::Default`].
            scope: BotCommandScope,

            /// A two-letter ISO 639-1 language code.
            /// If empty, commands will be applied to all users from the given scope,
            /// for whose language there are no dedicated commands.
            #[builder(into)]
            language_code: String,
        }
    };

    DeleteMyCommands = "deleteMyCommands" -> bool {
        required {}
        optional {
            scope: BotCommandScope,
            #[builder(into)]
            language_code: String,
        }
    };

    GetMyCommands = "getMyCommands" -> Vec<BotCommand> {
        required {}
        optional {
            scope: BotCommandScope,
            #[builder(into)]
            language_code: String,
        }
    };

    SetMyName = "setMyName" -> bool {
        required {}
        optional {
            /// New bot name; 0-64 characters. Pass an empty string to remove the dedicated name.
            #[builder(into)]
            name: String,

            #[builder(into)]
            language_code: String,
        }
    };

    GetMyName = "getMyName" -> BotName {
        required {}
        optional {
            #[builder(into)]
            language_code: String,
        }
    };

    /// Change the bot's description, which is shown in the chat with the bot if the chat is empty.
    SetMyDescription = "setMyDescription" -> bool {
        required {}
        optional {
            #[builder(into)]
            description: String,

            #[builder(into)]
            language_code: String,
        }
    };

    GetMyDescription = "getMyDescription" -> BotDescription {
        required {}
        optional {
            #[builder(into)]
            language_code: String,
        }
    };

    /// Change the bot's short description,
    /// which is shown on the bot's profile page and is sent together with the link when users share the bot.
    SetMyShortDescription = "setMyShortDescription" -> bool {
        required {}
        optional {
            #[builder(into)]
            short_description: String,

            #[builder(into)]
            language_code: String,
        }
    };

    GetMyShortDescription = "getMyShortDescription" -> BotShortDescription {
        required {}
        optional {
            #[builder(into)]
            language_code: String,
        }
    };

    /// Change the bot's menu button in a private chat, or the default menu button.
    SetChatMenuButton = "setChatMenuButton" -> bool {
        required {}
        optional {
            /// Unique identifier for the target private chat.
            /// If not specified, the default bot's menu button will be changed.
            chat_id: ChatId,

            menu_button: MenuButton,
        }
    };

    GetChatMenuButton = "getChatMenuButton" -> MenuButton {
        required {}
        optional {
            chat_id: ChatId,
        }
    };

    /// Change the default administrator rights requested by the bot when it's added as an administrator
    /// to groups or channels.
    SetMyDefaultAdministratorRights = "setMyDefaultAdministratorRights" -> bool {
        required {}
        optional {
            /// If not specified, the default administrator rights will be cleared.
            rights: ChatAdministratorRights,

            for_channels: bool,
        }
    };

    GetMyDefaultAdministratorRights = "getMyDefaultAdministratorRights" -> ChatAdministratorRights {
        required {}
        optional {
            for_channels: bool,
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{methods::tests::assert_round_trip, prelude::*};

    #[test]
    fn set_my_commands_ok() -> Result {
        let method = SetMyCommands::builder()
            .commands(vec![BotCommand::new("start", "Start the bot")])
            .scope(BotCommandScope::AllPrivateChats)
            .build();
        assert_eq!(
            serde_json::to_string(&method)?,
            // language=json
            r#"{"commands":[{"command":"start","description":"Start the bot"}],"scope":{"type":"all_private_chats"}}"#,
        );
        Ok(())
    }

    #[test]
    fn get_me_has_no_body_ok() -> Result {
        // language=json
        assert_eq!(serde_json::to_string(&GetMe)?, "null");
        Ok(())
    }

    #[test]
    fn profile_round_trip_ok() -> Result {
        assert_round_trip(&DeleteMyCommands::builder().build(), &json!({}))?;
        assert_round_trip(
            &GetMyCommands::builder().scope(BotCommandScope::AllGroupChats).language_code("nl").build(),
            &json!({"scope": {"type": "all_group_chats"}, "language_code": "nl"}),
        )?;
        assert_round_trip(&GetMyName::builder().build(), &json!({}))?;
        assert_round_trip(
            &SetMyDescription::builder().description("").language_code("en").build(),
            &json!({"description": "", "language_code": "en"}),
        )?;
        assert_round_trip(&GetChatMenuButton::builder().chat_id(ChatId(42)).build(), &json!({"chat_id": 42}))?;
        assert_round_trip(
            &GetMyDefaultAdministratorRights::builder().for_channels(true).build(),
            &json!({"for_channels": true}),
        )?;
        assert_round_trip(&LogOut, &Value::Null)?;
        assert_round_trip(&Close, &Value::Null)?;
        Ok(())
    }
}
