use crate::{
    ids::{BusinessConnectionId, ChatId, InlineMessageId, MessageId, MessageThreadId, UserId},
    objects::{GameHighScore, InlineKeyboardMarkup, Message, ReplyParameters},
};

methods! {
    GAMES;

    /// Send a [game](https://core.telegram.org/bots/api#games).
    SendGame = "sendGame" -> Message {
        required {
            /// Games can only be sent to chats addressed by their numeric identifier.
            chat_id: ChatId,

            /// Short name of the game, serves as the unique identifier for the game.
            #[builder(into)]
            game_short_name: String,
        }
        optional {
            business_connection_id: BusinessConnectionId,
            message_thread_id: MessageThreadId,
            disable_notification: bool,
            protect_content: bool,

            #[builder(into)]
            message_effect_id: String,

            reply_parameters: ReplyParameters,

            /// If empty, one «Play game_title» button will be shown.
            /// If not empty, the first button must launch the game.
            reply_markup: InlineKeyboardMarkup,
        }
    };

    /// Get data for high score tables.
    ///
    /// Will return the score of the specified user and several of their neighbors in a game.
    GetGameHighScores = "getGameHighScores" -> Vec<GameHighScore> {
        required {
            user_id: UserId,
        }
        optional {
            chat_id: ChatId,
            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,
        }
    };
}

dual_methods! {
    GAMES_DUAL;

    /// Set the score of the specified user in a game message.
    ///
    /// Fails if the new score is not greater than the user's current score in the chat and `force` is not set.
    SetGameScore = "setGameScore" {
        required {
            user_id: UserId,

            /// New score, must be non-negative.
            score: i64,
        }
        optional {
            /// Allow the high score to decrease. This can be useful when fixing mistakes or banning cheaters.
            force: bool,

            /// Do not automatically edit the game message to include the current scoreboard.
            disable_edit_message: bool,

            chat_id: ChatId,
            message_id: MessageId,

            #[builder(into)]
            inline_message_id: InlineMessageId,
        }
    } => {
        SetChatGameScore -> Message,
        SetInlineGameScore -> bool,
    };
}
