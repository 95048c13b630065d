use crate::{
    ids::{CallbackQueryId, InlineQueryId},
    objects::{InlineQueryResult, InlineQueryResultsButton, SentWebAppMessage},
};

methods! {
    QUERIES;

    /// Send answers to callback queries sent from inline keyboards.
    ///
    /// The answer will be displayed to the user as a notification at the top of the chat screen or as an alert.
    AnswerCallbackQuery = "answerCallbackQuery" -> bool {
        required {
            #[builder(into)]
            callback_query_id: CallbackQueryId,
        }
        optional {
            /// Text of the notification. If not specified, nothing will be shown to the user, 0-200 characters.
            #[builder(into)]
            text: String,

            /// Show an alert instead of a notification at the top of the chat screen.
            show_alert: bool,

            #[builder(into)]
            url: String,

            /// The maximum amount of time in seconds that the result of the callback query may be cached client-side.
            cache_time: u32,
        }
    };

    /// Send answers to an inline query. No more than 50 results per query are allowed.
    AnswerInlineQuery = "answerInlineQuery" -> bool {
        required {
            #[builder(into)]
            inline_query_id: InlineQueryId,

            results: Vec<InlineQueryResult>,
        }
        optional {
            cache_time: u32,

            /// Cache results on the server side only for the user that sent the query.
            is_personal: bool,

            /// Offset that a client should send in the next query with the same text to receive more results.
            #[builder(into)]
            next_offset: String,

            button: InlineQueryResultsButton,
        }
    };

    /// Set the result of an interaction with a [Web App](https://core.telegram.org/bots/webapps)
    /// and send a corresponding message on behalf of the user to the chat from which the query originated.
    AnswerWebAppQuery = "answerWebAppQuery" -> SentWebAppMessage {
        required {
            #[builder(into)]
            web_app_query_id: String,

            result: InlineQueryResult,
        }
        optional {}
    };
}
