use crate::objects::{AllowedUpdate, Update, WebhookInfo};

methods! {
    UPDATES;

    /// Use this method to receive incoming updates using long polling. Returns an `Array` of `Update` objects.
    ///
    /// See also: <https://core.telegram.org/bots/api#getupdates>.
    GetUpdates = "getUpdates" -> Vec<Update> {
        required {}
        optional {
            /// Identifier of the first update to be returned.
            ///
            /// Must be greater by one than the highest among the identifiers of previously received updates.
            /// Negative offset retrieves updates starting from `-offset` update from the end of the updates queue.
            offset: i64,

            /// Limits the number of updates to be retrieved. Values between 1-100 are accepted. Defaults to 100.
            limit: u32,

            /// Timeout in seconds for long polling.
            ///
            /// Defaults to 0, i.e. usual short polling.
            /// Should be positive, short polling should be used for testing purposes only.
            timeout: u64,

            allowed_updates: Vec<AllowedUpdate>,
        }
    };

    /// Specify a URL and receive incoming updates via an outgoing webhook.
    ///
    /// See also: <https://core.telegram.org/bots/api#setwebhook>.
    SetWebhook = "setWebhook" -> bool {
        required {
            /// HTTPS URL to send updates to. Use an empty string to remove webhook integration.
            #[builder(into)]
            url: String,
        }
        optional {
            #[builder(into)]
            ip_address: String,

            /// The maximum allowed number of simultaneous HTTPS connections to the webhook for update delivery, 1-100.
            max_connections: u32,

            allowed_updates: Vec<AllowedUpdate>,
            drop_pending_updates: bool,

            /// Sent in the `X-Telegram-Bot-Api-Secret-Token` header in every webhook request.
            #[builder(into)]
            secret_token: String,
        }
    };

    /// Remove webhook integration if you decide to switch back to `getUpdates`.
    DeleteWebhook = "deleteWebhook" -> bool {
        required {}
        optional {
            drop_pending_updates: bool,
        }
    };

    /// Get current webhook status.
    GetWebhookInfo = "getWebhookInfo" -> WebhookInfo;
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::{methods::tests::assert_round_trip, prelude::*};

    #[test]
    fn get_updates_ok() -> Result {
        let method = GetUpdates::builder()
            .offset(101)
            .timeout(30)
            .allowed_updates(vec![AllowedUpdate::Message, AllowedUpdate::CallbackQuery])
            .build();
        assert_eq!(
            serde_json::to_string(&method)?,
            // language=json
            r#"{"offset":101,"timeout":30,"allowed_updates":["message","callback_query"]}"#,
        );
        Ok(())
    }

    #[test]
    fn delete_webhook_without_parameters_ok() -> Result {
        // language=json
        assert_eq!(serde_json::to_string(&DeleteWebhook::builder().build())?, "{}");
        Ok(())
    }

    #[test]
    fn updates_round_trip_ok() -> Result {
        assert_round_trip(&GetUpdates::builder().build(), &json!({}))?;
        assert_round_trip(
            &GetUpdates::builder().offset(-1).limit(100).timeout(0).build(),
            &json!({"offset": -1, "limit": 100, "timeout": 0}),
        )?;
        assert_round_trip(
            &SetWebhook::builder()
                .url("https://example.org/hook")
                .max_connections(40)
                .allowed_updates(vec![AllowedUpdate::Message])
                .secret_token("s3cr3t")
                .build(),
            &json!({
                "url": "https://example.org/hook",
                "max_connections": 40,
                "allowed_updates": ["message"],
                "secret_token": "s3cr3t"
            }),
        )?;
        assert_round_trip(&SetWebhook::builder().url("").build(), &json!({"url": ""}))?;
        assert_round_trip(
            &DeleteWebhook::builder().drop_pending_updates(true).build(),
            &json!({"drop_pending_updates": true}),
        )?;
        assert_round_trip(&GetWebhookInfo, &Value::Null)?;
        Ok(())
    }
}
