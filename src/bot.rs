//! Invocation of bound methods over a [`Transport`].

use tracing::{debug, instrument, warn};

use crate::{
    envelope::Envelope,
    error::Error,
    methods::{Method, Verb},
    transport::{Transport, http::HttpTransport},
};

/// Telegram bot API connection.
///
/// Holds no state besides the transport, so that concurrent calls are independent of each other.
#[derive(Clone, Debug)]
#[must_use]
pub struct Bot<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> Bot<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Call the method and decode the response envelope.
    ///
    /// A failure reported by the service is a regular [`Envelope::Failed`], not an error.
    #[instrument(skip_all, fields(method = M::NAME, verb = %M::VERB))]
    pub async fn call<M: Method>(&self, method: &M) -> Result<Envelope<M::Response>, Error> {
        let raw = match M::VERB {
            Verb::Get => self.transport.get(M::NAME).await,
            Verb::Post => {
                let body = serde_json::to_value(method)
                    .map_err(|source| Error::Encode { method: M::NAME, source })?;
                self.transport.post(M::NAME, body).await
            }
        }
        .map_err(|source| Error::Transport { method: M::NAME, source })?;
        let envelope =
            Envelope::decode(raw).map_err(|source| Error::Decode { method: M::NAME, source })?;
        match &envelope {
            Envelope::Ok(_) => debug!("ok"),
            Envelope::Failed(failure) => {
                warn!(error_code = failure.error_code, description = %failure.description, "failed");
            }
        }
        Ok(envelope)
    }

    /// Call the method and return its result, turning a reported failure into [`Error::Api`].
    pub async fn execute<M: Method>(&self, method: &M) -> Result<M::Response, Error> {
        self.call(method)
            .await?
            .into_result()
            .map_err(|source| Error::Api { method: M::NAME, source })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        error::TransportError,
        ids::{ChatId, MessageId, UserId},
        methods::{EditChatMessageText, EditInlineMessageText, EditMessageText, GetMe, SendMessage, SetChatTitle},
        prelude::*,
    };

    /// Records the submitted requests and replays a canned reply.
    struct MockTransport {
        reply: Option<Value>,
        requests: Mutex<Vec<(Verb, String, Option<Value>)>>,
    }

    impl MockTransport {
        fn replying(reply: Value) -> Self {
            Self { reply: Some(reply), requests: Mutex::default() }
        }

        fn unreachable() -> Self {
            Self { reply: None, requests: Mutex::default() }
        }

        fn requests(&self) -> Vec<(Verb, String, Option<Value>)> {
            self.requests.lock().unwrap().clone()
        }

        fn record(&self, verb: Verb, wire_name: &str, body: Option<Value>) -> Result<Value, TransportError> {
            self.requests.lock().unwrap().push((verb, wire_name.to_owned(), body));
            self.reply.clone().ok_or_else(|| TransportError::Other(anyhow!("connection refused")))
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn post(&self, wire_name: &str, body: Value) -> Result<Value, TransportError> {
            self.record(Verb::Post, wire_name, Some(body))
        }

        async fn get(&self, wire_name: &str) -> Result<Value, TransportError> {
            self.record(Verb::Get, wire_name, None)
        }
    }

    fn message_payload(message_id: i64) -> Value {
        json!({
            "message_id": message_id,
            "date": 1_700_000_000,
            "chat": {"id": 42, "type": "private", "first_name": "Alice"},
            "text": "hi"
        })
    }

    #[tokio::test]
    async fn send_message_ok() -> Result {
        let transport = MockTransport::replying(json!({"ok": true, "result": message_payload(7)}));
        let bot = Bot::new(&transport);

        let message = bot.execute(&SendMessage::builder().chat_id(ChatId(42)).text("hi").build()).await?;

        assert_eq!(message.id, MessageId(7));
        assert_eq!(message.chat.id, ChatId(42));
        assert_eq!(
            transport.requests(),
            [(Verb::Post, "sendMessage".to_owned(), Some(json!({"chat_id": 42, "text": "hi"})))],
        );
        Ok(())
    }

    #[tokio::test]
    async fn failed_envelope_is_not_an_error_ok() -> Result {
        let transport = MockTransport::replying(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: title too long"
        }));
        let bot = Bot::new(&transport);
        let title = "a".repeat(300);

        let envelope = bot.call(&SetChatTitle::builder().chat_id(ChatId(-100)).title(title.clone()).build()).await?;

        let Envelope::Failed(failure) = envelope else {
            bail!("expected a failed envelope, got {envelope:?}");
        };
        assert_eq!(failure.error_code, 400);
        assert_eq!(failure.description, "Bad Request: title too long");

        // Lengths are not validated locally.
        let requests = transport.requests();
        assert_eq!(requests[0].2.as_ref().and_then(|body| body["title"].as_str()), Some(title.as_str()));
        Ok(())
    }

    #[tokio::test]
    async fn execute_flattens_failure_ok() {
        let transport = MockTransport::replying(json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 5",
            "parameters": {"retry_after": 5}
        }));
        let error = Bot::new(&transport)
            .execute(&SendMessage::builder().chat_id(ChatId(42)).text("hi").build())
            .await
            .unwrap_err();
        let failure = error.as_failure().unwrap();
        assert!(failure.is_too_many_requests());
        assert_eq!(failure.retry_after(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn dual_edit_bindings_ok() -> Result {
        let request = EditMessageText::builder().text("edited").build();

        let transport = MockTransport::replying(json!({"ok": true, "result": message_payload(8)}));
        let by_chat = EditChatMessageText(EditMessageText {
            chat_id: Some(ChatId(42).into()),
            message_id: Some(MessageId(8)),
            ..request.clone()
        });
        let message = Bot::new(&transport).execute(&by_chat).await?;
        assert_eq!(message.id, MessageId(8));

        let transport = MockTransport::replying(json!({"ok": true, "result": true}));
        let inline = EditInlineMessageText(EditMessageText { inline_message_id: Some("AgAAAA".into()), ..request });
        assert!(Bot::new(&transport).execute(&inline).await?);
        assert_eq!(transport.requests()[0].1, "editMessageText");
        Ok(())
    }

    #[tokio::test]
    async fn get_me_without_body_ok() -> Result {
        let transport = MockTransport::replying(json!({
            "ok": true,
            "result": {"id": 1, "is_bot": true, "first_name": "Bot", "username": "test_bot"}
        }));
        let user = GetMe.call_on(&Bot::new(&transport)).await?;
        assert_eq!(user.id, UserId(1));
        assert_eq!(transport.requests(), [(Verb::Get, "getMe".to_owned(), None)]);
        Ok(())
    }

    #[tokio::test]
    async fn transport_error_ok() {
        let transport = MockTransport::unreachable();
        let error = Bot::new(&transport).call(&GetMe).await.unwrap_err();
        assert!(matches!(error, Error::Transport { method: "getMe", .. }), "{error:?}");
        assert!(error.as_failure().is_none());
    }

    #[tokio::test]
    async fn decode_error_keeps_raw_payload_ok() {
        let raw = json!({"ok": true, "result": {"id": "not a user"}});
        let transport = MockTransport::replying(raw.clone());
        let error = Bot::new(&transport).call(&GetMe).await.unwrap_err();
        let Error::Decode { source, .. } = error else {
            panic!("expected a decoding error, got {error:?}");
        };
        assert_eq!(source.raw, raw);
    }
}
