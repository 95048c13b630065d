//! Reference [`Transport`] over HTTPS.

use std::time::Duration;

use async_trait::async_trait;
use bon::bon;
use clap::crate_version;
use reqwest::{
    Client,
    Response,
    header,
    header::{HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::{error::TransportError, transport::Transport};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_ROOT_URL: &str = "https://api.telegram.org";

/// Bot API connection.
///
/// HTTP error statuses are not errors here: the service describes its failures in the body.
#[derive(Clone, Debug)]
#[must_use]
pub struct HttpTransport {
    client: Client,
    token: SecretString,
    root_url: Url,
}

#[bon]
impl HttpTransport {
    /// Build a transport.
    ///
    /// The root URL defaults to [`DEFAULT_ROOT_URL`] and can point to a self-hosted Bot API server.
    /// The timeout applies to the whole request and must exceed the long polling timeout of `getUpdates`.
    #[builder]
    pub fn new(
        #[builder(into)] token: SecretString,
        root_url: Option<Url>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let root_url = match root_url {
            Some(root_url) => root_url,
            None => Url::parse(DEFAULT_ROOT_URL)?,
        };
        let client = build_client(timeout.unwrap_or(DEFAULT_TIMEOUT))?;
        Ok(Self { client, token, root_url })
    }

    fn method_url(&self, wire_name: &str) -> Url {
        let mut url = self.root_url.clone();
        let root_path = self.root_url.path().trim_end_matches('/');
        url.set_path(&format!("{root_path}/bot{}/{wire_name}", self.token.expose_secret()));
        url
    }

    async fn read_json(response: Response) -> Result<Value, TransportError> {
        let status = response.status();
        let value = response.json().await?;
        debug!(%status, "received a response");
        Ok(value)
    }
}

fn build_client(timeout: Duration) -> Result<Client, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(concat!("botapi / ", crate_version!(), " (Rust; reqwest)")),
    );
    let client = Client::builder()
        .gzip(true)
        .use_rustls_tls()
        .default_headers(headers)
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(600)))
        .build()?;
    Ok(client)
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip_all, fields(wire_name = wire_name))]
    async fn post(&self, wire_name: &str, body: Value) -> Result<Value, TransportError> {
        let response = self.client.post(self.method_url(wire_name)).json(&body).send().await?;
        Self::read_json(response).await
    }

    #[instrument(skip_all, fields(wire_name = wire_name))]
    async fn get(&self, wire_name: &str) -> Result<Value, TransportError> {
        let response = self.client.get(self.method_url(wire_name)).send().await?;
        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn method_url_ok() -> Result {
        let transport = HttpTransport::builder().token("123:secret").build()?;
        assert_eq!(transport.method_url("getMe").as_str(), "https://api.telegram.org/bot123:secret/getMe");
        Ok(())
    }

    #[test]
    fn method_url_with_custom_root_ok() -> Result {
        let transport = HttpTransport::builder()
            .token("123:secret")
            .root_url(Url::parse("http://localhost:8081/telegram/")?)
            .build()?;
        assert_eq!(
            transport.method_url("sendMessage").as_str(),
            "http://localhost:8081/telegram/bot123:secret/sendMessage",
        );
        Ok(())
    }

    #[test]
    fn token_is_not_leaked_by_debug_ok() -> Result {
        let transport = HttpTransport::builder().token("123:secret").build()?;
        assert!(!format!("{transport:?}").contains("secret"));
        Ok(())
    }
}
