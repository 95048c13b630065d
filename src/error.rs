use serde_json::Value;

use crate::envelope::Failure;

/// Raw payload does not match the shape expected for its declared type.
///
/// Raised before an [`Envelope`][crate::Envelope] is produced, never defaulted.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode the response: {source}")]
pub struct DecodeError {
    /// The offending payload, as received from the transport.
    pub raw: Value,

    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub const fn new(raw: Value, source: serde_json::Error) -> Self {
        Self { raw, source }
    }
}

/// Failure before any payload became available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request error: {0:#}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Operation call error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("transport error on `{method}`: {source}")]
    Transport {
        method: &'static str,

        #[source]
        source: TransportError,
    },

    #[error("failed to encode `{method}`: {source}")]
    Encode {
        method: &'static str,

        #[source]
        source: serde_json::Error,
    },

    #[error("`{method}`: {source}")]
    Decode {
        method: &'static str,

        #[source]
        source: DecodeError,
    },

    /// The service reported a failure, only produced when an envelope is explicitly flattened.
    #[error("`{method}` failed: {source}")]
    Api {
        method: &'static str,

        #[source]
        source: Failure,
    },
}

impl Error {
    /// The failure reported by the service, if that is what happened.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&Failure> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }
}
