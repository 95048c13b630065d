//! Transport collaborator: delivers a method's JSON body to the service and returns the raw reply.

pub mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// Performs the actual remote calls.
///
/// The reply is returned verbatim: the envelope is decoded by [`crate::bot::Bot`].
/// A failed envelope is a successful transport round trip and must be returned as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit the JSON body of a method under its wire name.
    async fn post(&self, wire_name: &str, body: Value) -> Result<Value, TransportError>;

    /// Submit a parameterless method.
    async fn get(&self, wire_name: &str) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn post(&self, wire_name: &str, body: Value) -> Result<Value, TransportError> {
        (**self).post(wire_name, body).await
    }

    async fn get(&self, wire_name: &str) -> Result<Value, TransportError> {
        (**self).get(wire_name).await
    }
}
