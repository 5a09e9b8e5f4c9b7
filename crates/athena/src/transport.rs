//! The seam between request translation and the wire.
//!
//! A [`Transport`] receives a fully encoded JSON body plus routing metadata
//! and hands back the decoded response document. Signing, HTTP and retries
//! all live behind it.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as Json;

/// One encoded call, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    pub operation: &'static str,
    /// `X-Amz-Target` header value.
    pub target: String,
    pub content_type: &'static str,
    pub endpoint: String,
    pub body: Json,
}

/// A failure the service reported with a status and (usually) a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct WireFailure {
    pub status: u16,
    /// Error type from a response header, when the transport saw one.
    pub error_type: Option<String>,
    pub body: Json,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("service responded with status {}", .0.status)]
    Service(WireFailure),

    /// The request never produced a service response.
    #[error("connection failed: {0}")]
    Connection(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, request: WireRequest) -> Result<Json, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn invoke(&self, request: WireRequest) -> Result<Json, TransportError> {
        (**self).invoke(request).await
    }
}
