use serde_json::Value as Json;
use thiserror::Error;

use schemata_core::{codec, CodecError, Model, ServiceFailure, ShapeDescriptor, ValidationError};

use crate::schema::{
    INVALID_REQUEST_EXCEPTION, RESOURCE_NOT_FOUND_EXCEPTION, TOO_MANY_REQUESTS_EXCEPTION,
};
use crate::transport::{TransportError, WireFailure};
use crate::types::ThrottleReason;

// ── Service exceptions ───────────────────────────────────────────

/// A failure reported by Athena, decoded from the error response body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AthenaServiceError {
    /// The service rejected the input.
    #[error("InvalidRequestException: {message}")]
    InvalidRequest {
        message: String,
        athena_error_code: Option<String>,
        status: u16,
    },

    /// A call to the metastore failed.
    #[error("MetadataException: {message}")]
    Metadata { message: String, status: u16 },

    #[error("InternalServerException: {message}")]
    InternalServer { message: String, status: u16 },

    #[error("ResourceNotFoundException: {message}")]
    ResourceNotFound {
        message: String,
        resource_name: Option<String>,
        status: u16,
    },

    #[error("TooManyRequestsException: {message}")]
    TooManyRequests {
        message: String,
        reason: Option<ThrottleReason>,
        status: u16,
    },

    /// An error type this crate does not model.
    #[error("{error_type}: {message}")]
    Unknown {
        error_type: String,
        message: String,
        status: u16,
    },
}

impl AthenaServiceError {
    /// Builds the matching exception from a service failure.
    ///
    /// The type comes from `__type` in the body, else from the transport.
    /// Bodies that don't decode against the error shape still keep their
    /// message.
    pub fn from_failure(failure: &WireFailure) -> Self {
        let error_type = failure
            .body
            .get("__type")
            .and_then(Json::as_str)
            .or(failure.error_type.as_deref())
            .map(short_type_name)
            .unwrap_or_default()
            .to_string();
        let status = failure.status;
        let message = raw_message(&failure.body);

        let decode = |shape: &'static ShapeDescriptor| codec::from_value(shape, &failure.body).ok();
        let text = |model: &Option<Model>, field: &str| {
            model.as_ref().and_then(|m| m.get_str(field)).map(str::to_string)
        };

        match error_type.as_str() {
            "InvalidRequestException" => {
                let model = decode(&INVALID_REQUEST_EXCEPTION);
                AthenaServiceError::InvalidRequest {
                    athena_error_code: text(&model, "AthenaErrorCode"),
                    message,
                    status,
                }
            }
            "MetadataException" => AthenaServiceError::Metadata { message, status },
            "InternalServerException" => AthenaServiceError::InternalServer { message, status },
            "ResourceNotFoundException" => {
                let model = decode(&RESOURCE_NOT_FOUND_EXCEPTION);
                AthenaServiceError::ResourceNotFound {
                    resource_name: text(&model, "ResourceName"),
                    message,
                    status,
                }
            }
            "TooManyRequestsException" => {
                let model = decode(&TOO_MANY_REQUESTS_EXCEPTION);
                AthenaServiceError::TooManyRequests {
                    reason: model.as_ref().and_then(|m| m.get_enum("Reason")),
                    message,
                    status,
                }
            }
            _ => AthenaServiceError::Unknown {
                error_type: if error_type.is_empty() {
                    "UnknownError".to_string()
                } else {
                    error_type
                },
                message,
                status,
            },
        }
    }

    /// The exception type name as Athena reports it.
    pub fn error_type(&self) -> &str {
        match self {
            AthenaServiceError::InvalidRequest { .. } => "InvalidRequestException",
            AthenaServiceError::Metadata { .. } => "MetadataException",
            AthenaServiceError::InternalServer { .. } => "InternalServerException",
            AthenaServiceError::ResourceNotFound { .. } => "ResourceNotFoundException",
            AthenaServiceError::TooManyRequests { .. } => "TooManyRequestsException",
            AthenaServiceError::Unknown { error_type, .. } => error_type,
        }
    }
}

impl ServiceFailure for AthenaServiceError {
    fn message(&self) -> &str {
        match self {
            AthenaServiceError::InvalidRequest { message, .. }
            | AthenaServiceError::Metadata { message, .. }
            | AthenaServiceError::InternalServer { message, .. }
            | AthenaServiceError::ResourceNotFound { message, .. }
            | AthenaServiceError::TooManyRequests { message, .. }
            | AthenaServiceError::Unknown { message, .. } => message,
        }
    }

    /// `AthenaErrorCode` when the service sent one, else the type name.
    fn error_code(&self) -> Option<&str> {
        match self {
            AthenaServiceError::InvalidRequest {
                athena_error_code: Some(code),
                ..
            } => Some(code),
            other => Some(other.error_type()),
        }
    }

    fn status(&self) -> u16 {
        match self {
            AthenaServiceError::InvalidRequest { status, .. }
            | AthenaServiceError::Metadata { status, .. }
            | AthenaServiceError::InternalServer { status, .. }
            | AthenaServiceError::ResourceNotFound { status, .. }
            | AthenaServiceError::TooManyRequests { status, .. }
            | AthenaServiceError::Unknown { status, .. } => *status,
        }
    }

    fn is_transient(&self) -> bool {
        match self {
            AthenaServiceError::InternalServer { .. }
            | AthenaServiceError::TooManyRequests { .. } => true,
            other => other.status() >= 500 || other.status() == 429,
        }
    }
}

/// `com.amazonaws.athena#InvalidRequestException` and header forms like
/// `InvalidRequestException:http://...` both reduce to the bare name.
fn short_type_name(raw: &str) -> &str {
    let name = raw.rsplit('#').next().unwrap_or(raw);
    name.split(':').next().unwrap_or(name)
}

fn raw_message(body: &Json) -> String {
    ["message", "Message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Json::as_str))
        .unwrap_or_default()
        .to_string()
}

// ── Aggregate ────────────────────────────────────────────────────

/// Everything an Athena call can fail with.
#[derive(Error, Debug)]
pub enum AthenaError {
    /// Rejected locally before anything was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Codec(CodecError),

    #[error(transparent)]
    Service(#[from] AthenaServiceError),

    /// The transport never got a service response.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("no operation takes {0} as input")]
    UnknownOperation(String),
}

impl From<CodecError> for AthenaError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Validation(v) => AthenaError::Validation(v),
            other => AthenaError::Codec(other),
        }
    }
}

impl From<TransportError> for AthenaError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Service(failure) => {
                AthenaError::Service(AthenaServiceError::from_failure(&failure))
            }
            TransportError::Connection(reason) => AthenaError::Transport(reason),
        }
    }
}

impl AthenaError {
    /// The service-reported failure, if this is one.
    pub fn as_service(&self) -> Option<&AthenaServiceError> {
        match self {
            AthenaError::Service(e) => Some(e),
            _ => None,
        }
    }
}
