use thiserror::Error;

/// Local, pre-submission failures. Always recoverable by correcting input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{shape} has no field named {field}")]
    UnknownField { shape: String, field: String },

    #[error("{shape}.{field} expects {expected}, got {actual}")]
    TypeMismatch {
        shape: String,
        field: String,
        expected: String,
        actual: String,
    },

    #[error("{shape}.{field} is required but was not set")]
    MissingRequired { shape: String, field: String },

    #[error("{shape}.{field} has length {actual}, minimum is {min}")]
    TooShort {
        shape: String,
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("{shape}.{field} has length {actual}, maximum is {max}")]
    TooLong {
        shape: String,
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("{shape}.{field} does not match pattern {pattern}")]
    PatternMismatch {
        shape: String,
        field: String,
        pattern: String,
    },

    #[error("{shape}.{field} is {actual}, allowed range is {min}..={max}")]
    OutOfRange {
        shape: String,
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    /// Unknown, empty or missing enum value.
    #[error("{0}")]
    InvalidArgument(String),
}

impl ValidationError {
    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::UnknownField { field, .. }
            | ValidationError::TypeMismatch { field, .. }
            | ValidationError::MissingRequired { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::PatternMismatch { field, .. }
            | ValidationError::OutOfRange { field, .. } => Some(field),
            ValidationError::InvalidArgument(_) => None,
        }
    }
}

/// Failures translating between Models and wire documents.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("cannot decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Capability shared by every error reported by a remote service.
///
/// Implementors carry the message verbatim as the service produced it.
pub trait ServiceFailure: std::error::Error {
    /// Human-readable message from the service.
    fn message(&self) -> &str;

    /// Machine-readable error code (usually the exception type name).
    fn error_code(&self) -> Option<&str>;

    /// HTTP-like status reported with the failure.
    fn status(&self) -> u16;

    /// Whether the failure is transient on the service side. Advisory only:
    /// whether to retry is the caller's decision.
    fn is_transient(&self) -> bool {
        self.status() >= 500 || self.status() == 429
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_shape_and_field() {
        let err = ValidationError::MissingRequired {
            shape: "StartQueryExecutionRequest".into(),
            field: "QueryString".into(),
        };
        assert_eq!(
            err.to_string(),
            "StartQueryExecutionRequest.QueryString is required but was not set"
        );
        assert_eq!(err.field(), Some("QueryString"));
    }

    #[test]
    fn invalid_argument_preserves_message() {
        let err = ValidationError::InvalidArgument("Value cannot be null or empty!".into());
        assert_eq!(err.to_string(), "Value cannot be null or empty!");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn codec_wraps_validation() {
        let err: CodecError = ValidationError::InvalidArgument("bad".into()).into();
        assert!(matches!(err, CodecError::Validation(_)));
        assert!(err.to_string().contains("bad"));
    }
}
