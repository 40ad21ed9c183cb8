use http::StatusCode;
use relay_core::{Describe, HttpError};
use thiserror::Error;

use crate::code::{ErrorCode, ErrorKind};

/// Boxed underlying error carried as the cause of an [`InternalError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure the gateway itself is responsible for
///
/// The message is derived from the code alone. An optional cause is owned
/// by the error and handed back untouched through [`InternalError::cause`]
/// and [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("{}", .code.message())]
pub struct InternalError {
    code: ErrorCode,
    #[source]
    cause: Option<BoxError>,
}

impl InternalError {
    /// Create an error for the given code without a cause
    pub fn new(code: impl Into<ErrorCode>) -> Self {
        Self {
            code: code.into(),
            cause: None,
        }
    }

    /// Create an error for the given code wrapping an underlying cause
    pub fn with_cause(code: impl Into<ErrorCode>, cause: impl Into<BoxError>) -> Self {
        Self {
            code: code.into(),
            cause: Some(cause.into()),
        }
    }

    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Recognized kind, or `None` for reserved and future codes
    pub const fn kind(&self) -> Option<ErrorKind> {
        self.code.kind()
    }

    pub const fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Wrapped cause, exactly as it was supplied
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Give up ownership of the wrapped cause
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

impl From<ErrorKind> for InternalError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl Describe for InternalError {
    fn description(&self) -> &str {
        self.message()
    }
}

impl HttpError for InternalError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            Some(ErrorKind::UpstreamConnFailure | ErrorKind::ServiceUnresolvable | ErrorKind::ServiceNotFound) => {
                StatusCode::BAD_GATEWAY
            }
            Some(ErrorKind::MethodNotFound) => StatusCode::NOT_FOUND,
            Some(ErrorKind::MessageTypeMismatch | ErrorKind::VersionNotSpecified) => StatusCode::BAD_REQUEST,
            Some(ErrorKind::VersionUndecidable | ErrorKind::Unknown) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        self.kind().unwrap_or(ErrorKind::Unknown).as_str()
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }
}
