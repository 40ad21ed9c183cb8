use http::StatusCode;
use relay_core::{Describe, HttpError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonic::Code;

/// Non-OK outcome returned by an upstream gRPC service
///
/// `code` is untrusted: it mirrors the gRPC status space but may hold any
/// integer. `message` is passed through to the client unchanged. The field
/// names are part of the client-facing JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct UpstreamStatus {
    /// gRPC status code as reported by the upstream
    pub code: i32,
    /// Upstream message, opaque to the gateway
    pub message: String,
}

impl UpstreamStatus {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Canonical gRPC code, if `code` is one of the 17 defined values
    pub fn grpc_code(&self) -> Option<Code> {
        canonical(self.code)
    }

    /// HTTP status code to return to the client for this outcome
    pub fn http_status_code(&self) -> StatusCode {
        translate(self.code)
    }
}

impl From<tonic::Status> for UpstreamStatus {
    fn from(status: tonic::Status) -> Self {
        Self::from(&status)
    }
}

impl From<&tonic::Status> for UpstreamStatus {
    fn from(status: &tonic::Status) -> Self {
        Self::new(i32::from(status.code()), status.message())
    }
}

impl Describe for UpstreamStatus {
    fn description(&self) -> &str {
        &self.message
    }
}

impl HttpError for UpstreamStatus {
    fn status_code(&self) -> StatusCode {
        self.http_status_code()
    }

    fn error_type(&self) -> &str {
        "upstream_error"
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }
}

/// Translate a raw gRPC status code into an HTTP status code
///
/// Total over `i32`. Several gRPC codes deliberately collapse onto the same
/// HTTP status (`Aborted` and `AlreadyExists` are both 409; `Unknown`,
/// `Internal` and `DataLoss` are all 500) and clients depend on that. Any
/// value outside the canonical range is 500.
pub fn translate(code: i32) -> StatusCode {
    let Some(code) = canonical(code) else {
        return StatusCode::INTERNAL_SERVER_ERROR;
    };

    match code {
        Code::Ok => StatusCode::OK,
        Code::Cancelled | Code::DeadlineExceeded => StatusCode::REQUEST_TIMEOUT,
        Code::InvalidArgument | Code::OutOfRange => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::AlreadyExists | Code::Aborted => StatusCode::CONFLICT,
        Code::PermissionDenied => StatusCode::FORBIDDEN,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::ResourceExhausted | Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        Code::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
        Code::Unimplemented => StatusCode::NOT_IMPLEMENTED,
        Code::Unknown | Code::Internal | Code::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// `Code::from_i32` folds unknown values into `Code::Unknown`, so the range
// check has to happen first.
fn canonical(code: i32) -> Option<Code> {
    (0..=16).contains(&code).then(|| Code::from_i32(code))
}
