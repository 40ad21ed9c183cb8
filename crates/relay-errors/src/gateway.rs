use http::StatusCode;
use relay_core::{Describe, HttpError};
use thiserror::Error;

use crate::{InternalError, UpstreamStatus};

/// Any failure the response layer may have to report
///
/// Upstream outcomes are kept as they are and never reclassified into the
/// internal taxonomy.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway itself failed
    #[error(transparent)]
    Internal(#[from] InternalError),
    /// The upstream answered with a non-OK gRPC status
    #[error(transparent)]
    Upstream(#[from] UpstreamStatus),
}

impl From<crate::ErrorKind> for GatewayError {
    fn from(kind: crate::ErrorKind) -> Self {
        Self::Internal(kind.into())
    }
}

impl From<tonic::Status> for GatewayError {
    fn from(status: tonic::Status) -> Self {
        Self::Upstream(status.into())
    }
}

impl Describe for GatewayError {
    fn description(&self) -> &str {
        match self {
            Self::Internal(error) => error.description(),
            Self::Upstream(status) => status.description(),
        }
    }
}

impl HttpError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Internal(error) => error.status_code(),
            Self::Upstream(status) => status.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Internal(error) => error.error_type(),
            Self::Upstream(status) => status.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Internal(error) => error.client_message(),
            Self::Upstream(status) => status.client_message(),
        }
    }
}
