use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

/// Message reported for [`ErrorKind::Unknown`] and for any unrecognized code
pub const UNKNOWN_FAILURE: &str = "unknown failure";

/// Recognized internal failure classifications
///
/// The numeric space is sparse and hand-assigned. Values 0, 1 and 7 are
/// reserved for codes that live outside this crate and carry no meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[repr(i32)]
pub enum ErrorKind {
    /// Could not connect to the upstream gRPC service
    UpstreamConnFailure = 2,
    /// Could not resolve a gRPC service to its upstream FQDN
    ServiceUnresolvable = 3,
    /// The service resolved to an upstream that does not expose it
    ServiceNotFound = 4,
    /// The upstream does not expose the requested method
    MethodNotFound = 5,
    /// Request JSON does not match the method's message type
    MessageTypeMismatch = 6,
    /// Unclassified internal failure
    Unknown = 8,
    /// Several versions of the service exist and the request named none
    VersionNotSpecified = 9,
    /// Several upstreams match the same (service, version) pair
    VersionUndecidable = 10,
}

impl ErrorKind {
    /// Fixed description for this kind
    pub const fn message(self) -> &'static str {
        match self {
            Self::UpstreamConnFailure => "could not connect to backend gRPC service",
            Self::ServiceUnresolvable => "could not resolve service",
            Self::ServiceNotFound => "service not found; service discovery error",
            Self::MethodNotFound => "no such gRPC method",
            Self::MessageTypeMismatch => "message type mismatch",
            Self::Unknown => UNKNOWN_FAILURE,
            Self::VersionNotSpecified => "multiple versions of this service exist. specify version in request",
            Self::VersionUndecidable => "multiple backends exist. add version annotations",
        }
    }

    /// Stable `snake_case` name (e.g. `service_not_found`)
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Numeric value of this kind
    pub const fn value(self) -> i32 {
        self as i32
    }
}

/// Raw internal error code
///
/// Carries any integer so that reserved or future values survive a round
/// trip. Use [`ErrorCode::kind`] to find out whether the value is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(i32);

impl ErrorCode {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Recognized kind for this code, if any
    pub const fn kind(self) -> Option<ErrorKind> {
        ErrorKind::from_repr(self.0)
    }

    /// Fixed description for this code
    ///
    /// Unrecognized values fall back to the [`ErrorKind::Unknown`] message.
    pub const fn message(self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.message(),
            None => UNKNOWN_FAILURE,
        }
    }
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        Self(kind.value())
    }
}

impl From<i32> for ErrorCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
