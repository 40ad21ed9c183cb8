//! Error classification and status translation for the relay gateway
//!
//! Two independent pieces share this crate:
//!
//! - [`InternalError`] classifies failures the gateway is responsible for
//!   into a small, sparse set of stable codes with fixed messages.
//! - [`UpstreamStatus`] carries the non-OK outcome of an upstream gRPC call
//!   and [`translate`] maps its status code onto an HTTP status.
//!
//! [`GatewayError`] unifies both for the response layer. With the `http`
//! feature, [`ErrorResponse`] renders them as axum responses.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod code;
mod gateway;
mod internal;
#[cfg(feature = "http")]
mod response;
mod upstream;

pub use code::{ErrorCode, ErrorKind, UNKNOWN_FAILURE};
pub use gateway::GatewayError;
pub use internal::{BoxError, InternalError};
pub use relay_core::{Describe, HttpError};
#[cfg(feature = "http")]
pub use response::ErrorResponse;
pub use upstream::{UpstreamStatus, translate};
