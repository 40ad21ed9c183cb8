use axum::{
    Json,
    response::{IntoResponse, Response},
};
use relay_config::ErrorsConfig;
use relay_core::HttpError;
use serde::Serialize;

use crate::{GatewayError, InternalError, UpstreamStatus};

/// Gateway error paired with the rendering options it should be written with
#[derive(Debug)]
pub struct ErrorResponse {
    error: GatewayError,
    expose_causes: bool,
    log_causes: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<GatewayError>, config: &ErrorsConfig) -> Self {
        Self {
            error: error.into(),
            expose_causes: config.expose_causes,
            log_causes: config.log_causes,
        }
    }

    pub const fn error(&self) -> &GatewayError {
        &self.error
    }
}

#[derive(Debug, Serialize)]
struct InternalBody<'a> {
    error: InternalDetails<'a>,
}

#[derive(Debug, Serialize)]
struct InternalDetails<'a> {
    r#type: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        match &self.error {
            GatewayError::Internal(error) => render_internal(error, self.expose_causes, self.log_causes),
            GatewayError::Upstream(status) => render_upstream(status),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        ErrorResponse::new(self, &ErrorsConfig::default()).into_response()
    }
}

fn render_internal(error: &InternalError, expose_causes: bool, log_causes: bool) -> Response {
    let status = error.status_code();
    let chain = cause_chain(error);

    match chain.as_deref() {
        Some(cause) if log_causes => tracing::warn!(
            code = error.code().value(),
            error_type = error.error_type(),
            http_status = status.as_u16(),
            cause,
            "internal gateway error"
        ),
        _ => tracing::debug!(
            code = error.code().value(),
            error_type = error.error_type(),
            http_status = status.as_u16(),
            "internal gateway error"
        ),
    }

    let body = InternalBody {
        error: InternalDetails {
            r#type: error.error_type(),
            message: error.message(),
            cause: chain.filter(|_| expose_causes),
        },
    };

    (status, Json(body)).into_response()
}

fn render_upstream(status: &UpstreamStatus) -> Response {
    let http_status = status.http_status_code();

    tracing::debug!(
        grpc_code = status.code,
        http_status = http_status.as_u16(),
        "translated upstream status"
    );

    (http_status, Json(status)).into_response()
}

/// Wrapped cause followed by its sources, joined with `: `
fn cause_chain(error: &InternalError) -> Option<String> {
    let cause: &(dyn std::error::Error + 'static) = error.cause()?;

    let chain: Vec<String> = std::iter::successors(Some(cause), |e| e.source())
        .map(ToString::to_string)
        .collect();

    Some(chain.join(": "))
}
