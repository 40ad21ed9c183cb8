//! Minimal gRPC-to-HTTP gateway used to drive error rendering end to end
//!
//! Services and methods are registered in memory. Each method either
//! answers with a canned JSON payload or fails with a `tonic::Status`, which
//! stands in for a real upstream call.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::{Json, Router, routing};
use relay_config::ErrorsConfig;
use relay_errors::{ErrorKind, ErrorResponse, InternalError};
use serde_json::Value;

/// Header naming the upstream version to call
pub const VERSION_HEADER: &str = "x-service-version";

/// Canned upstream reply
#[derive(Clone)]
pub enum Reply {
    Ok(Value),
    Status(tonic::Status),
}

#[derive(Clone, Default)]
struct Backend {
    reachable: bool,
    methods: HashMap<String, Reply>,
}

#[derive(Clone, Default)]
struct Service {
    /// Backends keyed by version; more than one entry per version is ambiguous
    backends: HashMap<String, Vec<Backend>>,
    /// Resolves, but no backend actually serves it
    missing: bool,
}

/// Builder for the in-memory gateway
#[derive(Default)]
pub struct GatewayBuilder {
    services: HashMap<String, Service>,
    config: ErrorsConfig,
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given error rendering configuration
    pub fn with_errors_config(mut self, config: ErrorsConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a reachable backend for `service` at `version` serving `method`
    pub fn with_method(mut self, service: &str, version: &str, method: &str, reply: Reply) -> Self {
        let backends = self
            .services
            .entry(service.to_owned())
            .or_default()
            .backends
            .entry(version.to_owned())
            .or_default();

        if backends.is_empty() {
            backends.push(Backend {
                reachable: true,
                ..Backend::default()
            });
        }

        backends[0].methods.insert(method.to_owned(), reply);
        self
    }

    /// Register an additional backend for an existing `(service, version)` pair
    pub fn with_duplicate_backend(mut self, service: &str, version: &str) -> Self {
        self.services
            .entry(service.to_owned())
            .or_default()
            .backends
            .entry(version.to_owned())
            .or_default()
            .push(Backend {
                reachable: true,
                ..Backend::default()
            });
        self
    }

    /// Register a backend that refuses connections
    pub fn with_unreachable(mut self, service: &str, version: &str) -> Self {
        self.services
            .entry(service.to_owned())
            .or_default()
            .backends
            .entry(version.to_owned())
            .or_default()
            .push(Backend::default());
        self
    }

    /// Register a service that resolves but is not served by its upstream
    pub fn with_missing_service(mut self, service: &str) -> Self {
        self.services.entry(service.to_owned()).or_default().missing = true;
        self
    }

    pub fn into_router(self) -> Router {
        let state = Arc::new(GatewayState {
            services: self.services,
            config: self.config,
        });

        Router::new()
            .route("/{service}/{method}", routing::post(invoke))
            .with_state(state)
    }
}

struct GatewayState {
    services: HashMap<String, Service>,
    config: ErrorsConfig,
}

async fn invoke(
    State(state): State<Arc<GatewayState>>,
    Path((service, method)): Path<(String, String)>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Result<Json<Value>, ErrorResponse> {
    dispatch(&state, &service, &method, &headers, &request).map_err(|e| ErrorResponse::new(e, &state.config))
}

fn dispatch(
    state: &GatewayState,
    service: &str,
    method: &str,
    headers: &HeaderMap,
    request: &Value,
) -> Result<Json<Value>, relay_errors::GatewayError> {
    let service = state
        .services
        .get(service)
        .ok_or_else(|| InternalError::new(ErrorKind::ServiceUnresolvable))?;

    if service.missing {
        return Err(ErrorKind::ServiceNotFound.into());
    }

    let requested = headers.get(VERSION_HEADER).and_then(|v| v.to_str().ok());
    let backends = match requested {
        Some(version) => service
            .backends
            .get(version)
            .ok_or_else(|| InternalError::new(ErrorKind::ServiceUnresolvable))?,
        None if service.backends.len() > 1 => return Err(ErrorKind::VersionNotSpecified.into()),
        None => service
            .backends
            .values()
            .next()
            .ok_or_else(|| InternalError::new(ErrorKind::ServiceUnresolvable))?,
    };

    let [backend] = backends.as_slice() else {
        return Err(ErrorKind::VersionUndecidable.into());
    };

    if !backend.reachable {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        return Err(InternalError::with_cause(ErrorKind::UpstreamConnFailure, refused).into());
    }

    let reply = backend
        .methods
        .get(method)
        .ok_or_else(|| InternalError::new(ErrorKind::MethodNotFound))?;

    if !request.is_object() {
        return Err(ErrorKind::MessageTypeMismatch.into());
    }

    match reply {
        Reply::Ok(payload) => Ok(Json(payload.clone())),
        Reply::Status(status) => Err(status.clone().into()),
    }
}
