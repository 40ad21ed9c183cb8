use http::StatusCode;

/// A failure that can describe itself with a single human-readable string
///
/// Kept separate from [`std::fmt::Display`] so a type can expose a stable
/// description while formatting itself differently elsewhere.
pub trait Describe {
    /// Human-readable description of the failure
    fn description(&self) -> &str;
}

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each error type that reaches the HTTP client. The
/// response layer converts these into actual HTTP responses, keeping
/// domain errors decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `method_not_found`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn description(&self) -> &str {
        (**self).description()
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn description(&self) -> &str {
        (**self).description()
    }
}
