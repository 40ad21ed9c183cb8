use serde::Deserialize;

/// Controls how gateway errors are rendered to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Include the wrapped cause of internal errors in response bodies
    #[serde(default)]
    pub expose_causes: bool,
    /// Emit a warn-level event with the cause chain for each internal error
    #[serde(default = "default_log_causes")]
    pub log_causes: bool,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            expose_causes: false,
            log_causes: default_log_causes(),
        }
    }
}

const fn default_log_causes() -> bool {
    true
}
