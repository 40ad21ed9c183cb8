#![allow(clippy::must_use_candidate)]

pub mod errors;
mod loader;

use serde::Deserialize;

pub use errors::ErrorsConfig;

/// Top-level relay configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Error rendering configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
}
