//! Shared seams for gateway error types
//!
//! Feature crates implement these traits on their own error types so the
//! response layer can render any of them without knowing the concrete type.

mod error;

pub use error::{Describe, HttpError};
