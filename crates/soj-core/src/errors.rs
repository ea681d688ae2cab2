//! Cross-cutting error types for Sojourn.
//!
//! Domain-specific errors (`AuthError`, `ApiError`, `ConfigError`) are defined
//! in their respective crates. Everything converges into `anyhow` at the CLI
//! boundary.

use thiserror::Error;

/// Errors that can be raised by any Sojourn crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The backend returned a role value outside the recognized set.
    #[error("unrecognized role: {0:?}")]
    UnknownRole(String),

    /// An unknown resource kind was named (CLI input or config).
    #[error("unknown resource kind: {0:?}")]
    UnknownResource(String),
}
