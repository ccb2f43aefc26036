//! The single public error of the typed getter.
//!
//! Responsibilities:
//! - Define `InvalidOption`, the only error callers of
//!   `ConfigRegistry::get` ever observe.
//! - Render the two message shapes: one embedding the underlying cause,
//!   one generic shape for failures that carry no description.
//!
//! Does NOT handle:
//! - Internal extraction errors (see `extract.rs`); those are converted
//!   here at the `get` boundary and never cross it.
//!
//! Invariants:
//! - Every `InvalidOption` names the requested key.

use thiserror::Error;

/// A configuration value could not be retrieved as the requested type.
///
/// Covers missing keys, coercion failures, shape mismatches, and
/// failures inside user-type constructors; the message names the key
/// and, when available, the underlying cause.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvalidOption {
    key: String,
    message: String,
}

impl InvalidOption {
    pub(crate) fn wrap(key: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            key: key.to_string(),
            message: format!("missing option: {key} ({cause})"),
        }
    }

    pub(crate) fn opaque(key: &str) -> Self {
        Self {
            key: key.to_string(),
            message: format!("error parsing option: {key}"),
        }
    }

    /// The key whose retrieval failed.
    pub fn key(&self) -> &str {
        &self.key
    }
}
