//! Framework error type.
//!
//! Sub-crates define their own error enums (`SimError`, `OutputError`) and
//! keep them separate; `IxError` covers only the concerns of this crate.
//! Misuse of the admission controller (permit double-release, shutdown with
//! occupants inside) is a caller bug, not a runtime condition — those paths
//! halt with a panic instead of returning an error.

use thiserror::Error;

/// The top-level error type for `ix-core`.
#[derive(Debug, Error)]
pub enum IxError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ix-core` operations.
pub type IxResult<T> = Result<T, IxError>;
