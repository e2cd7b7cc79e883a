//! Errors surfaced by [`Tree`][crate::Tree] operations.
//!
//! Lookups that miss and operations on an empty tree are not errors; they
//! are reported through `Option` or are simply no-ops.

use thiserror::Error;

/// The ways a tree operation can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing, e.g. a traversal was started
    /// without a visitor.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
