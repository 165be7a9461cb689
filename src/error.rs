//! Error types for expression construction.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Errors produced when constructing expression nodes from raw symbols or
/// names.
///
/// Construction is the only gate: once a node exists, `evaluate`, `print`,
/// and `transform` are total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A function name outside the supported set (`sqrt`, `abs`).
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// An operator symbol outside the supported set (`+`, `-`, `*`, `/`).
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
}

/// Result type alias for construction operations.
pub type Result<T> = std::result::Result<T, Error>;
