//! Domain-level errors (no infrastructure dependencies)

use thiserror::Error;

/// Errors raised by the tree transforms themselves.
///
/// Every variant is fatal to the call that produced it: the transforms are
/// deterministic, so a retry would fail identically. Presentation is left to
/// the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A token outside the recognized `--filter=<pattern>` / `--count`
    /// grammar, including a bare `--filter=` with an empty pattern.
    #[error("unrecognized argument: {0}")]
    UnrecognizedArgument(String),

    /// Filtering was requested without naming the array field to filter on.
    #[error("no filtering key is defined")]
    MissingFilterKey,

    /// Input data does not fit the node shape (string scalars and arrays of
    /// records only). `path` points at the offending value.
    #[error("unsupported value at {path}: {reason}")]
    UnsupportedShape { path: String, reason: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
