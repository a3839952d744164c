//! Argument normalization: raw flag tokens into an operation descriptor.

use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};

/// Prefix form of the filter flag; the pattern follows the `=`.
pub const FILTER_FLAG: &str = "--filter=";
/// Exact form of the count flag.
pub const COUNT_FLAG: &str = "--count";

/// Normalized description of the requested transforms.
///
/// Constructed only by [`normalize`] and immutable afterwards. `filters`
/// mirrors the order the patterns appeared on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operations {
    pub filters: Vec<String>,
    pub count: bool,
}

/// Turn raw flag tokens into an [`Operations`] descriptor.
///
/// Recognized forms are `--filter=<pattern>` (repeatable, pattern must be
/// non-empty) and `--count` (idempotent). Any other token fails the whole
/// call with [`DomainError::UnrecognizedArgument`]; nothing partial is
/// returned.
pub fn normalize<S: AsRef<str>>(args: &[S]) -> DomainResult<Operations> {
    let mut ops = Operations::default();
    for arg in args {
        let arg = arg.as_ref();
        if let Some(pattern) = arg.strip_prefix(FILTER_FLAG) {
            // A bare "--filter=" carries no pattern and is rejected.
            if pattern.is_empty() {
                return Err(DomainError::UnrecognizedArgument(arg.to_string()));
            }
            trace!(pattern, "collected filter pattern");
            ops.filters.push(pattern.to_string());
        } else if arg == COUNT_FLAG {
            ops.count = true;
        } else {
            return Err(DomainError::UnrecognizedArgument(arg.to_string()));
        }
    }
    Ok(ops)
}
