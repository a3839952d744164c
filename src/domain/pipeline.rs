//! Pipeline orchestration: normalize, then filter, then annotate.

use tracing::debug;

use crate::domain::annotate::annotate;
use crate::domain::error::DomainResult;
use crate::domain::filter::filter;
use crate::domain::node::Node;
use crate::domain::ops::normalize;

/// Apply the transforms requested by `args` to `tree`.
///
/// `args` are raw command-line-style tokens (see
/// [`normalize`](crate::domain::ops::normalize)); `target_field` names the
/// array field the filter applies to. Ordering is fixed: filtering always
/// precedes annotation, so counts reflect post-filter cardinality, never
/// pre-filter. Errors from either stage propagate unchanged.
pub fn process<S: AsRef<str>>(
    tree: &[Node],
    args: &[S],
    target_field: &str,
) -> DomainResult<Vec<Node>> {
    let ops = normalize(args)?;
    debug!(filters = ?ops.filters, count = ops.count, target_field, "normalized operations");

    let tree = if ops.filters.is_empty() {
        tree.to_vec()
    } else {
        filter(tree, &ops.filters, target_field)?
    };

    Ok(if ops.count { annotate(&tree) } else { tree })
}
