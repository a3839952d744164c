//! Domain layer: the generic tree transforms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Everything here is a pure function over immutable input.

pub mod annotate;
pub mod error;
pub mod filter;
pub mod node;
pub mod ops;
pub mod pipeline;

pub use annotate::annotate;
pub use error::{DomainError, DomainResult};
pub use filter::filter;
pub use node::{tree_from_json, tree_to_json, FieldValue, Node, NAME_FIELD};
pub use ops::{normalize, Operations, COUNT_FLAG, FILTER_FLAG};
pub use pipeline::process;
