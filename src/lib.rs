//! treesift: filter and count-annotate arbitrarily nested record trees.
//!
//! The library works on a generic [`Node`] representation (insertion-ordered
//! fields holding string scalars or child sequences) so the transforms apply
//! uniformly at any nesting depth. Concrete data enters through the JSON
//! conversion boundary in [`domain::node`].
//!
//! The main entry point is [`process`]: it normalizes raw operation tokens
//! (`--filter=<pattern>`, `--count`), prunes the tree to matching branches,
//! and annotates every parent label with its post-filter child count.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    annotate, filter, normalize, process, tree_from_json, tree_to_json, DomainError, DomainResult,
    FieldValue, Node, Operations,
};
