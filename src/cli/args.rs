//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

use crate::config::OutputFormat;

/// Filter and count-annotate arbitrarily nested record trees
///
/// Transform operations go after `--` and use the operation grammar, e.g.
/// `treesift -- --filter=ry --count`.
#[derive(Parser, Debug)]
#[command(name = "treesift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (-d: debug, -dd: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// JSON dataset to transform (default: built-in sample data)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Array field to filter on (default: from config, "animals")
    #[arg(short, long)]
    pub key: Option<String>,

    /// Output rendering (default: from config, json)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Transform operations: --filter=<pattern> (repeatable) and --count
    #[arg(last = true)]
    pub operations: Vec<String>,
}
