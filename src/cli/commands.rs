//! Command execution: load input, run the pipeline, render output

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::{render_json, render_tree};
use crate::config::{OutputFormat, Settings};
use crate::domain::{process, tree_from_json, Node};

/// The reference dataset (regions → people → animals), used when no
/// `--input` file is given.
const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    // Local config sits next to the input file when there is one.
    let local_dir = cli.input.as_deref().and_then(Path::parent);
    let settings = Settings::load(local_dir)?;

    let tree = load_tree(cli)?;
    let target_field = cli.key.as_deref().unwrap_or(&settings.target_field);

    let result = process(&tree, &cli.operations, target_field)?;

    match cli.format.unwrap_or(settings.format) {
        OutputFormat::Json => println!("{}", render_json(&result)?),
        OutputFormat::Tree => print!("{}", render_tree(&result)),
    }
    Ok(())
}

#[instrument(skip(cli))]
fn load_tree(cli: &Cli) -> CliResult<Vec<Node>> {
    let text = match &cli.input {
        Some(path) => {
            debug!(?path, "reading input dataset");
            fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.clone(),
                source,
            })?
        }
        None => SAMPLE_DATA.to_string(),
    };

    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(tree_from_json(&value)?)
}
