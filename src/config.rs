//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treesift/treesift.toml`
//! 3. Local config: `<dir>/.treesift.toml`
//! 4. Environment variables: `TREESIFT_*` prefix
//!
//! Command-line flags override all of the above at the call site.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// How the transformed tree is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON, field order preserved
    Json,
    /// ASCII tree of labels
    Tree,
}

/// Unified configuration for treesift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Array field that pattern filtering applies to
    pub target_field: String,
    /// Default output rendering
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_field: "animals".to_string(),
            format: OutputFormat::Json,
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `local_dir` is an optional directory searched for `.treesift.toml`
    /// (typically the directory of the input file, or the cwd). Missing
    /// config files are fine; a malformed one is an error.
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(path) = global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(dir) = local_dir {
            builder = builder.add_source(File::from(local_config_path(dir)).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("TREESIFT"));
        builder.build()?.try_deserialize()
    }
}

/// XDG config directory for treesift.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treesift").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treesift.toml"))
}

/// Path to the local config file inside a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".treesift.toml")
}
