mod key;
mod resolve;

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use tracing::debug;

use envhash_core::{Error, Result};
use envhash_env::EnvSnapshot;

use crate::config::{Config, DEFAULT_CONFIG};

pub use key::KeyArgs;
pub use resolve::ResolveArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the hashable environment and print it broken down by source
    Resolve(ResolveArgs),
    /// Print the cache-key digest of the resolved environment
    Key(KeyArgs),
}

impl Commands {
    pub fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Resolve(args) => args.run(),
            Commands::Key(args) => args.run(),
        }
    }
}

/// Flags shared by commands that need a snapshot and a specification list
#[derive(Args)]
pub struct SelectionArgs {
    /// Path to the configuration file (defaults to `envhash.json` when
    /// present in the working directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Additional specification applied after the configuration file's
    /// list; repeatable, in order
    #[arg(long = "spec", value_name = "SPEC")]
    pub specs: Vec<String>,

    /// Read the snapshot from a JSON object file instead of the process
    /// environment
    #[arg(long, value_name = "FILE")]
    pub from_json: Option<PathBuf>,
}

impl SelectionArgs {
    /// The ordered specification list: configuration file entries first,
    /// then `--spec` flags.
    pub fn specifications(&self) -> Result<Vec<String>> {
        let mut specs = match &self.config {
            Some(path) => Config::load(path)?.env,
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if default.exists() {
                    Config::load(default)?.env
                } else {
                    Vec::new()
                }
            }
        };

        debug!(
            from_config = specs.len(),
            from_flags = self.specs.len(),
            "assembled specification list"
        );

        specs.extend(self.specs.iter().cloned());
        Ok(specs)
    }

    /// The snapshot to resolve against: a JSON file when `--from-json` is
    /// given, otherwise the process environment captured once, here.
    pub fn snapshot(&self) -> Result<EnvSnapshot> {
        match &self.from_json {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| Error::file_system(path.to_path_buf(), "read", e))?;
                let snapshot = serde_json::from_str(&raw)?;
                Ok(snapshot)
            }
            None => Ok(EnvSnapshot::capture()),
        }
    }
}
