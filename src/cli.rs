//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::counter::CounterAction;

#[derive(Debug, Clone, Parser)]
#[command(name = "connect-harness", version, about = "Counter connected to a state store")]
pub struct Cli {
    /// Config file (default: <config dir>/connect-harness/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Count the store starts from; overrides the config file.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub initial_count: Option<i64>,

    /// Render without a terminal and print the result.
    #[arg(long)]
    pub headless: bool,

    /// Action kind to dispatch before printing (repeatable, headless only).
    #[arg(long = "dispatch", value_name = "KIND", requires = "headless")]
    pub dispatch: Vec<String>,

    /// Print the final state as JSON instead of the rendered screen.
    #[arg(long, requires = "headless")]
    pub json: bool,
}

impl Cli {
    /// Config path from `--config`, or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Seed for the store: `--initial-count` first, then the config file.
    pub fn initial_count(&self, config: &Config) -> i64 {
        self.initial_count.unwrap_or(config.counter.initial_count)
    }

    pub fn actions(&self) -> Vec<CounterAction> {
        self.dispatch
            .iter()
            .map(|kind| CounterAction::from_kind(kind))
            .collect()
    }
}
