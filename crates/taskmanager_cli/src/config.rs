//! Command-line and environment configuration.
//!
//! # Invariants
//! - `AppConfig::log_dir` is always absolute, as `init_logging` requires.
//! - The snapshot path is the only setting read from the environment.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "taskmanager.json";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Interactive project and task manager",
    long_about = None
)]
pub struct Cli {
    /// Snapshot file holding every project and task.
    #[arg(long, env = "TASKMANAGER_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files. Defaults to `logs/` next to the data file.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let log_dir = match cli.log_dir {
            Some(dir) => absolute(&dir)?,
            None => default_log_dir(&cli.data_file)?,
        };
        let log_level = cli
            .log_level
            .unwrap_or_else(|| taskmanager_core::default_log_level().to_string());

        Ok(Self {
            data_file: cli.data_file,
            log_level,
            log_dir,
        })
    }
}

fn default_log_dir(data_file: &Path) -> Result<PathBuf> {
    let data_file = absolute(data_file)?;
    let parent = data_file.parent().unwrap_or_else(|| Path::new("/"));
    Ok(parent.join(DEFAULT_LOG_DIR_NAME))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .with_context(|| format!("failed to resolve absolute path for {}", path.display()))
}
