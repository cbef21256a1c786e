//! Interactive task manager entry point.
//!
//! # Responsibility
//! - Load the snapshot at startup, run the menu, save the snapshot at exit.
//! - Own the repository value for the whole process.
//!
//! # Invariants
//! - A missing or unreadable snapshot never aborts startup.
//! - A failed save is reported but still exits normally.

mod config;
mod menu;

use anyhow::{Context, Result};
use clap::Parser;
use config::{AppConfig, Cli};
use log::{info, warn};
use menu::MenuSession;
use std::io;
use std::path::Path;
use taskmanager_core::{load_snapshot, save_snapshot, ProjectRepository};

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    if let Err(err) = taskmanager_core::init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        taskmanager_core::core_version()
    );

    let (mut repo, notice) = load_repository(&config.data_file);
    println!("{notice}");

    let session = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        MenuSession::new(&mut repo, stdin.lock(), stdout.lock()).run()
    };

    match save_snapshot(&repo, &config.data_file) {
        Ok(()) => println!("Data saved successfully."),
        Err(err) => println!("Error saving data: {err}"),
    }
    info!("event=cli_exit module=cli status=ok");

    session.context("interactive session failed")
}

/// Loads the startup repository, falling back to an empty one.
///
/// Returns the repository together with the user-facing load notice.
fn load_repository(data_file: &Path) -> (ProjectRepository, String) {
    match load_snapshot(data_file) {
        Ok(repo) => (repo, "Data loaded successfully.".to_string()),
        Err(err) if err.is_not_found() => (
            ProjectRepository::new(),
            "No previous data found. Starting fresh.".to_string(),
        ),
        Err(err) => {
            warn!(
                "event=cli_load module=cli status=fallback error_code={}",
                err.code()
            );
            (
                ProjectRepository::new(),
                format!("Could not load saved data ({err}). Starting fresh."),
            )
        }
    }
}
