//! CLI interface for recruit.
//!
//! Each subcommand is non-interactive: arguments in, output out. Listings
//! go to stdout (text, or JSON with `--json`); confirmations and warnings
//! go to stderr.
//!
//! Commands split into three groups:
//!
//! - `recruit vacancy add|list|show|close|reopen`: job openings.
//! - `recruit hire full-time|part-time`: claim an open vacancy.
//! - `recruit staff list|terminate|set-salary|set-shifts`: staff records.

mod format;
mod hire;
mod staff;
mod vacancy;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::recruitment::{Committed, Recruitment};
use crate::storage::Gateway;

use hire::HireCommand;
use staff::StaffCommand;
use vacancy::VacancyCommand;

/// Recruit: track vacancies and the staff hired into them.
#[derive(Debug, Parser)]
#[command(name = "recruit", version, after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Directory holding the data files.
    /// Overrides `RECRUIT_DATA_DIR` and `data-dir` in the config file.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log filter, e.g. `info` or `recruit=debug`.
    /// Overrides `RECRUIT_LOG_LEVEL` and `log-level` in the config file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: filling a part-time vacancy
  1. recruit vacancy add 55 --designation Barista --job-type Temporary
  2. recruit hire part-time --vacancy 55 --staff-name "Sam Rai" \
       --joining-date 01/02/2025 --qualification "+2" --appointed-by Manager \
       --working-hours 4 --wages-per-hour 12.5 --shifts morning --joined
     (designation and job type are filled in from vacancy 55)
  3. recruit staff list --active
  4. recruit staff terminate 55

Listings:
  recruit vacancy list
  recruit staff list --terminated
  recruit staff list --json"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage vacancies: add, list, look up, close, reopen.
    Vacancy {
        #[command(subcommand)]
        command: VacancyCommand,
    },

    /// Hire staff into an open vacancy. Closes the vacancy.
    Hire {
        #[command(subcommand)]
        command: HireCommand,
    },

    /// List and manage staff records.
    Staff {
        #[command(subcommand)]
        command: StaffCommand,
    },
}

/// Run a parsed command, returning an error message on failure.
pub fn run<G: Gateway>(command: Command, recruitment: &mut Recruitment<G>) -> Result<(), String> {
    match command {
        Command::Vacancy { command } => vacancy::run(command, recruitment),
        Command::Hire { command } => hire::run(command, recruitment),
        Command::Staff { command } => staff::run(command, recruitment),
    }
}

/// Warn on stderr when a mutation stayed in memory only.
fn warn_unsaved<T>(committed: &Committed<T>) {
    if let Some(e) = committed.save_error() {
        eprintln!("Warning: change not saved to disk: {e}");
    }
}

/// Print a listing as pretty JSON on stdout.
fn print_json<T: Serialize>(views: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(views)
        .map_err(|e| format!("failed to serialize listing: {e}"))?;
    println!("{json}");
    Ok(())
}
