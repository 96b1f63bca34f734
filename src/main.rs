mod cli;
mod config;
mod form;
mod model;
mod recruitment;
mod registry;
mod report;
mod storage;
mod telemetry;

use std::process;

use clap::Parser;

use cli::Cli;
use config::{Config, Overrides};
use recruitment::Recruitment;
use storage::Storage;

fn main() {
    let Cli {
        data_dir,
        log_level,
        command,
    } = Cli::parse();

    let config = match Config::load(Overrides {
        data_dir,
        log_level,
    }) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = telemetry::init(&config.log_level) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let storage = match Storage::new(config.data_dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };
    tracing::debug!(root = %storage.root().display(), "using data directory");

    let mut recruitment = match Recruitment::open(storage) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load saved data: {e}");
            process::exit(1);
        }
    };

    let outcome = cli::run(command, &mut recruitment);

    if recruitment.is_stale()
        && let Err(e) = recruitment.flush()
    {
        eprintln!("Warning: changes could not be saved: {e}");
    }

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
