//! replace-samplesheet entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use samplesheet_replace_cli::{Args, CliError, report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Help and usage errors are printed before any logging is set up
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let err = CliError::from(err);
            report(&err);
            process::exit(err.exit_code());
        }
    };

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting replace-samplesheet");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = samplesheet_replace_cli::run(&args) {
        report(&err);
        process::exit(err.exit_code());
    }

    info!("Completed successfully");
}
