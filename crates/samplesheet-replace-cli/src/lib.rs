//! CLI logic for the sample sheet replacement tool.
//!
//! This module contains the core CLI logic behind the `replace-samplesheet`
//! binary. The binary is expected to be installed setuid, so it takes no
//! configuration beyond its arguments.

pub mod error_adapter;

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use clap::error::ErrorKind as ClapErrorKind;
use log::info;

use samplesheet_replace::{CopyReport, Replacer};

/// Run the replacement described by `args`
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError::Replace` for:
/// - An output path that does not look like a sample sheet
/// - A missing input file
/// - Failure to open, read or write either file
pub fn run(args: &Args) -> Result<CopyReport, CliError> {
    let options = args.options();
    let report = Replacer::default().replace(&options)?;

    info!(bytes = report.bytes(); "Replacement finished");

    Ok(report)
}

/// Print `err` where the caller expects it.
///
/// Version output goes to standard output; help, usage errors and
/// replacement failures go to standard error.
pub fn report(err: &CliError) {
    match err {
        CliError::Usage(err) if err.kind() == ClapErrorKind::DisplayVersion => {
            print!("{}", err.render());
        }
        CliError::Usage(err) => eprint!("{}", err.render()),
        CliError::Replace(err) => eprint!("{}", error_adapter::render(err)),
    }
}
