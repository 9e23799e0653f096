//! Command-line argument definitions for replace-samplesheet.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the source and destination paths and the
//! logging verbosity. Nothing here can change the guard policy.

use std::path::PathBuf;

use clap::Parser;

use samplesheet_replace::ProgramOptions;

/// Command-line arguments for the sample sheet replacement tool
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "replace-samplesheet",
    author,
    version,
    about,
    long_about = "Replaces a sample sheet with the contents of another file. \
                  The output path must contain \"SampleSheet\" and the input file must exist.",
    args_override_self = true
)]
pub struct Args {
    /// File whose contents replace the sample sheet
    #[arg(short, long, value_name = "FROM_FILE_PATH")]
    pub input: Option<PathBuf>,

    /// Sample sheet to overwrite
    #[arg(short, long, value_name = "TO_FILE_PATH")]
    pub output: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// Returns the program options, with unset paths left empty.
    pub fn options(&self) -> ProgramOptions {
        ProgramOptions::new(
            self.input.clone().unwrap_or_default(),
            self.output.clone().unwrap_or_default(),
        )
    }
}
