//! samplesheet-replace - guarded replacement of sequencing run sample sheets.
//!
//! The replacement is meant to run with elevated privilege, so every check
//! happens before any file is opened: first the destination path must look
//! like a sample sheet, then the source must exist. Only then are the two
//! files opened and the source copied byte for byte over the destination.

pub mod config;
pub mod copy;
pub mod guard;

mod error;
mod options;

pub use copy::CopyReport;
pub use error::{ErrorKind, ReplaceError};
pub use guard::ValidatedPaths;
pub use options::ProgramOptions;

use log::info;

use config::GuardConfig;

/// Runs the validate-then-copy pipeline.
///
/// # Examples
///
/// ```rust,no_run
/// use samplesheet_replace::{ProgramOptions, Replacer};
///
/// let options = ProgramOptions::new("/home/me/new.csv", "/runs/230101_A/SampleSheet.csv");
/// let report = Replacer::default()
///     .replace(&options)
///     .expect("Failed to replace sample sheet");
/// println!("wrote {} bytes", report.bytes());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Replacer {
    config: GuardConfig,
}

impl Replacer {
    /// Create a replacer enforcing the given guard configuration.
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Returns the guard configuration in force.
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Run the guard checks without touching any file.
    ///
    /// # Errors
    ///
    /// Returns a validation [`ReplaceError`] if either check fails.
    pub fn validate(&self, options: &ProgramOptions) -> Result<ValidatedPaths, ReplaceError> {
        guard::validate(options, &self.config)
    }

    /// Validate `options` and, if every check passes, copy the source over
    /// the destination.
    ///
    /// # Errors
    ///
    /// Returns a validation [`ReplaceError`] if a check fails, in which case
    /// no file was opened, or an I/O [`ReplaceError`] if the copy failed.
    pub fn replace(&self, options: &ProgramOptions) -> Result<CopyReport, ReplaceError> {
        info!(
            input_path = options.input().display().to_string(),
            output_path = options.output().display().to_string();
            "Replacing sample sheet"
        );

        let paths = self.validate(options)?;
        let report = copy::copy_contents(&paths)?;

        info!(
            output_path = report.output().display().to_string(),
            bytes = report.bytes();
            "Sample sheet replaced"
        );
        Ok(report)
    }
}
