//! Errors surfaced by the command-line tool.

use clap::error::ErrorKind as ClapErrorKind;
use thiserror::Error;

use samplesheet_replace::ReplaceError;

/// Everything that ends a run early.
///
/// Help and version requests travel through [`CliError::Usage`] as well,
/// since that is how clap reports them; [`CliError::exit_code`] maps them to
/// success.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Replace(#[from] ReplaceError),
}

impl CliError {
    /// Returns `true` for help and version requests.
    pub fn is_informational(&self) -> bool {
        match self {
            Self::Usage(err) => matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ),
            Self::Replace(_) => false,
        }
    }

    /// Returns the process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_informational() { 0 } else { 1 }
    }
}
