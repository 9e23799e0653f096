//! Program options.

use std::path::{Path, PathBuf};

/// Source and destination of a replacement, as given on the command line.
///
/// Both paths default to empty. Nothing is checked here; see
/// [`crate::guard`] for the checks applied before a copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramOptions {
    input: PathBuf,
    output: PathBuf,
}

impl ProgramOptions {
    /// Creates options copying `input` over `output`.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Returns the path the bytes are read from.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the path that is created or truncated and written.
    pub fn output(&self) -> &Path {
        &self.output
    }
}
