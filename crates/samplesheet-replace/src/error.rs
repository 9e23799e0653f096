//! Error types for sample sheet replacement.
//!
//! This module provides the main error type [`ReplaceError`]. Every failure
//! is terminal: there is no retry or recovery path anywhere in the pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Broad classification of a [`ReplaceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A guard check refused the request before any file was opened.
    Validation,
    /// Opening, reading or writing a file failed after validation passed.
    Io,
}

/// The main error type for sample sheet replacement.
#[derive(Debug, Error)]
pub enum ReplaceError {
    #[error("sorry - output filename does not look a sample sheet, will not replace")]
    NotASampleSheet { path: PathBuf, marker: String },

    #[error("input file not found")]
    InputNotFound { path: PathBuf },

    #[error("failed to open input file {}", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open output file {}", path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReplaceError {
    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotASampleSheet { .. } | Self::InputNotFound { .. } => ErrorKind::Validation,
            Self::OpenInput { .. } | Self::OpenOutput { .. } | Self::Copy { .. } => ErrorKind::Io,
        }
    }

    /// Returns `true` if the request was refused before any file was touched.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
