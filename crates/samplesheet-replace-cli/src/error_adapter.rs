//! Error adapter for converting ReplaceError to miette diagnostics.
//!
//! This module provides the bridge between the library's plain error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error as StdError, fmt};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler};

use samplesheet_replace::ReplaceError;

/// Adapter giving a [`ReplaceError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a ReplaceError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ReplaceError::NotASampleSheet { .. } => "replace::not_a_sample_sheet",
            ReplaceError::InputNotFound { .. } => "replace::input_not_found",
            ReplaceError::OpenInput { .. } => "replace::io::open_input",
            ReplaceError::OpenOutput { .. } => "replace::io::open_output",
            ReplaceError::Copy { .. } => "replace::io::copy",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            ReplaceError::NotASampleSheet { path, marker } => format!(
                "the output path must contain \"{marker}\", got \"{}\"",
                path.display()
            ),
            ReplaceError::InputNotFound { path } => {
                format!("no file exists at \"{}\"", path.display())
            }
            ReplaceError::OpenOutput { .. } => {
                "check that the sample sheet's directory exists".to_string()
            }
            ReplaceError::OpenInput { .. } | ReplaceError::Copy { .. } => return None,
        };
        Some(Box::new(help))
    }
}

/// Render `err` as a graphical miette report.
pub fn render(err: &ReplaceError) -> String {
    let reporter = GraphicalReportHandler::new().with_width(120);
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, &ErrorAdapter(err))
        .expect("Writing to String buffer is infallible");
    writer
}
