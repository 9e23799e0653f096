//! Byte-for-byte copy of a validated source over a validated destination.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use log::{debug, trace};

use crate::{error::ReplaceError, guard::ValidatedPaths};

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    input: PathBuf,
    output: PathBuf,
    bytes: u64,
}

impl CopyReport {
    /// Returns the path that was read.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the path that was written.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the number of bytes written to the destination.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }
}

/// Copies everything `reader` yields into `writer` and flushes it.
///
/// # Errors
///
/// Returns the first read, write or flush error.
pub fn copy_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let bytes = io::copy(reader, writer)?;
    writer.flush()?;
    Ok(bytes)
}

/// Replaces the destination's contents with the source's contents.
///
/// The source is opened first, so a source that cannot be opened leaves
/// the destination untouched. The destination is created if missing and
/// truncated otherwise.
///
/// # Errors
///
/// Returns [`ReplaceError::OpenInput`], [`ReplaceError::OpenOutput`] or
/// [`ReplaceError::Copy`] depending on which step failed.
pub fn copy_contents(paths: &ValidatedPaths) -> Result<CopyReport, ReplaceError> {
    let input = File::open(paths.input()).map_err(|source| ReplaceError::OpenInput {
        path: paths.input().to_path_buf(),
        source,
    })?;
    trace!(input_path = paths.input().display().to_string(); "Opened input");

    let output = File::create(paths.output()).map_err(|source| ReplaceError::OpenOutput {
        path: paths.output().to_path_buf(),
        source,
    })?;
    trace!(output_path = paths.output().display().to_string(); "Opened output");

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let bytes = copy_stream(&mut reader, &mut writer).map_err(|source| ReplaceError::Copy {
        from: paths.input().to_path_buf(),
        to: paths.output().to_path_buf(),
        source,
    })?;

    debug!(bytes; "Copied sample sheet contents");

    Ok(CopyReport {
        input: paths.input().to_path_buf(),
        output: paths.output().to_path_buf(),
        bytes,
    })
}
