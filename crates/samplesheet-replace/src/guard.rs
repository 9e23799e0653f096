//! Privilege-boundary checks.
//!
//! Every check here runs before any file is opened. The destination check
//! always runs first, so a request failing both checks reports the
//! destination problem.
//!
//! The destination check is a plain substring match on the full path. It
//! does not look at the file name component, the extension, or `..`
//! segments.

use std::{
    io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
#[cfg(unix)]
use nix::{
    errno::Errno,
    unistd::{AccessFlags, access},
};

use crate::{config::GuardConfig, error::ReplaceError, options::ProgramOptions};

/// Paths that have passed every guard check.
///
/// Only [`validate`] constructs this type, and the copy stage accepts
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPaths {
    input: PathBuf,
    output: PathBuf,
}

impl ValidatedPaths {
    pub(crate) fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Returns the validated source path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the validated destination path.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Returns `true` if `path` contains the configured marker.
///
/// Non UTF-8 bytes are replaced before matching; the marker is ASCII in the
/// default configuration, so replacement can neither create nor hide a match.
pub fn looks_like_sample_sheet(path: &Path, config: &GuardConfig) -> bool {
    let marker = config.marker();
    !marker.is_empty() && path.to_string_lossy().contains(marker)
}

/// Checks that the destination path contains the marker.
///
/// # Errors
///
/// Returns [`ReplaceError::NotASampleSheet`] if the marker is absent.
pub fn validate_destination(path: &Path, config: &GuardConfig) -> Result<(), ReplaceError> {
    if looks_like_sample_sheet(path, config) {
        return Ok(());
    }

    warn!(
        output_path = path.display().to_string(),
        marker = config.marker();
        "Refusing to replace a file that is not a sample sheet"
    );
    Err(ReplaceError::NotASampleSheet {
        path: path.to_path_buf(),
        marker: config.marker().to_string(),
    })
}

/// Checks that the source path exists for the invoking user.
///
/// On Unix the check is `access(2)` with `F_OK`, which resolves the path
/// with the real uid and gid. Under a setuid install the invoking user must
/// be able to reach the source themselves; the elevated effective uid does
/// not help. Only existence is checked, not readability. A path whose
/// existence cannot be determined, for example because a parent directory
/// is not searchable by the invoking user, counts as missing.
///
/// # Errors
///
/// Returns [`ReplaceError::InputNotFound`] if the path does not exist.
pub fn validate_source(path: &Path) -> Result<(), ReplaceError> {
    match source_exists(path) {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!(input_path = path.display().to_string(); "Input file not found");
            Err(ReplaceError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => {
            warn!(
                input_path = path.display().to_string(),
                err:% = err;
                "Could not determine whether input file exists"
            );
            Err(ReplaceError::InputNotFound {
                path: path.to_path_buf(),
            })
        }
    }
}

#[cfg(unix)]
fn source_exists(path: &Path) -> Result<bool, io::Error> {
    match access(path, AccessFlags::F_OK) {
        Ok(()) => Ok(true),
        Err(Errno::ENOENT | Errno::ENOTDIR) => Ok(false),
        Err(errno) => Err(io::Error::from(errno)),
    }
}

#[cfg(not(unix))]
fn source_exists(path: &Path) -> Result<bool, io::Error> {
    path.try_exists()
}

/// Runs every guard check against `options`.
///
/// # Errors
///
/// Returns the first failing check's error, destination check first.
pub fn validate(
    options: &ProgramOptions,
    config: &GuardConfig,
) -> Result<ValidatedPaths, ReplaceError> {
    validate_destination(options.output(), config)?;
    validate_source(options.input())?;

    debug!(
        input_path = options.input().display().to_string(),
        output_path = options.output().display().to_string();
        "Guard checks passed"
    );
    Ok(ValidatedPaths::new(options.input(), options.output()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use proptest::prelude::*;
    use tempfile::tempdir;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_marker_anywhere_in_path_is_accepted() {
        let config = GuardConfig::default();

        for path in [
            "/tmp/SampleSheet.csv",
            "SampleSheet",
            "/runs/SampleSheet_backup/notes.txt",
            "/runs/200101_SampleSheetV2.csv",
            "../../SampleSheet/../../etc/passwd",
        ] {
            assert!(
                validate_destination(Path::new(path), &config).is_ok(),
                "{path} should pass"
            );
        }
    }

    #[test]
    fn test_marker_match_is_case_sensitive() {
        let config = GuardConfig::default();

        for path in [
            "/tmp/samplesheet.csv",
            "/tmp/SAMPLESHEET.csv",
            "/tmp/Sample_Sheet.csv",
            "/tmp/Other.csv",
            "",
        ] {
            let err = validate_destination(Path::new(path), &config).unwrap_err();
            assert!(
                matches!(err, ReplaceError::NotASampleSheet { .. }),
                "{path} should be refused"
            );
        }
    }

    #[test]
    fn test_empty_marker_refuses_everything() {
        let config = GuardConfig::new("");
        assert!(!looks_like_sample_sheet(
            Path::new("/tmp/SampleSheet.csv"),
            &config
        ));
    }

    #[test]
    fn test_custom_marker() {
        let config = GuardConfig::new("RunInfo");
        assert!(looks_like_sample_sheet(Path::new("/x/RunInfo.xml"), &config));
        assert!(!looks_like_sample_sheet(
            Path::new("/x/SampleSheet.csv"),
            &config
        ));
    }

    #[test]
    fn test_missing_source_is_refused() {
        let dir = tempdir().unwrap();
        let err = validate_source(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, ReplaceError::InputNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::Validation);

        assert!(validate_source(Path::new("")).is_err());
    }

    #[test]
    fn test_existing_source_is_accepted() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("in.csv");
        fs::write(&source, b"A,B,C\n").unwrap();

        assert!(validate_source(&source).is_ok());
        // Directories exist too; the copy stage reports them later.
        assert!(validate_source(dir.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_source_check_uses_real_uid_access() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let existing = dir.path().join("in.csv");
        fs::write(&existing, b"A,B,C\n").unwrap();
        let missing = dir.path().join("absent.csv");

        let locked_dir = dir.path().join("locked");
        fs::create_dir(&locked_dir).unwrap();
        let hidden = locked_dir.join("secret.csv");
        fs::write(&hidden, b"root-only\n").unwrap();
        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o000)).unwrap();

        for path in [&existing, &missing, &hidden] {
            let reachable = access(path.as_path(), AccessFlags::F_OK).is_ok();
            assert_eq!(
                validate_source(path).is_ok(),
                reachable,
                "{} should agree with access(F_OK)",
                path.display()
            );
        }

        assert!(validate_source(&existing).is_ok());
        assert!(validate_source(&missing).is_err());
        // Root bypasses directory permissions, so only an unprivileged
        // real uid is refused here.
        if !nix::unistd::getuid().is_root() {
            let err = validate_source(&hidden).unwrap_err();
            assert!(matches!(err, ReplaceError::InputNotFound { .. }));
        }

        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_destination_checked_before_source() {
        let options = ProgramOptions::new("/definitely/not/here", "/tmp/Other.csv");
        let err = validate(&options, &GuardConfig::default()).unwrap_err();
        assert!(matches!(err, ReplaceError::NotASampleSheet { .. }));
    }

    #[test]
    fn test_validate_returns_both_paths() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("in.csv");
        let dest = dir.path().join("SampleSheet.csv");
        fs::write(&source, b"").unwrap();

        let options = ProgramOptions::new(&source, &dest);
        let paths = validate(&options, &GuardConfig::default()).unwrap();
        assert_eq!(paths.input(), source.as_path());
        assert_eq!(paths.output(), dest.as_path());
    }

    proptest! {
        #[test]
        fn prop_guard_is_substring_match(prefix in "[a-zA-Z0-9_/.-]{0,20}", suffix in "[a-zA-Z0-9_/.-]{0,20}") {
            let config = GuardConfig::default();
            let with_marker = format!("{prefix}SampleSheet{suffix}");
            prop_assert!(looks_like_sample_sheet(Path::new(&with_marker), &config));

            let without = format!("{prefix}{suffix}");
            prop_assert_eq!(
                looks_like_sample_sheet(Path::new(&without), &config),
                without.contains("SampleSheet")
            );
        }
    }
}
