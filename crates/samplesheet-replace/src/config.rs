//! Guard configuration.
//!
//! [`GuardConfig`] holds the policy that scopes what the privileged copy is
//! allowed to overwrite. The command-line tool always uses
//! [`GuardConfig::default`]; the marker is never read from user input.
//!
//! # Example
//!
//! ```
//! # use samplesheet_replace::config::GuardConfig;
//! let config = GuardConfig::default();
//! assert_eq!(config.marker(), "SampleSheet");
//! ```

/// Substring a destination path must contain to be replaced.
pub const SAMPLE_SHEET_MARKER: &str = "SampleSheet";

/// Policy applied to destination paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// Literal, case-sensitive substring matched against the full path.
    marker: String,
}

impl GuardConfig {
    /// Creates a new [`GuardConfig`] with the given marker.
    ///
    /// An empty marker matches no path at all, so a guard built from it
    /// refuses every destination.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Returns the marker substring.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new(SAMPLE_SHEET_MARKER)
    }
}
