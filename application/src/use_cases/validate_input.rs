//! Input validation use case
//!
//! Two checks, run at different points of the launch pipeline:
//!
//! - [`InputValidator::validate_arguments`]: argument combinations (no I/O)
//! - [`InputValidator::check_input_data`]: the selected directory exists and
//!   holds at least one file with the required extension

use crate::ports::input_scanner::{InputScanner, ScanError};
use crate::ports::reporter::Reporter;
use fixcore_domain::{ConfigurationError, InputDataError, InputSource, LaunchArgs, LaunchRequest};
use std::sync::Arc;
use tracing::{debug, info};

/// Validates launch arguments and input directories
pub struct InputValidator {
    scanner: Arc<dyn InputScanner>,
}

impl InputValidator {
    pub fn new(scanner: Arc<dyn InputScanner>) -> Self {
        Self { scanner }
    }

    /// Apply the argument-combination rules; the first violation is returned
    pub fn validate_arguments(
        &self,
        args: LaunchArgs,
        reporter: &dyn Reporter,
    ) -> Result<LaunchRequest, ConfigurationError> {
        reporter.info("Checking input arguments...");
        let request = args.validate()?;
        debug!(
            "Arguments accepted: {} input at {}",
            request.input().role(),
            request.input().path().display()
        );
        Ok(request)
    }

    /// Require the selected directory to contain files ending in `extension`
    ///
    /// Returns the number of matching files.
    pub fn check_input_data(
        &self,
        source: &InputSource,
        extension: &str,
        reporter: &dyn Reporter,
    ) -> Result<usize, InputDataError> {
        let path = source.path();
        let files = self
            .scanner
            .matching_files(path, extension)
            .map_err(|e| match e {
                ScanError::NotADirectory => InputDataError::DirectoryNotFound {
                    path: path.to_path_buf(),
                },
                ScanError::Io(reason) => InputDataError::Unreadable {
                    path: path.to_path_buf(),
                    reason,
                },
            })?;

        if files.is_empty() {
            return Err(InputDataError::NoMatchingFiles {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            });
        }

        info!(
            "Found {} '{}' files in {}",
            files.len(),
            extension,
            path.display()
        );
        reporter.success(&format!(
            "Found {} {} file(s) in {} directory '{}'",
            files.len(),
            extension,
            source.role(),
            path.display()
        ));
        Ok(files.len())
    }
}
