//! Pipeline error types and context helpers.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pipeline stage failures.
///
/// Per-file problems (missing sources, invalid config JSON) are deliberately
/// *not* represented here; stages convert those into warnings and continue.
/// This type covers the failures that stop a stage outright.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors without additional context
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// IO errors with the failing action and path attached
    #[error("{action} ({path}): {source}")]
    FsError {
        /// What the pipeline was doing
        action: String,
        /// Path the operation failed on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Archive creation errors
    #[error("archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Documentation template rendering errors
    #[error("template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Generic errors
    #[error("{0}")]
    GenericError(String),
}

/// Extension trait attaching filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::FsError`] with the action and path.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::FsError {
            action: action.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait attaching a message when converting to [`Error::GenericError`].
pub trait Context<T> {
    /// Replaces `None`/`Err` with a generic error carrying `msg`.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Early-return with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::pipeline::Error::GenericError(format!($($arg)*)).into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_carries_action_and_path() {
        let err: Result<()> = Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
            .fs_context("reading config", Path::new("config/visuals.json"));
        let message = err.unwrap_err().to_string();
        assert!(message.contains("reading config"));
        assert!(message.contains("visuals.json"));
    }

    #[test]
    fn option_context_produces_generic_error() {
        let missing: Option<u32> = None;
        let err = missing.context("value is required").unwrap_err();
        assert_eq!(err.to_string(), "value is required");
    }
}
