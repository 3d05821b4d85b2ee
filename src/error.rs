//! Error types for appmap-check operations.
//!
//! This module defines [`AppmapCheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing `appmap` module is NOT an error: it is the normal
//!   [`Presence::Missing`](crate::agent::Presence) outcome of the check.
//! - Use `AppmapCheckError` for conditions that prevent the check from
//!   running at all (no interpreter, spawn failure)
//! - Use `anyhow::Error` (via `AppmapCheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for appmap-check operations.
#[derive(Debug, Error)]
pub enum AppmapCheckError {
    /// No usable Python interpreter could be resolved.
    #[error("No Python interpreter found (tried: {tried}). Install Python or pass --python <PATH>.")]
    InterpreterNotFound { tried: String },

    /// A child process could not be spawned or waited on.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The probed project root does not exist.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for appmap-check operations.
pub type Result<T> = std::result::Result<T, AppmapCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_not_found_displays_candidates() {
        let err = AppmapCheckError::InterpreterNotFound {
            tried: "python3, python".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3, python"));
        assert!(msg.contains("--python"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = AppmapCheckError::CommandFailed {
            command: "poetry run python".into(),
            code: Some(127),
        };
        let msg = err.to_string();
        assert!(msg.contains("poetry run python"));
        assert!(msg.contains("127"));
    }

    #[test]
    fn project_root_not_found_displays_path() {
        let err = AppmapCheckError::ProjectRootNotFound {
            path: PathBuf::from("/missing/project"),
        };
        assert!(err.to_string().contains("/missing/project"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AppmapCheckError = io_err.into();
        assert!(matches!(err, AppmapCheckError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(AppmapCheckError::InterpreterNotFound {
                tried: "python3".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
