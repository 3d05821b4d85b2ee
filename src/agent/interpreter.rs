//! Python interpreter resolution.
//!
//! The probe needs an interpreter before it can attempt the import. Lookup
//! walks the PATH directories directly rather than calling `which` —
//! `which` behavior varies across systems and is sometimes a shell builtin
//! with inconsistent error handling.

use std::path::{Path, PathBuf};

use crate::error::{AppmapCheckError, Result};

/// Interpreter names tried in order.
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve the Python interpreter to probe with.
///
/// An explicit override wins; otherwise `python3` then `python` is looked
/// up on the given PATH entries. Failure to resolve is a distinct error,
/// not a "dependency missing" outcome — without an interpreter the check
/// itself cannot run.
pub fn resolve_interpreter(
    path_entries: &[PathBuf],
    override_path: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() && is_executable(path) {
            return Ok(path.to_path_buf());
        }
        return Err(AppmapCheckError::InterpreterNotFound {
            tried: path.display().to_string(),
        });
    }

    for candidate in INTERPRETER_CANDIDATES {
        if let Some(path) = resolve_tool_path(candidate, path_entries) {
            tracing::debug!("resolved interpreter {} at {}", candidate, path.display());
            return Ok(path);
        }
    }

    Err(AppmapCheckError::InterpreterNotFound {
        tried: INTERPRETER_CANDIDATES.join(", "),
    })
}
