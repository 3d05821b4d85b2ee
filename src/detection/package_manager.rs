//! Python package-manager detection.
//!
//! The import probe must run inside the environment the project's
//! dependency manager owns, or a package installed there is invisible to
//! the bare interpreter. Detection is by marker files in the project root;
//! shelling out to the managers themselves would make the result depend on
//! whatever happens to be installed on the machine running the check.

use std::path::{Path, PathBuf};

use crate::agent::interpreter::resolve_tool_path;

/// A Python dependency manager the probe knows how to run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Poetry,
    Uv,
    /// Bare interpreter; packages come from pip or the active virtualenv.
    Pip,
}

impl PackageManager {
    /// Manager name as shown in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Poetry => "poetry",
            Self::Uv => "uv",
            Self::Pip => "pip",
        }
    }

    /// Binary that wraps the probe (`<runner> run python …`), if any.
    pub fn runner_binary(&self) -> Option<&'static str> {
        match self {
            Self::Poetry => Some("poetry"),
            Self::Uv => Some("uv"),
            Self::Pip => None,
        }
    }

    /// Install command suggested in verbose output when the agent is missing.
    pub fn install_hint(&self) -> &'static str {
        match self {
            Self::Poetry => "poetry add --group dev appmap",
            Self::Uv => "uv add appmap",
            Self::Pip => "pip install appmap",
        }
    }
}

/// Detect the project's package manager from marker files.
pub fn detect(project_root: &Path) -> PackageManager {
    if project_root.join("poetry.lock").is_file() || pyproject_uses_poetry(project_root) {
        return PackageManager::Poetry;
    }
    if project_root.join("uv.lock").is_file() {
        return PackageManager::Uv;
    }
    PackageManager::Pip
}

/// Check whether pyproject.toml declares a `[tool.poetry]` table.
fn pyproject_uses_poetry(project_root: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(project_root.join("pyproject.toml")) else {
        return false;
    };
    contents.lines().any(|line| line.trim() == "[tool.poetry]")
}

/// A detected manager together with its resolved runner binary.
#[derive(Debug, Clone)]
pub struct ManagerResolution {
    /// The detected manager (detection result, even if its binary is absent).
    pub manager: PackageManager,
    /// Resolved runner binary path; `None` means probe the bare interpreter.
    pub runner: Option<PathBuf>,
    /// Warning to surface when the detected manager's binary is missing.
    pub warning: Option<String>,
}

/// Detect the manager and resolve its runner binary on the given PATH.
///
/// A detected manager whose binary cannot be resolved degrades to a bare
/// interpreter probe with a warning.
pub fn resolve(project_root: &Path, path_entries: &[PathBuf]) -> ManagerResolution {
    let manager = detect(project_root);

    let Some(binary) = manager.runner_binary() else {
        return ManagerResolution {
            manager,
            runner: None,
            warning: None,
        };
    };

    match resolve_tool_path(binary, path_entries) {
        Some(path) => ManagerResolution {
            manager,
            runner: Some(path),
            warning: None,
        },
        None => ManagerResolution {
            manager,
            runner: None,
            warning: Some(format!(
                "{} project detected but `{}` is not on PATH; probing the bare interpreter",
                manager.name(),
                binary
            )),
        },
    }
}
