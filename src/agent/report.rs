//! Presence report and canonical output lines.

use serde::Serialize;
use std::path::PathBuf;

use super::presence::Presence;

/// Line printed when the agent import succeeds.
pub const INSTALLED_MESSAGE: &str = "AppMap is successfully installed.";

/// Line printed when the agent import fails.
pub const MISSING_MESSAGE: &str =
    "The `appmap` module was not found. Please use your dependency management tool to install it.";

/// The outcome of one presence check, in reportable form.
///
/// Discarded when the process exits; nothing is persisted between runs.
#[derive(Debug, Clone, Serialize)]
pub struct PresenceReport {
    /// Whether the agent module could be loaded.
    pub installed: bool,
    /// The canonical human-readable result line.
    pub message: &'static str,
    /// The interpreter the probe resolved.
    pub interpreter: PathBuf,
    /// The detected package manager ("poetry", "uv", or "pip").
    pub package_manager: &'static str,
    /// Installed agent version, when `pip show` could report one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PresenceReport {
    /// Build a report from a probe outcome.
    pub fn new(
        presence: Presence,
        interpreter: PathBuf,
        package_manager: &'static str,
        version: Option<String>,
    ) -> Self {
        let installed = presence.is_installed();
        Self {
            installed,
            message: if installed {
                INSTALLED_MESSAGE
            } else {
                MISSING_MESSAGE
            },
            interpreter,
            package_manager,
            version,
        }
    }

    /// Process exit code for this outcome: 0 present, 1 missing.
    pub fn exit_code(&self) -> i32 {
        if self.installed {
            0
        } else {
            1
        }
    }

    /// Serialize to a single JSON line.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::error::AppmapCheckError::Other(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed_report() -> PresenceReport {
        PresenceReport::new(
            Presence::Installed,
            PathBuf::from("/usr/bin/python3"),
            "pip",
            Some("2.1.8".to_string()),
        )
    }

    fn missing_report() -> PresenceReport {
        PresenceReport::new(
            Presence::Missing,
            PathBuf::from("/usr/bin/python3"),
            "poetry",
            None,
        )
    }

    #[test]
    fn installed_report_uses_success_line_and_exit_zero() {
        let report = installed_report();
        assert!(report.installed);
        assert_eq!(report.message, INSTALLED_MESSAGE);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn missing_report_uses_remediation_line_and_exit_one() {
        let report = missing_report();
        assert!(!report.installed);
        assert_eq!(report.message, MISSING_MESSAGE);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn canonical_lines_are_stable() {
        assert_eq!(INSTALLED_MESSAGE, "AppMap is successfully installed.");
        assert_eq!(
            MISSING_MESSAGE,
            "The `appmap` module was not found. Please use your dependency management tool to install it."
        );
    }

    #[test]
    fn json_includes_outcome_fields() {
        let json = installed_report().to_json().unwrap();
        assert!(json.contains("\"installed\":true"));
        assert!(json.contains("AppMap is successfully installed."));
        assert!(json.contains("\"package_manager\":\"pip\""));
        assert!(json.contains("\"version\":\"2.1.8\""));
    }

    #[test]
    fn json_omits_unknown_version() {
        let json = missing_report().to_json().unwrap();
        assert!(json.contains("\"installed\":false"));
        assert!(!json.contains("version"));
    }

    #[test]
    fn json_is_a_single_line() {
        let json = installed_report().to_json().unwrap();
        assert!(!json.contains('\n'));
    }
}
