//! Best-effort agent version lookup.
//!
//! When the agent is present, `pip show appmap` reports its metadata; the
//! `Version:` field is extracted for reports and debug logs. Lookup failure
//! is not an error — the version is simply unknown.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::shell::execute_quiet;

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Version:\s*(\S+)").unwrap());

/// Extract the `Version:` field from `pip show` output.
pub fn parse_pip_show(output: &str) -> Option<String> {
    VERSION_LINE
        .captures(output)
        .map(|caps| caps[1].to_string())
}

/// Query the installed agent version via `pip show appmap`.
///
/// Runs under the manager's runner when one is in use, mirroring the
/// import probe, so the queried environment is the probed one.
pub fn agent_version(
    interpreter: &Path,
    runner: Option<&Path>,
    project_root: &Path,
) -> Option<String> {
    let (program, args): (PathBuf, Vec<String>) = match runner {
        Some(runner) => (
            runner.to_path_buf(),
            ["run", "python", "-m", "pip", "show", "appmap"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        None => (
            interpreter.to_path_buf(),
            ["-m", "pip", "show", "appmap"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
    };

    let result = execute_quiet(&program, &args, Some(project_root)).ok()?;
    if !result.success {
        return None;
    }
    parse_pip_show(&result.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_from_pip_show_output() {
        let output = "Name: appmap\nVersion: 2.1.8\nSummary: AppMap recording agent\n";
        assert_eq!(parse_pip_show(output), Some("2.1.8".to_string()));
    }

    #[test]
    fn missing_version_field_is_none() {
        assert_eq!(parse_pip_show("Name: appmap\n"), None);
        assert_eq!(parse_pip_show(""), None);
    }

    #[test]
    fn version_must_start_the_line() {
        // "Metadata-Version: 2.1" must not match
        let output = "Metadata-Version: 2.1\n";
        assert_eq!(parse_pip_show(output), None);
    }

    #[cfg(unix)]
    #[test]
    fn agent_version_reads_fake_pip_output() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(
            &python,
            "#!/bin/sh\necho \"Name: appmap\"\necho \"Version: 1.2.0\"\n",
        )
        .unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let version = agent_version(&python, None, temp.path());
        assert_eq!(version, Some("1.2.0".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn agent_version_is_none_on_failure() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let python = temp.path().join("python3");
        fs::write(&python, "#!/bin/sh\nexit 1\n").unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(agent_version(&python, None, temp.path()), None);
    }
}
