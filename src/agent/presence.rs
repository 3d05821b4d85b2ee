//! The import probe.
//!
//! A single synchronous attempt to load the `appmap` module by its
//! well-known identifier: spawn the interpreter with `-c "import appmap"`
//! and branch on the exit status. Exactly two outcomes; no retries, no
//! timeouts, no partial states.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{execute, CommandOptions};

/// The module identifier being probed.
pub const AGENT_MODULE: &str = "appmap";

/// Whether the agent module could be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The import succeeded. Loading the module may have caused the agent
    /// to write its default `appmap.yml` into the project root; that file
    /// belongs to the agent and is not inspected here.
    Installed,
    /// The import failed.
    Missing,
}

impl Presence {
    /// Whether the agent was found.
    pub fn is_installed(&self) -> bool {
        matches!(self, Presence::Installed)
    }
}

/// A configured probe for the agent module.
#[derive(Debug, Clone)]
pub struct PresenceProbe {
    interpreter: PathBuf,
    runner: Option<PathBuf>,
    project_root: PathBuf,
}

impl PresenceProbe {
    /// Create a probe.
    ///
    /// With a `runner` (poetry/uv binary), the import is executed inside
    /// the manager's environment via `<runner> run python …`; otherwise the
    /// resolved interpreter is invoked directly.
    pub fn new(interpreter: &Path, runner: Option<&Path>, project_root: &Path) -> Self {
        Self {
            interpreter: interpreter.to_path_buf(),
            runner: runner.map(|p| p.to_path_buf()),
            project_root: project_root.to_path_buf(),
        }
    }

    /// The program and argument vector the probe will spawn.
    pub fn argv(&self) -> (PathBuf, Vec<String>) {
        let snippet = format!("import {}", AGENT_MODULE);
        match &self.runner {
            Some(runner) => (
                runner.clone(),
                vec![
                    "run".to_string(),
                    "python".to_string(),
                    "-c".to_string(),
                    snippet,
                ],
            ),
            None => (self.interpreter.clone(), vec!["-c".to_string(), snippet]),
        }
    }

    /// Run the probe.
    ///
    /// The child runs with the project root as its working directory, so
    /// the agent's config side effect lands where the agent expects it.
    /// `APPMAP_LOG_LEVEL=error` keeps agent log output out of the
    /// diagnostic. Output is captured and discarded; the exit status is
    /// the whole answer.
    pub fn run(&self) -> Result<Presence> {
        let (program, args) = self.argv();

        let mut options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        options
            .env
            .insert("APPMAP_LOG_LEVEL".to_string(), "error".to_string());

        let result = execute(&program, &args, &options)?;
        tracing::debug!(
            "import probe exited with {:?} in {:?}",
            result.exit_code,
            result.duration
        );

        if result.success {
            Ok(Presence::Installed)
        } else {
            Ok(Presence::Missing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn fake_interpreter(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\nexit {}\n", exit_code)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn bare_argv_invokes_interpreter_directly() {
        let probe = PresenceProbe::new(
            Path::new("/usr/bin/python3"),
            None,
            Path::new("/tmp/project"),
        );
        let (program, args) = probe.argv();
        assert_eq!(program, PathBuf::from("/usr/bin/python3"));
        assert_eq!(args, vec!["-c", "import appmap"]);
    }

    #[test]
    fn runner_argv_wraps_the_probe() {
        let probe = PresenceProbe::new(
            Path::new("/usr/bin/python3"),
            Some(Path::new("/usr/local/bin/poetry")),
            Path::new("/tmp/project"),
        );
        let (program, args) = probe.argv();
        assert_eq!(program, PathBuf::from("/usr/local/bin/poetry"));
        assert_eq!(args, vec!["run", "python", "-c", "import appmap"]);
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_installed() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(temp.path(), "python3", 0);

        let probe = PresenceProbe::new(&python, None, temp.path());
        assert_eq!(probe.run().unwrap(), Presence::Installed);
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_missing() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(temp.path(), "python3", 1);

        let probe = PresenceProbe::new(&python, None, temp.path());
        assert_eq!(probe.run().unwrap(), Presence::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn probe_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(temp.path(), "python3", 1);

        let probe = PresenceProbe::new(&python, None, temp.path());
        assert_eq!(probe.run().unwrap(), Presence::Missing);
        assert_eq!(probe.run().unwrap(), Presence::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn runner_failure_is_missing() {
        let temp = TempDir::new().unwrap();
        let python = fake_interpreter(temp.path(), "python3", 0);
        let poetry = fake_interpreter(temp.path(), "poetry", 1);

        let probe = PresenceProbe::new(&python, Some(&poetry), temp.path());
        assert_eq!(probe.run().unwrap(), Presence::Missing);
    }

    #[test]
    fn presence_is_installed() {
        assert!(Presence::Installed.is_installed());
        assert!(!Presence::Missing.is_installed());
    }
}
