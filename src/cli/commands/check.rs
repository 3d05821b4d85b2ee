//! Check command implementation.
//!
//! The `appmap-check check` command (also the default command) performs the
//! presence check: resolve the project's package manager and a Python
//! interpreter, attempt to import the agent module, and report the outcome.
//!
//! The contract is one result line on stdout and the exit status: 0 when
//! the agent is importable, 1 when it is not. Everything else (warnings,
//! hints, spinner, logs) goes to stderr.

use std::path::{Path, PathBuf};

use crate::agent::{
    agent_version, parse_system_path, resolve_interpreter, Presence, PresenceProbe, PresenceReport,
};
use crate::cli::args::CheckArgs;
use crate::detection;
use crate::error::{AppmapCheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the check against an explicit set of PATH entries.
    fn run_check(
        &self,
        path_entries: &[PathBuf],
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if !self.project_root.is_dir() {
            return Err(AppmapCheckError::ProjectRootNotFound {
                path: self.project_root.clone(),
            });
        }

        let resolution = detection::resolve(&self.project_root, path_entries);
        if let Some(warning) = &resolution.warning {
            ui.warning(warning);
        }
        tracing::debug!("package manager: {}", resolution.manager.name());

        let interpreter = resolve_interpreter(path_entries, self.args.python.as_deref())?;

        let mut spinner = ui.start_spinner("Checking for the AppMap agent...");
        let probe = PresenceProbe::new(
            &interpreter,
            resolution.runner.as_deref(),
            &self.project_root,
        );
        let presence = match probe.run() {
            Ok(presence) => presence,
            Err(e) => {
                spinner.finish_and_clear();
                return Err(e);
            }
        };

        // Version lookup is best-effort and never changes the outcome
        let version = if presence.is_installed() {
            agent_version(&interpreter, resolution.runner.as_deref(), &self.project_root)
        } else {
            None
        };
        spinner.finish_and_clear();

        if let Some(version) = &version {
            tracing::debug!("appmap {} installed", version);
        }

        let report = PresenceReport::new(
            presence,
            interpreter,
            resolution.manager.name(),
            version,
        );

        if self.args.json {
            ui.message(&report.to_json()?);
        } else {
            ui.message(report.message);
            if !report.installed {
                ui.hint(&format!("Try: {}", resolution.manager.install_hint()));
            }
        }

        if matches!(presence, Presence::Installed) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run_check(&parse_system_path(), ui)
    }
}
