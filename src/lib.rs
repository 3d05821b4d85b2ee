//! appmap-check - AppMap agent installation diagnostics.
//!
//! appmap-check verifies that the AppMap agent (the `appmap` Python
//! package) can be imported from a project's Python environment, and
//! reports the outcome on stdout and via the exit status: 0 when the agent
//! is present, 1 when it is missing.
//!
//! # Modules
//!
//! - [`agent`] - Interpreter resolution, the import probe, version lookup
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Python package-manager detection (poetry, uv, pip)
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Child-process execution
//! - [`ui`] - Terminal output, output modes, spinner
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use appmap_check::agent::{parse_system_path, resolve_interpreter, PresenceProbe};
//!
//! let path_entries = parse_system_path();
//! let interpreter = resolve_interpreter(&path_entries, None)?;
//! let probe = PresenceProbe::new(&interpreter, None, Path::new("."));
//! let presence = probe.run()?;
//! println!("installed: {}", presence.is_installed());
//! # Ok::<(), appmap_check::AppmapCheckError>(())
//! ```

pub mod agent;
pub mod cli;
pub mod detection;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{AppmapCheckError, Result};
