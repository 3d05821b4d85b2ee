//! AppMap agent probing.
//!
//! - [`interpreter`] - Python interpreter resolution on PATH
//! - [`presence`] - the import probe itself
//! - [`version`] - best-effort installed-version lookup
//! - [`report`] - canonical output lines and the serializable report

pub mod interpreter;
pub mod presence;
pub mod report;
pub mod version;

pub use interpreter::{parse_system_path, resolve_interpreter, resolve_tool_path};
pub use presence::{Presence, PresenceProbe, AGENT_MODULE};
pub use report::{PresenceReport, INSTALLED_MESSAGE, MISSING_MESSAGE};
pub use version::agent_version;
