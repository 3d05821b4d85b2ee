//! Project environment detection.

pub mod package_manager;

pub use package_manager::{detect, resolve, ManagerResolution, PackageManager};
