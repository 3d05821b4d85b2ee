//! Output verbosity mode.

/// Output verbosity mode.
///
/// The check's result line is part of the program contract and is printed in
/// every mode; the mode only governs supplementary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show hints and supplementary detail in addition to the result.
    Verbose,
    /// Show the result and any warnings.
    #[default]
    Normal,
    /// Show the result only (no spinners).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows hints and supplementary detail.
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
