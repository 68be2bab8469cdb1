//! Data types for the install flow.

use std::fmt;

/// Progress event emitted during installation.
///
/// Events are informational only; the installer never waits on how they
/// are handled beyond channel capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// The release archive download is starting.
    Downloading { version: &'static str },
    /// The archive is being unpacked into the game directory.
    Extracting,
    /// MelonLoader is installed and verified.
    Completed,
}

impl fmt::Display for InstallEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallEvent::Downloading { version } => write!(f, "Downloading MelonLoader v{version}..."),
            InstallEvent::Extracting => write!(f, "Extracting MelonLoader files..."),
            InstallEvent::Completed => write!(f, "MelonLoader installed successfully."),
        }
    }
}
