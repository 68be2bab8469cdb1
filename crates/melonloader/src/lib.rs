//! MelonLoader installation for the Ace Attorney Trilogy.
//!
//! Downloads the pinned MelonLoader release archive, extracts it into the
//! game directory, and verifies the result. The downloaded archive is a
//! temporary file that is removed on every exit path.
//!
//! # Pipeline
//!
//! 1. **Download**: stream the release zip into a temporary file
//! 2. **Extract**: unpack every file entry over the game directory
//! 3. **Verify**: check the proxy DLL and the `MelonLoader` folder exist

pub mod download;
pub mod error;
pub mod extract;
pub mod installer;
pub mod types;

// Re-export primary types for convenience.
pub use error::InstallError;
pub use installer::{Installer, InstallerOptions, is_installed};
pub use types::InstallEvent;

/// Pinned MelonLoader release.
pub const MELONLOADER_VERSION: &str = "0.7.1";

/// Release archive for the 32-bit game build.
pub const DOWNLOAD_URL: &str =
    "https://github.com/LavaGang/MelonLoader/releases/download/v0.7.1/MelonLoader.x86.zip";

/// Release page users can install from by hand.
pub const RELEASE_PAGE_URL: &str = "https://github.com/LavaGang/MelonLoader/releases/tag/v0.7.1";

/// User-Agent sent with the download request.
pub const USER_AGENT: &str = "PWAATAccessibilityInstaller/1.0";

/// Proxy DLL MelonLoader drops next to the game executable.
pub const PROXY_DLL: &str = "version.dll";

/// Folder holding the MelonLoader runtime.
pub const MELONLOADER_DIR: &str = "MelonLoader";
