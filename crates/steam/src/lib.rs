//! Steam integration for the PWAAT installer.
//!
//! Finds a Steam game's installation directory by probing the default
//! Steam root, the Steam install path recorded in the registry, and every
//! extra library declared in `libraryfolders.vdf`.

pub mod locator;
pub mod paths;
#[cfg(target_os = "linux")]
mod paths_linux;
#[cfg(target_os = "windows")]
mod paths_windows;
pub mod registry;
pub mod vdf;

// Re-export primary types.
pub use locator::{GameLocator, GameSpec, validate_game_path};
pub use paths::{Paths, default_steam_root};
pub use registry::{NoRegistry, Registry, SystemRegistry, steam_root_from_registry};
#[cfg(target_os = "windows")]
pub use registry::WindowsRegistry;
pub use vdf::{load_library_folders, parse_library_folders};

/// Errors for Steam operations.
#[derive(Debug, thiserror::Error)]
pub enum SteamError {
    #[error("I/O error: {0}")]
    Io(String),
}
