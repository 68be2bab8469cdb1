use std::path::PathBuf;

/// Steam's install directory when the installer defaults are kept.
const DEFAULT_STEAM_DIR: &str = r"C:\Program Files (x86)\Steam";

/// Returns the Steam base directory on Windows without consulting the registry.
pub(crate) fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STEAM_DIR)
}
