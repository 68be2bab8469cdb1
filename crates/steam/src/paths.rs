use std::path::{Path, PathBuf};

/// Provides access to paths inside a Steam root or library folder.
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    /// Creates a new `Paths` instance with a custom base directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the Steam base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the steamapps directory.
    pub fn steamapps_dir(&self) -> PathBuf {
        self.base_dir.join("steamapps")
    }

    /// Returns the directory where Steam installs individual games.
    pub fn common_dir(&self) -> PathBuf {
        self.steamapps_dir().join("common")
    }

    /// Returns the install directory for a game folder name.
    pub fn app_dir(&self, folder_name: &str) -> PathBuf {
        self.common_dir().join(folder_name)
    }

    /// Returns the path to libraryfolders.vdf.
    pub fn library_folders_path(&self) -> PathBuf {
        self.steamapps_dir().join("libraryfolders.vdf")
    }

    /// Returns true if this root has a libraryfolders.vdf file.
    pub fn has_library_folders(&self) -> bool {
        self.library_folders_path().is_file()
    }
}

/// Returns the conventional Steam install directory for this platform.
///
/// This is where Steam lands without user customisation; it is not checked
/// for existence beyond what the platform probe does.
#[cfg(target_os = "windows")]
pub fn default_steam_root() -> PathBuf {
    crate::paths_windows::default_base_dir()
}

#[cfg(target_os = "linux")]
pub fn default_steam_root() -> PathBuf {
    crate::paths_linux::default_base_dir()
}

#[cfg(not(any(target_os = "linux", target_os = "windows")))]
pub fn default_steam_root() -> PathBuf {
    PathBuf::from("/Applications/Steam")
}
