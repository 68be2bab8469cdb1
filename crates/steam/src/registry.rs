//! Registry lookup of the Steam install directory.
//!
//! Lookups are best-effort: a missing key, a missing value, or an access
//! error all read as "not found".

use std::path::PathBuf;

use tracing::debug;

/// Steam key under the 32-bit compatibility view of `HKEY_LOCAL_MACHINE`.
pub const STEAM_KEY_WOW64: &str = r"SOFTWARE\WOW6432Node\Valve\Steam";

/// Steam key under the native view of `HKEY_LOCAL_MACHINE`.
pub const STEAM_KEY: &str = r"SOFTWARE\Valve\Steam";

/// Value holding the Steam install directory.
pub const INSTALL_PATH_VALUE: &str = "InstallPath";

/// Read-only access to string values in the platform registry.
pub trait Registry {
    /// Returns the string value `value_name` under `key_path`, or `None` on any failure.
    fn read_string(&self, key_path: &str, value_name: &str) -> Option<String>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn read_string(&self, key_path: &str, value_name: &str) -> Option<String> {
        (**self).read_string(key_path, value_name)
    }
}

/// Registry for platforms without one. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistry;

impl Registry for NoRegistry {
    fn read_string(&self, _key_path: &str, _value_name: &str) -> Option<String> {
        None
    }
}

/// `HKEY_LOCAL_MACHINE` backed registry.
#[cfg(target_os = "windows")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsRegistry;

#[cfg(target_os = "windows")]
impl Registry for WindowsRegistry {
    fn read_string(&self, key_path: &str, value_name: &str) -> Option<String> {
        use winreg::RegKey;
        use winreg::enums::HKEY_LOCAL_MACHINE;

        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = match hklm.open_subkey(key_path) {
            Ok(key) => key,
            Err(e) => {
                debug!(key = key_path, error = %e, "registry key not readable");
                return None;
            }
        };
        match key.get_value::<String, _>(value_name) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(
                    key = key_path,
                    value = value_name,
                    error = %e,
                    "registry value not readable"
                );
                None
            }
        }
    }
}

/// Registry implementation for the current platform.
#[cfg(target_os = "windows")]
pub type SystemRegistry = WindowsRegistry;

/// Registry implementation for the current platform.
#[cfg(not(target_os = "windows"))]
pub type SystemRegistry = NoRegistry;

/// Returns the Steam install directory recorded in the registry.
///
/// The 32-bit compatibility key is tried first, then the native key. A value
/// only counts when it is non-empty and names an existing directory.
pub fn steam_root_from_registry<R: Registry + ?Sized>(registry: &R) -> Option<PathBuf> {
    [STEAM_KEY_WOW64, STEAM_KEY].into_iter().find_map(|key| {
        let value = registry.read_string(key, INSTALL_PATH_VALUE)?;
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() || !path.is_dir() {
            debug!(key, path = %path.display(), "ignoring registry install path");
            return None;
        }
        Some(path)
    })
}
