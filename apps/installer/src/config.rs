//! Installer configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/pwaat-installer/installer.toml`
//! - Windows: `%APPDATA%/pwaat-installer/installer.toml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use pwaat_melonloader::DOWNLOAD_URL;
use serde::{Deserialize, Serialize};

/// Installer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Game directory to use instead of searching Steam.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_path: Option<String>,

    /// Steam root to try before the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_path: Option<String>,

    /// MelonLoader release archive URL.
    #[serde(default = "default_download_url")]
    pub download_url: String,

    /// Download timeout in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// Reinstall even when MelonLoader is already present.
    #[serde(default)]
    pub force_reinstall: bool,
}

fn default_download_url() -> String {
    DOWNLOAD_URL.into()
}

fn default_download_timeout() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_path: None,
            steam_path: None,
            download_url: default_download_url(),
            download_timeout_secs: default_download_timeout(),
            force_reinstall: false,
        }
    }
}

impl Config {
    /// Loads configuration from disk, or creates a default if not found.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Loads configuration from `path`, writing defaults there if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        // Restrict permissions on Unix.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Returns the configured game directory, if any.
    pub fn game_dir(&self) -> Option<PathBuf> {
        non_empty(self.game_path.as_deref()).map(expand_home)
    }

    /// Returns the configured Steam root, if any.
    pub fn steam_root(&self) -> Option<PathBuf> {
        non_empty(self.steam_path.as_deref()).map(expand_home)
    }

    /// Returns the download timeout.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Expands `~` prefix to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Returns the platform-specific configuration file path.
pub(crate) fn config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata)
            .join("pwaat-installer")
            .join("installer.toml")
    }

    #[cfg(not(target_os = "windows"))]
    {
        home_dir()
            .join(".config")
            .join("pwaat-installer")
            .join("installer.toml")
    }
}
