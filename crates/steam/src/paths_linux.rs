use std::path::PathBuf;

/// Returns the Steam base directory on Linux.
///
/// Picks the first existing native or Flatpak location, falling back to
/// `~/.steam/steam` when none exist yet.
pub(crate) fn default_base_dir() -> PathBuf {
    let home = home_dir();
    let candidates = candidates(&home);

    candidates
        .iter()
        .find(|dir| dir.exists())
        .unwrap_or(&candidates[0])
        .clone()
}

fn candidates(home: &std::path::Path) -> [PathBuf; 3] {
    [
        // Primary location: ~/.steam/steam
        home.join(".steam").join("steam"),
        // Fallback: ~/.local/share/Steam
        home.join(".local").join("share").join("Steam"),
        // Flatpak location
        home.join(".var")
            .join("app")
            .join("com.valvesoftware.Steam")
            .join(".steam")
            .join("steam"),
    ]
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}
