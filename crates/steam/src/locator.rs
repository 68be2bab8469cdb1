//! Game installation lookup across Steam roots.
//!
//! Stages run from cheapest to most general and stop at the first hit:
//!
//! 1. the platform default Steam root
//! 2. the Steam root recorded in the registry
//! 3. every library declared in that root's `libraryfolders.vdf`

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::paths::{Paths, default_steam_root};
use crate::registry::{Registry, steam_root_from_registry};
use crate::vdf::load_library_folders;

/// Identifies a Steam game on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSpec {
    /// Folder name under `steamapps/common`.
    pub folder_name: &'static str,
    /// Executable that must sit directly in the game folder.
    pub executable: &'static str,
}

/// Returns true if `path` is an existing directory holding the game's executable.
pub fn validate_game_path(path: &Path, game: &GameSpec) -> bool {
    if path.as_os_str().is_empty() || !path.is_dir() {
        return false;
    }
    path.join(game.executable).is_file()
}

/// A lookup stage: a name for logging and a lazy source of Steam roots.
type Stage<'a> = (&'static str, Box<dyn Fn() -> Vec<PathBuf> + 'a>);

fn stage<'a>(name: &'static str, roots: impl Fn() -> Vec<PathBuf> + 'a) -> Stage<'a> {
    (name, Box::new(roots))
}

/// Finds a game installation by probing Steam roots.
pub struct GameLocator<R> {
    game: GameSpec,
    default_root: PathBuf,
    registry: R,
}

impl<R: Registry> GameLocator<R> {
    /// Creates a locator using the platform default Steam root.
    pub fn new(game: GameSpec, registry: R) -> Self {
        Self::with_default_root(game, registry, default_steam_root())
    }

    /// Creates a locator with a custom default Steam root.
    pub fn with_default_root(game: GameSpec, registry: R, default_root: impl Into<PathBuf>) -> Self {
        Self {
            game,
            default_root: default_root.into(),
            registry,
        }
    }

    /// Returns true if `path` is a valid installation of the game.
    pub fn validate(&self, path: &Path) -> bool {
        validate_game_path(path, &self.game)
    }

    /// Returns the first valid game directory, or `None` if the game is not installed.
    pub fn locate(&self) -> Option<PathBuf> {
        let registry_root = OnceCell::new();
        let steam_root = || {
            registry_root
                .get_or_init(|| steam_root_from_registry(&self.registry))
                .clone()
        };

        let stages = vec![
            stage("default", || vec![self.default_root.clone()]),
            stage("registry", || steam_root().into_iter().collect()),
            stage("library folders", || {
                steam_root()
                    .map(|root| self.library_roots(&root))
                    .unwrap_or_default()
            }),
        ];

        let found = self.first_valid(stages);
        if found.is_none() {
            info!(game = self.game.folder_name, "game installation not found");
        }
        found
    }

    /// Runs stages in order and returns the first game directory that validates.
    fn first_valid(&self, stages: Vec<Stage<'_>>) -> Option<PathBuf> {
        for (name, roots) in stages {
            for root in roots() {
                let candidate = Paths::with_base(root).app_dir(self.game.folder_name);
                if self.validate(&candidate) {
                    info!(stage = name, path = %candidate.display(), "found game installation");
                    return Some(candidate);
                }
                debug!(stage = name, path = %candidate.display(), "candidate rejected");
            }
        }
        None
    }

    /// Returns the library roots declared under a Steam root, or none if unreadable.
    fn library_roots(&self, steam_root: &Path) -> Vec<PathBuf> {
        let paths = Paths::with_base(steam_root);
        if !paths.has_library_folders() {
            debug!(root = %steam_root.display(), "no libraryfolders.vdf");
            return Vec::new();
        }

        match load_library_folders(&paths.library_folders_path()) {
            Ok(roots) => roots.into_iter().map(PathBuf::from).collect(),
            Err(e) => {
                warn!(root = %steam_root.display(), error = %e, "skipping library folders");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::FakeRegistry;
    use crate::registry::{STEAM_KEY, STEAM_KEY_WOW64};
    use std::fs;

    const GAME: GameSpec = GameSpec {
        folder_name: "Phoenix Wright Ace Attorney Trilogy",
        executable: "PWAAT.exe",
    };

    /// Creates `<root>/steamapps/common/<game>/PWAAT.exe` and returns the game dir.
    fn install_game(root: &Path) -> PathBuf {
        let dir = Paths::with_base(root).app_dir(GAME.folder_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(GAME.executable), b"MZ").unwrap();
        dir
    }

    fn write_library_folders(steam_root: &Path, libraries: &[&Path]) {
        let paths = Paths::with_base(steam_root);
        fs::create_dir_all(paths.steamapps_dir()).unwrap();

        let mut vdf = String::from("\"libraryfolders\"\n{\n");
        for (i, lib) in libraries.iter().enumerate() {
            let escaped = lib.to_str().unwrap().replace('\\', "\\\\");
            vdf.push_str(&format!("\t\"{i}\"\n\t{{\n\t\t\"path\"\t\t\"{escaped}\"\n\t}}\n"));
        }
        vdf.push_str("}\n");
        fs::write(paths.library_folders_path(), vdf).unwrap();
    }

    #[test]
    fn validate_requires_executable() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!validate_game_path(tmp.path(), &GAME));

        fs::write(tmp.path().join(GAME.executable), b"MZ").unwrap();
        assert!(validate_game_path(tmp.path(), &GAME));
    }

    #[test]
    fn validate_rejects_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!validate_game_path(&tmp.path().join("nope"), &GAME));
        assert!(!validate_game_path(Path::new(""), &GAME));
    }

    #[test]
    fn validate_rejects_executable_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(GAME.executable)).unwrap();
        assert!(!validate_game_path(tmp.path(), &GAME));
    }

    #[test]
    fn validate_rejects_file_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join(GAME.executable);
        fs::write(&file, b"MZ").unwrap();
        assert!(!validate_game_path(&file, &GAME));
    }

    #[test]
    fn default_root_short_circuits() {
        let default = tempfile::tempdir().unwrap();
        let expected = install_game(default.path());
        let registry = FakeRegistry::default();

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), Some(expected));
        assert!(registry.lookups.borrow().is_empty());
    }

    #[test]
    fn registry_root_used_when_default_missing() {
        let default = tempfile::tempdir().unwrap();
        let steam = tempfile::tempdir().unwrap();
        let expected = install_game(steam.path());
        let registry =
            FakeRegistry::default().with_value(STEAM_KEY_WOW64, steam.path().to_str().unwrap());

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), Some(expected));
    }

    #[test]
    fn library_folders_searched_in_order() {
        let default = tempfile::tempdir().unwrap();
        let steam = tempfile::tempdir().unwrap();
        let empty_lib = tempfile::tempdir().unwrap();
        let first_lib = tempfile::tempdir().unwrap();
        let second_lib = tempfile::tempdir().unwrap();
        let expected = install_game(first_lib.path());
        install_game(second_lib.path());
        write_library_folders(
            steam.path(),
            &[empty_lib.path(), first_lib.path(), second_lib.path()],
        );
        let registry = FakeRegistry::default().with_value(STEAM_KEY, steam.path().to_str().unwrap());

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), Some(expected));
    }

    #[test]
    fn registry_consulted_once() {
        let default = tempfile::tempdir().unwrap();
        let steam = tempfile::tempdir().unwrap();
        let lib = tempfile::tempdir().unwrap();
        let expected = install_game(lib.path());
        write_library_folders(steam.path(), &[lib.path()]);
        let registry =
            FakeRegistry::default().with_value(STEAM_KEY_WOW64, steam.path().to_str().unwrap());

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), Some(expected));
        assert_eq!(registry.lookups.borrow().len(), 1);
    }

    #[test]
    fn not_found_without_registry() {
        let default = tempfile::tempdir().unwrap();
        let registry = FakeRegistry::default();

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), None);
        assert_eq!(
            *registry.lookups.borrow(),
            vec![STEAM_KEY_WOW64.to_string(), STEAM_KEY.to_string()]
        );
    }

    #[test]
    fn not_found_when_libraries_lack_game() {
        let default = tempfile::tempdir().unwrap();
        let steam = tempfile::tempdir().unwrap();
        let lib = tempfile::tempdir().unwrap();
        write_library_folders(steam.path(), &[lib.path()]);
        let registry = FakeRegistry::default().with_value(STEAM_KEY, steam.path().to_str().unwrap());

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), None);
    }

    #[test]
    fn unreadable_library_folders_is_not_found() {
        let default = tempfile::tempdir().unwrap();
        let steam = tempfile::tempdir().unwrap();
        let paths = Paths::with_base(steam.path());
        fs::create_dir_all(paths.steamapps_dir()).unwrap();
        // Invalid UTF-8 cannot be read as text.
        fs::write(paths.library_folders_path(), [0xff, 0xfe, 0x00]).unwrap();
        let registry = FakeRegistry::default().with_value(STEAM_KEY, steam.path().to_str().unwrap());

        let locator = GameLocator::with_default_root(GAME, &registry, default.path());
        assert_eq!(locator.locate(), None);
    }

    #[test]
    fn locator_validate_matches_free_function() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = install_game(tmp.path());
        let locator = GameLocator::with_default_root(GAME, crate::NoRegistry, tmp.path());
        assert!(locator.validate(&dir));
        assert!(!locator.validate(tmp.path()));
    }
}
