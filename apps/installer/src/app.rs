//! Application flow: find the game, then install MelonLoader if it is missing.

use std::path::PathBuf;

use anyhow::{anyhow, bail};
use pwaat_melonloader::{Installer, InstallerOptions, is_installed};
use pwaat_steam::{GameLocator, GameSpec, Registry, SystemRegistry, validate_game_path};
use tokio::sync::mpsc;

use crate::config::{self, Config};

/// Phoenix Wright: Ace Attorney Trilogy as installed by Steam.
pub const GAME: GameSpec = GameSpec {
    folder_name: "Phoenix Wright Ace Attorney Trilogy",
    executable: "PWAAT.exe",
};

/// Runs the installer once.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let game_dir = resolve_game_dir(&config, SystemRegistry::default())?;
    tracing::info!(path = %game_dir.display(), "using game directory");

    if is_installed(&game_dir) && !config.force_reinstall {
        tracing::info!("MelonLoader is already installed, nothing to do");
        return Ok(());
    }

    let installer = Installer::with_options(InstallerOptions {
        download_url: config.download_url.clone(),
        timeout: config.download_timeout(),
        ..InstallerOptions::default()
    })?;
    let cancel = installer.cancel_token();

    let (events_tx, mut events_rx) = mpsc::channel(16);
    let reporter = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            tracing::info!("{event}");
        }
    });

    let result = {
        let install = installer.install(&game_dir, Some(&events_tx));
        tokio::pin!(install);

        tokio::select! {
            result = &mut install => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("SIGINT received, cancelling install");
                cancel.cancel();
                install.await
            }
        }
    };

    drop(events_tx);
    let _ = reporter.await;

    result?;
    tracing::info!(path = %game_dir.display(), "MelonLoader ready");
    Ok(())
}

/// Returns the game directory from the config override or a Steam search.
fn resolve_game_dir<R: Registry>(config: &Config, registry: R) -> anyhow::Result<PathBuf> {
    if let Some(dir) = config.game_dir() {
        if !validate_game_path(&dir, &GAME) {
            bail!(
                "configured game_path {} does not contain {}",
                dir.display(),
                GAME.executable
            );
        }
        return Ok(dir);
    }

    let locator = match config.steam_root() {
        Some(root) => GameLocator::with_default_root(GAME, registry, root),
        None => GameLocator::new(GAME, registry),
    };

    locator.locate().ok_or_else(|| {
        anyhow!(
            "could not find {} in any Steam library; set game_path in {} to the game folder",
            GAME.folder_name,
            config::config_path().display()
        )
    })
}
