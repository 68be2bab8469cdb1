//! MelonLoader installer.
//!
//! Each install owns one temporary archive. It is removed explicitly once
//! the pipeline returns and, through its drop guard, on any other exit
//! (panic unwinding or the install future being dropped).

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::download::download_to_file;
use crate::error::InstallError;
use crate::extract::extract_archive;
use crate::types::InstallEvent;
use crate::{DOWNLOAD_URL, MELONLOADER_DIR, MELONLOADER_VERSION, PROXY_DLL, USER_AGENT};

/// Default limit for the whole download request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Returns true if MelonLoader is installed in `game_dir`.
///
/// Both the proxy DLL and the `MelonLoader` folder must be present; either
/// one alone is treated as a broken install.
pub fn is_installed(game_dir: &Path) -> bool {
    game_dir.join(PROXY_DLL).is_file() && game_dir.join(MELONLOADER_DIR).is_dir()
}

/// Installer settings.
#[derive(Debug, Clone)]
pub struct InstallerOptions {
    /// Release archive to download.
    pub download_url: String,
    /// Limit for the whole download request.
    pub timeout: Duration,
    /// Directory for the temporary archive.
    pub temp_dir: PathBuf,
}

impl Default for InstallerOptions {
    fn default() -> Self {
        Self {
            download_url: DOWNLOAD_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            temp_dir: std::env::temp_dir(),
        }
    }
}

/// Downloads and installs MelonLoader into a game directory.
pub struct Installer {
    http: reqwest::Client,
    options: InstallerOptions,
    cancel: CancellationToken,
}

impl Installer {
    /// Creates an installer with default options.
    pub fn new() -> Result<Self, InstallError> {
        Self::with_options(InstallerOptions::default())
    }

    /// Creates an installer with custom options.
    pub fn with_options(options: InstallerOptions) -> Result<Self, InstallError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(options.timeout)
            .build()
            .map_err(InstallError::Client)?;

        Ok(Self {
            http,
            options,
            cancel: CancellationToken::new(),
        })
    }

    /// Returns a token that cancels the running install.
    ///
    /// Once cancelled, every later install on this installer returns
    /// [`InstallError::Cancelled`].
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Downloads, extracts and verifies MelonLoader in `game_dir`.
    ///
    /// Existing files are overwritten, so running this on an installed game
    /// yields a clean copy of the release. Progress events go to `events`
    /// when given.
    pub async fn install(
        &self,
        game_dir: &Path,
        events: Option<&mpsc::Sender<InstallEvent>>,
    ) -> Result<(), InstallError> {
        let archive = tempfile::Builder::new()
            .prefix("MelonLoader.")
            .suffix(".zip")
            .tempfile_in(&self.options.temp_dir)?
            .into_temp_path();
        debug!(path = %archive.display(), "created temporary archive");

        let result = self.run(&archive, game_dir, events).await;

        if let Err(e) = archive.close() {
            warn!(error = %e, "failed to remove temporary archive");
        }
        result
    }

    async fn run(
        &self,
        archive: &Path,
        game_dir: &Path,
        events: Option<&mpsc::Sender<InstallEvent>>,
    ) -> Result<(), InstallError> {
        // 1. Download
        emit(events, InstallEvent::Downloading {
            version: MELONLOADER_VERSION,
        });
        let url = self.options.download_url.as_str();
        info!(url, "downloading MelonLoader");

        let bytes = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(InstallError::Cancelled),
            result = download_to_file(&self.http, url, archive) => result?,
        };
        info!(bytes, "download complete");

        if self.cancel.is_cancelled() {
            return Err(InstallError::Cancelled);
        }

        // 2. Extract
        emit(events, InstallEvent::Extracting);
        let (archive_path, dest) = (archive.to_path_buf(), game_dir.to_path_buf());
        let files = tokio::task::spawn_blocking(move || extract_archive(&archive_path, &dest))
            .await
            .map_err(|e| InstallError::Extract(format!("extraction task failed: {e}")))??;
        info!(files, dir = %game_dir.display(), "extracted MelonLoader");

        // 3. Verify
        if !is_installed(game_dir) {
            warn!(dir = %game_dir.display(), "MelonLoader markers missing after extraction");
            return Err(InstallError::Verification);
        }

        emit(events, InstallEvent::Completed);
        Ok(())
    }
}

/// Reports progress without waiting on the receiver.
///
/// A full or closed channel drops the event.
fn emit(events: Option<&mpsc::Sender<InstallEvent>>, event: InstallEvent) {
    debug!(%event, "install progress");
    if let Some(tx) = events {
        if let Err(e) = tx.try_send(event) {
            debug!(error = %e, "progress event dropped");
        }
    }
}
