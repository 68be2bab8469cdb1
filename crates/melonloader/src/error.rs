//! Install error types.

use crate::RELEASE_PAGE_URL;

/// Errors produced while installing MelonLoader.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(
        "failed to download {url}: {source}. Please try installing MelonLoader manually from: {manual}",
        manual = RELEASE_PAGE_URL
    )]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "download of {url} failed with HTTP {status}. Please try installing MelonLoader manually from: {manual}",
        manual = RELEASE_PAGE_URL
    )]
    HttpStatus { url: String, status: u16 },

    #[error("extraction failed: {0}")]
    Extract(String),

    #[error(
        "MelonLoader extraction completed but verification failed. Please try installing MelonLoader manually from: {manual}",
        manual = RELEASE_PAGE_URL
    )]
    Verification,

    #[error("installation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Returns true if the archive could not be fetched.
    pub fn is_download_failure(&self) -> bool {
        matches!(
            self,
            InstallError::Client(_) | InstallError::Download { .. } | InstallError::HttpStatus { .. }
        )
    }
}
