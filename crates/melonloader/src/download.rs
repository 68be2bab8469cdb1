//! Streaming HTTP download into a local file.

use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::InstallError;

/// Downloads `url` into `dest`, replacing its contents.
///
/// The body is written chunk by chunk as it arrives. Any non-2xx status is
/// an error; nothing is retried. Returns the number of bytes written.
pub async fn download_to_file(
    http: &reqwest::Client,
    url: &str,
    dest: &Path,
) -> Result<u64, InstallError> {
    let download_err = |source: reqwest::Error| InstallError::Download {
        url: url.to_string(),
        source,
    };

    let mut resp = http.get(url).send().await.map_err(download_err)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(InstallError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let mut file = tokio::fs::File::create(dest).await?;
    let mut written = 0u64;
    while let Some(chunk) = resp.chunk().await.map_err(download_err)? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    debug!(url, bytes = written, dest = %dest.display(), "download finished");
    Ok(written)
}
