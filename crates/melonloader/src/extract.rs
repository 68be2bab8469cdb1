//! Zip extraction over an existing directory.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::trace;
use zip::ZipArchive;

use crate::error::InstallError;

/// Extracts every file entry of the zip at `archive_path` into `dest`.
///
/// Directory entries are skipped; parent directories are created as needed
/// and existing files are overwritten. Entries whose names would land
/// outside `dest` are rejected. Returns the number of files written.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize, InstallError> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| {
        InstallError::Extract(format!("failed to open {}: {e}", archive_path.display()))
    })?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| InstallError::Extract(format!("failed to read entry {i}: {e}")))?;

        if entry.is_dir() {
            continue;
        }

        let relative = entry.enclosed_name().ok_or_else(|| {
            InstallError::Extract(format!("entry escapes target directory: {}", entry.name()))
        })?;
        let target = dest.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out).map_err(|e| {
            InstallError::Extract(format!("failed to write {}: {e}", target.display()))
        })?;
        trace!(path = %target.display(), "extracted");
        written += 1;
    }

    Ok(written)
}
